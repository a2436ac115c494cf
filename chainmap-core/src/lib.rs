//! Chainmap - fixed-capacity hash table with separate chaining
//!
//! Core library providing:
//! - Fixed bucket array sized at construction
//! - FNV-1a (32-bit) bucket addressing
//! - Owned singly linked chains per bucket
//! - Insert / get / update / delete / enumerate over string keys

pub mod hashtable;
pub mod hash;
pub mod error;

pub use hashtable::{Bucket, Chain, Entry, Table, DEFAULT_CAPACITY};
pub use hash::{fnv1a_32, Fnv1a32};
pub use error::TableError;
