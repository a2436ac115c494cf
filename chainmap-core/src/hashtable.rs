//! Fixed-capacity chained hash table
//!
//! Provides:
//! - Bucket array sized once at construction, never resized
//! - FNV-1a (32-bit) index modulo capacity
//! - Owned singly linked chain per bucket, appended at the tail
//! - Duplicate keys retained; lookups see the entry nearest the head

use crate::error::TableError;
use crate::hash::fnv1a_32;
use log::{debug, trace};
use std::fmt;

/// Bucket count used by `Table::default`
pub const DEFAULT_CAPACITY: usize = 10;

/// One bucket slot: empty, or the owning head of a chain
pub type Bucket<V> = Option<Box<Entry<V>>>;

/// Node in a bucket's chain
pub struct Entry<V> {
    pub(crate) key: String,
    pub(crate) value: V,
    pub(crate) next: Bucket<V>,
}

impl<V> Entry<V> {
    fn new(key: String, value: V) -> Self {
        Entry {
            key,
            value,
            next: None,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    /// Following entry in the same chain
    pub fn next(&self) -> Option<&Entry<V>> {
        self.next.as_deref()
    }

    /// Walk the chain starting at this entry
    pub fn iter(&self) -> Chain<'_, V> {
        Chain { next: Some(self) }
    }
}

// One node plus a count of the entries chained after it.
impl<V: fmt::Debug> fmt::Debug for Entry<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("key", &self.key)
            .field("value", &self.value)
            .field("chained", &self.iter().skip(1).count())
            .finish()
    }
}

/// Head-to-tail iterator over one chain
pub struct Chain<'a, V> {
    next: Option<&'a Entry<V>>,
}

impl<'a, V> Chain<'a, V> {
    pub fn new(bucket: &'a Bucket<V>) -> Self {
        Chain {
            next: bucket.as_deref(),
        }
    }
}

impl<'a, V> Iterator for Chain<'a, V> {
    type Item = &'a Entry<V>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|entry| {
            self.next = entry.next.as_deref();
            entry
        })
    }
}

// Yields split borrows so the key can be compared while the value is handed out.
struct ChainMut<'a, V> {
    next: Option<&'a mut Entry<V>>,
}

impl<'a, V> Iterator for ChainMut<'a, V> {
    type Item = (&'a str, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        self.next.take().map(|entry| {
            let Entry { key, value, next } = entry;
            self.next = next.as_deref_mut();
            (key.as_str(), value)
        })
    }
}

/// Hash table with a fixed number of separately chained buckets
pub struct Table<V> {
    /// Bucket slots, length == capacity
    pub(crate) buckets: Vec<Bucket<V>>,

    /// Live entries across all chains
    pub(crate) size: usize,
}

impl<V> Table<V> {
    /// Create a table with `capacity` empty buckets
    ///
    /// # Arguments
    /// * `capacity` - Number of buckets, fixed for the table's lifetime
    ///
    /// # Errors
    /// `TableError::ZeroCapacity` if `capacity` is 0.
    pub fn new(capacity: usize) -> Result<Self, TableError> {
        if capacity == 0 {
            return Err(TableError::ZeroCapacity);
        }

        debug!("creating table with {} buckets", capacity);
        Ok(Self::with_buckets(capacity))
    }

    fn with_buckets(capacity: usize) -> Self {
        let mut buckets = Vec::with_capacity(capacity);
        buckets.resize_with(capacity, || None);

        Table { buckets, size: 0 }
    }

    /// Bucket that `key` hashes to
    #[inline]
    pub fn bucket_index(&self, key: &str) -> usize {
        fnv1a_32(key.as_bytes()) as usize % self.buckets.len()
    }

    /// Append an entry to the tail of its bucket's chain
    ///
    /// Existing entries with the same key are left in place, so the table
    /// may hold several entries per key.
    pub fn insert(&mut self, value: V, key: impl Into<String>) {
        let key = key.into();
        let index = self.bucket_index(&key);

        let mut link = &mut self.buckets[index];
        let mut position = 0usize;
        while let Some(entry) = link {
            link = &mut entry.next;
            position += 1;
        }

        trace!("insert {:?} -> bucket {} position {}", key, index, position);
        *link = Some(Box::new(Entry::new(key, value)));
        self.size += 1;
    }

    /// Get value by key
    ///
    /// Returns the first match scanning head to tail.
    pub fn get(&self, key: &str) -> Result<&V, TableError> {
        let index = self.bucket_index(key);

        Chain::new(&self.buckets[index])
            .find(|entry| entry.key == key)
            .map(|entry| &entry.value)
            .ok_or_else(|| TableError::key_not_found(key))
    }

    /// Get mutable value by key
    pub fn get_mut(&mut self, key: &str) -> Result<&mut V, TableError> {
        let index = self.bucket_index(key);

        ChainMut {
            next: self.buckets[index].as_deref_mut(),
        }
        .find(|(entry_key, _)| *entry_key == key)
        .map(|(_, value)| value)
        .ok_or_else(|| TableError::key_not_found(key))
    }

    /// Overwrite the value of the first entry matching `key`
    pub fn update(&mut self, key: &str, value: V) -> Result<(), TableError> {
        match self.get_mut(key) {
            Ok(slot) => {
                *slot = value;
                trace!("update {:?}", key);
                Ok(())
            }
            Err(err) => {
                trace!("update {:?}: not found", key);
                Err(err)
            }
        }
    }

    /// Unlink the first entry matching `key` and return its value
    ///
    /// Later entries sharing the key stay in the chain; the next one becomes
    /// visible to `get`.
    pub fn delete(&mut self, key: &str) -> Result<V, TableError> {
        let index = self.bucket_index(key);

        // `link` is the slot pointing at the node under inspection: the
        // bucket itself for the head, otherwise the previous node's `next`.
        let mut link = &mut self.buckets[index];
        while link.as_ref().is_some_and(|entry| entry.key != key) {
            if let Some(entry) = link {
                link = &mut entry.next;
            }
        }

        match link.take() {
            Some(mut removed) => {
                *link = removed.next.take();
                self.size -= 1;
                trace!("delete {:?} from bucket {}", key, index);
                Ok(removed.value)
            }
            None => {
                trace!("delete {:?}: not found", key);
                Err(TableError::key_not_found(key))
            }
        }
    }

    /// Whole bucket array in index order
    ///
    /// Empty slots are `None`. Fails only when the array has no slots.
    pub fn enumerate(&self) -> Result<&[Bucket<V>], TableError> {
        if self.buckets.is_empty() {
            return Err(TableError::EmptyEntries);
        }

        Ok(&self.buckets)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_ok()
    }

    /// Get current size
    pub fn len(&self) -> usize {
        self.size
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Get capacity (bucket count)
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Get load factor
    pub fn load_factor(&self) -> f64 {
        self.size as f64 / self.buckets.len() as f64
    }

    /// Number of entries chained in each bucket
    pub fn chain_lengths(&self) -> Vec<usize> {
        self.buckets
            .iter()
            .map(|bucket| Chain::new(bucket).count())
            .collect()
    }

    /// Iterate over all entries, bucket by bucket, head to tail
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.buckets
            .iter()
            .flat_map(Chain::new)
            .map(|entry| (entry.key(), entry.value()))
    }
}

impl<V> Default for Table<V> {
    fn default() -> Self {
        Self::with_buckets(DEFAULT_CAPACITY)
    }
}

// Unlink chains one node at a time; the derived drop would recurse per node.
impl<V> Drop for Table<V> {
    fn drop(&mut self) {
        for bucket in self.buckets.iter_mut() {
            let mut link = bucket.take();
            while let Some(mut entry) = link {
                link = entry.next.take();
            }
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for Table<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
