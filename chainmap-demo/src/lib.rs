//! Chainmap demo - walkthrough driver and table printer
//!
//! Provides:
//! - Colorized bucket/chain dump of a `Table`
//! - The reference insert/update/collide/delete walkthrough
//! - Command-line configuration and logger setup for the binary

pub mod config;
pub mod display;
pub mod error;
pub mod logger;
pub mod scenario;

pub use config::DemoConfig;
pub use display::Printer;
pub use error::DemoError;
pub use scenario::Payload;
