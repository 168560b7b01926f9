//! Storage layer for fintrack
//!
//! The ledger persists through a minimal key-value blob interface. Two
//! implementations are provided: a directory of files with atomic writes, and
//! an in-memory map.

pub mod file_io;
pub mod file_store;
pub mod memory;

pub use file_io::{read_blob, write_blob_atomic};
pub use file_store::FileStore;
pub use memory::MemoryStore;

use crate::error::TrackerResult;

/// Key holding the serialized transaction list
pub const TRANSACTIONS_KEY: &str = "transactions";

/// Key holding the raw currency code
pub const CURRENCY_KEY: &str = "currency";

/// A key-value store of opaque text blobs
///
/// `save` overwrites any previous value for the key entirely.
pub trait BlobStore {
    /// Read the blob stored under `key`, or `None` if nothing was ever saved
    fn load(&self, key: &str) -> TrackerResult<Option<String>>;

    /// Replace the blob stored under `key`
    fn save(&mut self, key: &str, value: &str) -> TrackerResult<()>;
}
