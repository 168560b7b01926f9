//! Service layer for fintrack
//!
//! Business logic on top of the storage layer: input validation, id
//! assignment, and persistence after every mutation.

pub mod ledger;

pub use ledger::{Ledger, Snapshot};
