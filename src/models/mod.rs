//! Core data models for fintrack
//!
//! The transaction record, its identifier, and the fixed-point money type.

pub mod ids;
pub mod money;
pub mod transaction;

pub use ids::TransactionId;
pub use money::{Money, MoneyParseError};
pub use transaction::{Transaction, TransactionType, TransactionValidationError, MAX_AMOUNT};
