//! Export module
//!
//! Writes the transaction history out of the ledger:
//! - CSV: one row per transaction (spreadsheet-compatible)
//! - JSON: machine-readable document with the active currency
//! - YAML: the same document in human-readable form

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::export_transactions_csv;
pub use json::{export_history_json, HistoryExport};
pub use yaml::export_history_yaml;
