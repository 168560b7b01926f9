//! fintrack - Terminal personal finance tracker
//!
//! This library records income and expense transactions, keeps them in a
//! local blob store, and derives the aggregate views a user needs to see
//! where their money goes.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `catalog`: Supported currencies and transaction categories
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, money, ids)
//! - `storage`: Key-value blob persistence
//! - `services`: The ledger
//! - `reports`: Totals, category breakdown and monthly summary
//! - `display`: Terminal views
//! - `export`: CSV, JSON and YAML export
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use fintrack::catalog::Category;
//! use fintrack::models::TransactionType;
//! use fintrack::reports::Dashboard;
//! use fintrack::services::Ledger;
//! use fintrack::storage::MemoryStore;
//!
//! let mut ledger = Ledger::load(MemoryStore::new())?;
//! ledger.add("Lunch", "12.50", Category::Food, TransactionType::Expense)?;
//! let dashboard = Dashboard::generate(ledger.snapshot());
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{TrackerError, TrackerResult};
