//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the ledger.

pub mod currency;
pub mod export;
pub mod transaction;
pub mod view;

pub use currency::handle_currency_command;
pub use export::{handle_export_command, ExportFormat};
pub use transaction::{handle_transaction_command, TransactionCommands};
pub use view::{handle_view_command, ViewCommands};
