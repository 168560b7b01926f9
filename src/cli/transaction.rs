//! Transaction CLI commands
//!
//! Add, delete and list transactions in the ledger.

use clap::Subcommand;

use crate::catalog::Category;
use crate::config::Settings;
use crate::display::{format_history, format_transaction_details};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Transaction, TransactionType};
use crate::services::Ledger;
use crate::storage::BlobStore;

/// Transaction commands
#[derive(Subcommand, Debug)]
pub enum TransactionCommands {
    /// Record a new income or expense
    Add {
        /// What the money was for
        description: String,
        /// Positive amount, e.g. "12.50"
        amount: String,
        /// Category key (food, transport, shopping, entertainment, bills, health, salary, other)
        #[arg(short, long, default_value = "other")]
        category: String,
        /// Transaction type (income or expense)
        #[arg(short = 't', long = "type", default_value = "expense")]
        kind: String,
    },
    /// Delete a transaction
    #[command(alias = "rm")]
    Delete {
        /// Transaction ID as shown in the history, or a full UUID
        id: String,
    },
    /// List transactions, newest first
    List {
        /// Number of transactions to show (defaults to the configured history limit)
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command<S: BlobStore>(
    ledger: &mut Ledger<S>,
    settings: &Settings,
    cmd: TransactionCommands,
) -> TrackerResult<()> {
    match cmd {
        TransactionCommands::Add {
            description,
            amount,
            category,
            kind,
        } => {
            let txn = add_transaction(ledger, &description, &amount, &category, &kind)?;

            println!("Added transaction:");
            print!(
                "{}",
                format_transaction_details(&txn, ledger.currency(), settings)
            );
        }

        TransactionCommands::Delete { id } => {
            let txn = delete_transaction(ledger, &id)?;
            println!("Deleted transaction {} ({})", txn.id, txn.description);
        }

        TransactionCommands::List { limit } => {
            let limit = limit.unwrap_or(settings.history_limit);
            print!(
                "{}",
                format_history(ledger.transactions(), ledger.currency(), settings, limit)
            );
        }
    }

    Ok(())
}

/// Parse the category and type tags, then add to the ledger
pub fn add_transaction<S: BlobStore>(
    ledger: &mut Ledger<S>,
    description: &str,
    amount: &str,
    category: &str,
    kind: &str,
) -> TrackerResult<Transaction> {
    let category: Category = category.parse()?;
    let kind: TransactionType = kind.parse()?;
    ledger.add(description, amount, category, kind)
}

/// Resolve `identifier` and remove that transaction
pub fn delete_transaction<S: BlobStore>(
    ledger: &mut Ledger<S>,
    identifier: &str,
) -> TrackerResult<Transaction> {
    let txn = ledger
        .find(identifier)
        .cloned()
        .ok_or_else(|| TrackerError::transaction_not_found(identifier))?;

    ledger.remove(txn.id)?;
    Ok(txn)
}
