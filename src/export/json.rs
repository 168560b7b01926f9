//! JSON export
//!
//! A single document holding the active currency and every transaction.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::catalog::Currency;
use crate::error::{TrackerError, TrackerResult};
use crate::models::Transaction;
use crate::services::Snapshot;

/// Exported history document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryExport {
    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Active currency at export time
    pub currency: Currency,

    /// All transactions, newest first
    pub transactions: Vec<Transaction>,
}

impl HistoryExport {
    /// Build an export document from a ledger snapshot
    pub fn from_snapshot(snapshot: Snapshot<'_>) -> Self {
        Self {
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            currency: snapshot.currency,
            transactions: snapshot.transactions.to_vec(),
        }
    }
}

/// Export the history as pretty-printed JSON
pub fn export_history_json<W: Write>(snapshot: Snapshot<'_>, writer: &mut W) -> TrackerResult<()> {
    let export = HistoryExport::from_snapshot(snapshot);

    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| TrackerError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| TrackerError::Export(e.to_string()))?;

    Ok(())
}
