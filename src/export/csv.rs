//! CSV export
//!
//! One row per transaction with the amount in major units and two decimals.

use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::models::Transaction;

const HEADER: [&str; 6] = ["id", "date", "description", "category", "type", "amount"];

/// Export transactions to CSV, in ledger order (newest first)
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: W,
) -> TrackerResult<()> {
    let mut out = ::csv::Writer::from_writer(writer);
    let export_err = |e: ::csv::Error| TrackerError::Export(e.to_string());

    out.write_record(HEADER).map_err(export_err)?;

    for txn in transactions {
        out.write_record([
            txn.id.as_uuid().to_string(),
            txn.date.to_rfc3339(),
            txn.description.clone(),
            txn.category.key().to_string(),
            txn.kind.as_str().to_string(),
            txn.amount.to_string(),
        ])
        .map_err(export_err)?;
    }

    out.flush().map_err(|e| TrackerError::Export(e.to_string()))?;
    Ok(())
}
