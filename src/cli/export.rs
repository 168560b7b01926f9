//! Export CLI command
//!
//! Writes the transaction history to a file.

use clap::ValueEnum;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{TrackerError, TrackerResult};
use crate::export::{export_history_json, export_history_yaml, export_transactions_csv};
use crate::services::Snapshot;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (one row per transaction)
    Csv,
    /// JSON format (transactions and currency)
    Json,
    /// YAML format (transactions and currency, human-readable)
    Yaml,
}

/// Write the snapshot to `output` in `format`
pub fn export_to_file(
    snapshot: Snapshot<'_>,
    output: &Path,
    format: ExportFormat,
) -> TrackerResult<()> {
    let file = File::create(output).map_err(|e| {
        TrackerError::Export(format!(
            "Failed to create file {}: {}",
            output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Csv => export_transactions_csv(snapshot.transactions, &mut writer)?,
        ExportFormat::Json => export_history_json(snapshot, &mut writer)?,
        ExportFormat::Yaml => export_history_yaml(snapshot, &mut writer)?,
    }

    writer
        .flush()
        .map_err(|e| TrackerError::Export(e.to_string()))?;
    Ok(())
}

/// Handle the export command
pub fn handle_export_command(
    snapshot: Snapshot<'_>,
    output: &Path,
    format: ExportFormat,
) -> TrackerResult<()> {
    export_to_file(snapshot, output, format)?;
    println!(
        "Exported {} transactions to: {}",
        snapshot.transactions.len(),
        output.display()
    );
    Ok(())
}
