//! YAML export
//!
//! Same document as the JSON export, preceded by a short comment header.

use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::export::json::HistoryExport;
use crate::services::Snapshot;

/// Export the history to YAML
pub fn export_history_yaml<W: Write>(snapshot: Snapshot<'_>, writer: &mut W) -> TrackerResult<()> {
    let export = HistoryExport::from_snapshot(snapshot);
    let export_err = |e: std::io::Error| TrackerError::Export(e.to_string());

    writeln!(writer, "# fintrack transaction history").map_err(export_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(export_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(export_err)?;
    writeln!(writer).map_err(export_err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| TrackerError::Export(e.to_string()))?;

    Ok(())
}
