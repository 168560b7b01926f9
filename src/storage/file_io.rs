//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::Path;

use crate::error::TrackerError;

/// Read a whole file as text, returning `None` if it doesn't exist
pub fn read_blob<P: AsRef<Path>>(path: P) -> Result<Option<String>, TrackerError> {
    let path = path.as_ref();

    match fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(TrackerError::Storage(format!(
            "Failed to read {}: {}",
            path.display(),
            e
        ))),
    }
}

/// Write text to a file atomically (write to temp, then rename)
///
/// The file is either completely written or not modified at all.
pub fn write_blob_atomic<P: AsRef<Path>>(path: P, contents: &str) -> Result<(), TrackerError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            TrackerError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Same directory as the target so the rename stays on one filesystem
    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_path = Path::new(&temp_name);

    let file = File::create(temp_path)
        .map_err(|e| TrackerError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(contents.as_bytes())
        .map_err(|e| TrackerError::Storage(format!("Failed to write data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| TrackerError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| TrackerError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(temp_path, path).map_err(|e| {
        let _ = fs::remove_file(temp_path);
        TrackerError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_nonexistent_returns_none() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent");

        assert_eq!(read_blob(&path).unwrap(), None);
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("currency");

        write_blob_atomic(&path, "EUR").unwrap();
        assert_eq!(read_blob(&path).unwrap().as_deref(), Some("EUR"));

        write_blob_atomic(&path, "GBP").unwrap();
        assert_eq!(read_blob(&path).unwrap().as_deref(), Some("GBP"));
    }

    #[test]
    fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions");

        write_blob_atomic(&path, "[]").unwrap();

        assert!(path.exists());
        assert!(!temp_dir.path().join("transactions.tmp").exists());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("blob");

        write_blob_atomic(&path, "x").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_read_directory_is_storage_error() {
        let temp_dir = TempDir::new().unwrap();

        let err = read_blob(temp_dir.path()).unwrap_err();
        assert!(matches!(err, TrackerError::Storage(_)));
    }
}
