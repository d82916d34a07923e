//! File I/O utilities with atomic writes
//!
//! Readers never observe a half-written report: content goes to a temp file
//! in the target directory, is synced, then renamed over the destination.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;

use crate::error::ReportError;

/// Write text to a file atomically (write to temp, then rename)
///
/// Missing parent directories are created.
pub fn write_atomic<P: AsRef<Path>>(path: P, contents: &str) -> Result<(), ReportError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            ReportError::OutputWrite(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Same directory as the target so the rename stays on one filesystem
    let mut temp_name = path.file_name().unwrap_or_default().to_os_string();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);

    let file = File::create(&temp_path).map_err(|e| {
        ReportError::OutputWrite(format!(
            "Failed to create temp file {}: {}",
            temp_path.display(),
            e
        ))
    })?;

    let mut writer = BufWriter::new(file);
    let written = writer
        .write_all(contents.as_bytes())
        .and_then(|_| writer.flush())
        .and_then(|_| writer.get_ref().sync_all());
    if let Err(e) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(ReportError::OutputWrite(format!(
            "Failed to write {}: {}",
            temp_path.display(),
            e
        )));
    }
    drop(writer);

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        ReportError::OutputWrite(format!("Failed to move report into place at {}: {}", path.display(), e))
    })?;

    debug!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("report.html");

        write_atomic(&path, "<html></html>").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "<html></html>");
    }

    #[test]
    fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("report.html");
        let temp_path = temp_dir.path().join("report.html.tmp");

        write_atomic(&path, "content").unwrap();

        assert!(path.exists());
        assert!(!temp_path.exists());
    }

    #[test]
    fn test_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("report.html");

        write_atomic(&path, "first").unwrap();
        write_atomic(&path, "second").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("out").join("report.html");

        write_atomic(&path, "content").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_unwritable_parent_is_output_error() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "a file, not a directory").unwrap();

        let err = write_atomic(blocker.join("report.html"), "content").unwrap_err();
        assert!(matches!(err, ReportError::OutputWrite(_)));
    }
}
