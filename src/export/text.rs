//! Plain-text result export.
//!
//! One `address#region` entry per line, UTF-8, no header or trailer.

use std::path::Path;

use log::{error, info};
use tokio::io::AsyncWriteExt;

use crate::error_handling::ExportError;

/// Writes `entries` to `path`, one per line, replacing any existing content.
///
/// # Returns
///
/// The number of lines written.
///
/// # Errors
///
/// Returns [`ExportError::Io`] if the file cannot be created or written.
pub async fn write_results(entries: &[String], path: &Path) -> Result<usize, ExportError> {
    let io_error = |source: std::io::Error| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut contents = String::with_capacity(entries.iter().map(|e| e.len() + 1).sum());
    for entry in entries {
        contents.push_str(entry);
        contents.push('\n');
    }

    let mut file = tokio::fs::File::create(path).await.map_err(io_error)?;
    file.write_all(contents.as_bytes()).await.map_err(io_error)?;
    file.flush().await.map_err(io_error)?;

    Ok(entries.len())
}

/// Writes the results and logs the outcome without propagating failures.
///
/// # Returns
///
/// `true` if the file was written.
pub async fn save_results(entries: &[String], path: &Path) -> bool {
    match write_results(entries, path).await {
        Ok(count) => {
            info!("Saved {} entries to {}", count, path.display());
            true
        }
        Err(e) => {
            error!("Failed to save results: {e}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn entries(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_write_results_one_line_per_entry_in_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ip_list.txt");

        let count = write_results(&entries(&["1.2.3.4#us", "1.2.3.5#us", "5.6.7.8#eu"]), &path)
            .await
            .unwrap();

        assert_eq!(count, 3);
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "1.2.3.4#us\n1.2.3.5#us\n5.6.7.8#eu\n");
        assert_eq!(written.lines().count(), 3);
    }

    #[tokio::test]
    async fn test_write_results_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ip_list.txt");

        write_results(&entries(&["1.1.1.1#a", "2.2.2.2#a", "3.3.3.3#a"]), &path)
            .await
            .unwrap();
        write_results(&entries(&["9.9.9.9#b"]), &path).await.unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "9.9.9.9#b\n");
    }

    #[tokio::test]
    async fn test_write_results_empty_truncates() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ip_list.txt");
        std::fs::write(&path, "stale#x\n").unwrap();

        let count = write_results(&[], &path).await.unwrap();

        assert_eq!(count, 0);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    #[tokio::test]
    async fn test_save_results_reports_failure() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing-dir").join("ip_list.txt");

        assert!(!save_results(&entries(&["1.2.3.4#us"]), &path).await);
        assert!(write_results(&entries(&["1.2.3.4#us"]), &path).await.is_err());
    }
}
