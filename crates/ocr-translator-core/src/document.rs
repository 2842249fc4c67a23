//! Output-document persistence and external viewing.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Writes run artifacts to disk and hands them to an external viewer.
pub trait DocumentSink: Send + Sync {
    /// Persist text as a document at the given path.
    fn persist(&self, text: &str, path: &Path) -> Result<()>;

    /// Open a persisted document in the platform's external viewer.
    ///
    /// Best-effort: failures are logged and swallowed, they never affect
    /// the run that produced the document.
    fn open_externally(&self, path: &Path);
}

/// Plain-text file sink. The document format is a host concern; this core
/// persists the extracted and translated text verbatim.
pub struct TextDocumentWriter;

impl DocumentSink for TextDocumentWriter {
    fn persist(&self, text: &str, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::Persist {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        }
        fs::write(path, text).map_err(|e| Error::Persist {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        debug!("Persisted {} bytes to {}", text.len(), path.display());
        Ok(())
    }

    fn open_externally(&self, path: &Path) {
        let result = open_command(path);
        if let Err(e) = result {
            warn!("Could not open {} externally: {e}", path.display());
        }
    }
}

#[cfg(target_os = "macos")]
fn open_command(path: &Path) -> std::io::Result<()> {
    std::process::Command::new("open").arg(path).spawn()?;
    Ok(())
}

#[cfg(target_os = "windows")]
fn open_command(path: &Path) -> std::io::Result<()> {
    std::process::Command::new("cmd")
        .args(["/C", "start", ""])
        .arg(path)
        .spawn()?;
    Ok(())
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn open_command(path: &Path) -> std::io::Result<()> {
    std::process::Command::new("xdg-open").arg(path).spawn()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn persist_writes_text_verbatim() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");
        TextDocumentWriter.persist("hello\nworld", &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello\nworld");
    }

    #[test]
    fn persist_creates_missing_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("out.txt");
        TextDocumentWriter.persist("", &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn persist_into_unwritable_location_errors() {
        let result = TextDocumentWriter.persist("x", Path::new("/proc/definitely/not/here.txt"));
        assert!(matches!(result, Err(Error::Persist { .. })));
    }
}
