//! File operations backing the text-file tag storage
//!
//! Every helper here is idempotent with respect to existing content: the
//! "ensure" helpers only ever create what is missing.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::{Error, Result};

/// Ensure the directory that will contain `file_path` exists.
///
/// Creates all missing ancestors. A path without a parent component (a bare
/// file name) needs nothing created.
pub fn ensure_path_exists(file_path: &Path) -> Result<()> {
    match file_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            if !parent.is_dir() {
                tracing::trace!(?parent, "Creating tag storage directory");
            }
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))
        }
        _ => Ok(()),
    }
}

/// Create an empty file at `path` unless one already exists.
///
/// Returns `true` when the file was created by this call.
pub fn create_file_if_not_exists(path: &Path) -> Result<bool> {
    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(_) => {
            tracing::trace!(?path, "Created empty tag storage file");
            Ok(true)
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(false),
        Err(e) => Err(Error::io(path, e)),
    }
}

/// Read the whole file and strip surrounding whitespace.
pub fn read_and_trim(path: &Path) -> Result<String> {
    let content = read_text(path)?;
    Ok(content.trim().to_string())
}

/// Read text content from a file.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

/// Write content atomically to a file.
///
/// Content goes to a uniquely named temp file in the target's directory,
/// which is then renamed over the target. Readers see either the old or the
/// new content; concurrent writers each replace the file whole, last one wins.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    ensure_path_exists(path)?;

    let dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut temp_file = NamedTempFile::new_in(dir).map_err(|e| Error::io(dir, e))?;
    temp_file
        .write_all(content)
        .map_err(|e| Error::io(temp_file.path(), e))?;
    temp_file
        .as_file()
        .sync_all()
        .map_err(|e| Error::io(temp_file.path(), e))?;

    temp_file
        .persist(path)
        .map_err(|e| Error::io(path, e.error))?;

    Ok(())
}

/// Write text content to a file atomically.
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}
