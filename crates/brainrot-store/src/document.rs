//! JSON array documents on disk
//!
//! Reads are strict: a missing file and a malformed document are distinct
//! errors. Writes replace the whole file atomically by writing a temporary
//! file next to the target and renaming it over the target, so a failed write
//! leaves the previous content in place.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Errors reading or writing a document
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The document does not exist.
    #[error("File not found: {}", .0.display())]
    ResourceNotFound(PathBuf),

    /// The document is not valid JSON or not an array of the expected records.
    #[error("Cannot read {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The document could not be serialized.
    #[error("Cannot serialize {}: {source}", path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Any other IO failure.
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl DocumentError {
    /// Path of the document involved
    pub fn path(&self) -> &Path {
        match self {
            DocumentError::ResourceNotFound(path) => path,
            DocumentError::Parse { path, .. }
            | DocumentError::Serialize { path, .. }
            | DocumentError::Io { path, .. } => path,
        }
    }

    /// Whether the document is absent or unreadable as JSON
    pub fn is_missing_or_corrupt(&self) -> bool {
        matches!(
            self,
            DocumentError::ResourceNotFound(_) | DocumentError::Parse { .. }
        )
    }

    fn io(path: &Path, source: io::Error) -> Self {
        DocumentError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Read a JSON array of records
pub fn read_array<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, DocumentError> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(DocumentError::ResourceNotFound(path.to_path_buf()))
        }
        Err(e) => return Err(DocumentError::io(path, e)),
    };

    let content = bytes.strip_prefix(UTF8_BOM).unwrap_or(&bytes);
    let records: Vec<T> = serde_json::from_slice(content).map_err(|source| DocumentError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), records = records.len(), "document loaded");
    Ok(records)
}

/// Replace a document with the pretty-printed JSON of `value`
///
/// Output uses four-space indentation and keeps non-ASCII text as is.
pub fn write_pretty<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), DocumentError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| DocumentError::io(path, e))?;
    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
        value
            .serialize(&mut serializer)
            .map_err(|source| DocumentError::Serialize {
                path: path.to_path_buf(),
                source,
            })?;
        writer.flush().map_err(|e| DocumentError::io(path, e))?;
    }
    // The temporary file is owner-only; keep the permissions of the file it replaces.
    match fs::metadata(path) {
        Ok(existing) => tmp
            .as_file()
            .set_permissions(existing.permissions())
            .map_err(|e| DocumentError::io(path, e))?,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(DocumentError::io(path, e)),
    }
    tmp.as_file()
        .sync_all()
        .map_err(|e| DocumentError::io(path, e))?;
    tmp.persist(path)
        .map_err(|e| DocumentError::io(path, e.error))?;

    tracing::debug!(path = %path.display(), "document written");
    Ok(())
}
