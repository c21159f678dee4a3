use std::collections::HashMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::model::Todo;

/// The single key under which the whole collection snapshot is stored.
pub const STORAGE_KEY: &str = "todos";

/// Error type for snapshot storage operations
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: io::Error,
    },
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: io::Error,
    },
    #[error("could not encode snapshot: {0}")]
    Encode(#[from] serde_json::Error),
}

/// A persistent key-value store for collection snapshots.
///
/// `get` returns `None` for an absent key; `set` replaces the value for a
/// key wholesale. Both may fail, and a failing call fails synchronously.
pub trait SnapshotBackend {
    fn get(&self, key: &str) -> Result<Option<String>, SnapshotError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), SnapshotError>;
}

/// Serialize a collection into its snapshot form (a JSON array).
pub fn encode_snapshot(todos: &[Todo]) -> Result<String, SnapshotError> {
    Ok(serde_json::to_string(todos)?)
}

/// Parse a snapshot back into a collection.
///
/// Returns `None` for malformed or non-array content — callers treat that
/// identically to an absent snapshot.
pub fn decode_snapshot(raw: &str) -> Option<Vec<Todo>> {
    serde_json::from_str(raw).ok()
}

/// Default data directory for the snapshot file (`<platform data dir>/tick`).
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tick")
}

// ---------------------------------------------------------------------------
// File-backed store
// ---------------------------------------------------------------------------

/// Snapshot store backed by one JSON file per key inside a data directory.
#[derive(Debug)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    /// Open a file backend rooted at `dir`, creating the directory if needed.
    pub fn open(dir: &Path) -> Result<Self, SnapshotError> {
        fs::create_dir_all(dir).map_err(|e| SnapshotError::Write {
            path: dir.to_path_buf(),
            source: e,
        })?;
        Ok(FileBackend {
            dir: dir.to_path_buf(),
        })
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl SnapshotBackend for FileBackend {
    fn get(&self, key: &str) -> Result<Option<String>, SnapshotError> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| SnapshotError::Read { path, source: e })
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SnapshotError> {
        let path = self.key_path(key);
        atomic_write(&path, value.as_bytes()).map_err(|e| SnapshotError::Write {
            path,
            source: e,
        })
    }
}

/// Write a file atomically: write to a temp file in the same directory,
/// then rename over the target.
fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// In-memory store
// ---------------------------------------------------------------------------

/// Snapshot store held entirely in memory. Never fails; useful for tests
/// and for running without touching the disk.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    values: HashMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        MemoryBackend::default()
    }
}

impl SnapshotBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>, SnapshotError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SnapshotError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
