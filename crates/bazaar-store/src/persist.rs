//! # Snapshot Persistence Backends
//!
//! The injectable key-value seam the store saves snapshots through.
//!
//! ## Backend Contract
//! - `load` returns `Ok(None)` for a slot that was never written; errors are
//!   reserved for slots that exist but cannot be read
//! - `save` replaces the slot atomically from the caller's point of view
//! - Both calls are synchronous: the store persists inside the same state
//!   transition as the mutation itself
//!
//! Two implementations ship here: an in-memory map (tests, ephemeral runs)
//! and a one-file-per-key directory layout on disk.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use tracing::debug;

use crate::error::SnapshotResult;

// =============================================================================
// Backend Port
// =============================================================================

/// Durable key-value slot storage for serialized snapshots.
pub trait SnapshotBackend: Send + Sync {
    /// Reads the slot, `None` if it was never written.
    fn load(&self, key: &str) -> SnapshotResult<Option<String>>;

    /// Writes the slot, replacing any previous value.
    fn save(&self, key: &str, value: &str) -> SnapshotResult<()>;
}

/// Shared backends work wherever a backend does (e.g. two store instances
/// over one slot in tests).
impl<B: SnapshotBackend + ?Sized> SnapshotBackend for Arc<B> {
    fn load(&self, key: &str) -> SnapshotResult<Option<String>> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> SnapshotResult<()> {
        (**self).save(key, value)
    }
}

// =============================================================================
// In-Memory Backend
// =============================================================================

/// Backend over a plain in-memory map. Nothing survives the process; used
/// as the test double and for ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    /// Creates an empty in-memory backend.
    pub fn new() -> Self {
        MemoryBackend::default()
    }
}

impl SnapshotBackend for MemoryBackend {
    fn load(&self, key: &str) -> SnapshotResult<Option<String>> {
        let slots = self.slots.lock().expect("memory backend mutex poisoned");
        Ok(slots.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> SnapshotResult<()> {
        let mut slots = self.slots.lock().expect("memory backend mutex poisoned");
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// =============================================================================
// File Backend
// =============================================================================

/// Backend storing one `<key>.json` file per slot under a directory.
///
/// The directory is created on first save; a missing file on load is an
/// absent slot, not an error.
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    /// Creates a backend rooted at `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileBackend { dir: dir.into() }
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl SnapshotBackend for FileBackend {
    fn load(&self, key: &str) -> SnapshotResult<Option<String>> {
        let path = self.slot_path(key);
        match fs::read_to_string(&path) {
            Ok(value) => {
                debug!(?path, "loaded snapshot slot");
                Ok(Some(value))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, key: &str, value: &str) -> SnapshotResult<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.slot_path(key);
        fs::write(&path, value)?;
        debug!(?path, bytes = value.len(), "saved snapshot slot");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_backend_round_trip() {
        let backend = MemoryBackend::new();

        assert!(backend.load("slot").unwrap().is_none());

        backend.save("slot", "{\"a\":1}").unwrap();
        assert_eq!(backend.load("slot").unwrap().unwrap(), "{\"a\":1}");

        backend.save("slot", "{\"a\":2}").unwrap();
        assert_eq!(backend.load("slot").unwrap().unwrap(), "{\"a\":2}");
    }

    #[test]
    fn test_memory_backend_keys_are_independent() {
        let backend = MemoryBackend::new();
        backend.save("a", "1").unwrap();
        backend.save("b", "2").unwrap();

        assert_eq!(backend.load("a").unwrap().unwrap(), "1");
        assert_eq!(backend.load("b").unwrap().unwrap(), "2");
    }

    #[test]
    fn test_file_backend_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path().join("snapshots"));

        // Directory does not exist yet; load is an absent slot, not an error
        assert!(backend.load("store").unwrap().is_none());

        backend.save("store", "{\"cart\":[]}").unwrap();
        assert_eq!(backend.load("store").unwrap().unwrap(), "{\"cart\":[]}");
    }

    #[test]
    fn test_file_backend_shared_through_arc() {
        let dir = tempfile::tempdir().unwrap();
        let backend = Arc::new(FileBackend::new(dir.path()));
        let clone = Arc::clone(&backend);

        backend.save("store", "x").unwrap();
        assert_eq!(clone.load("store").unwrap().unwrap(), "x");
    }
}
