use super::backend::StorageBackend;
use crate::error::Result;
use std::path::PathBuf;

/// Persists the last issued quote id as plain text.
///
/// The stored value is only ever read and overwritten here; keeping it
/// monotonic is the caller's job (see `RecordStore::save`).
#[derive(Debug, Clone)]
pub struct IdAllocator {
    path: PathBuf,
}

impl IdAllocator {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Make sure the state file exists without touching an existing value.
    pub fn init<B: StorageBackend>(&self, backend: &B) -> Result<()> {
        if backend.create_file(&self.path)? {
            tracing::debug!(path = %backend.location(&self.path).display(), "created id state file");
        }
        Ok(())
    }

    /// The last issued id. Missing, empty or garbled state reads as 0.
    pub fn current_last<B: StorageBackend>(&self, backend: &B) -> Result<u64> {
        let Some(raw) = backend.read_text(&self.path)? else {
            return Ok(0);
        };

        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(0);
        }

        match raw.parse::<u64>() {
            Ok(id) => Ok(id),
            Err(_) => {
                tracing::warn!(value = raw, "unparseable id state, treating as 0");
                Ok(0)
            }
        }
    }

    /// Overwrite the stored value with `id`.
    pub fn advance_to<B: StorageBackend>(&self, backend: &B, id: u64) -> Result<()> {
        backend.write_text(&self.path, &id.to_string())
    }
}
