use super::allocator::IdAllocator;
use super::backend::StorageBackend;
use crate::config::StoreConfig;
use crate::error::{QuotezError, Result};
use crate::model::Quote;
use parking_lot::Mutex;
use std::path::{Path, PathBuf};

/// One-file-per-quote store on top of a [`StorageBackend`].
///
/// The backend root is the store's base directory. A quote with id `N` lives
/// at `N<file_ext>` and nowhere else.
pub struct RecordStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
    config: StoreConfig,
    allocator: IdAllocator,
    /// Serializes the read-increment-write of the allocator in `save`.
    save_lock: Mutex<()>,
}

impl<B: StorageBackend> RecordStore<B> {
    /// Open a store, creating the base directory and the id state file if
    /// they are missing. Existing id state is left alone.
    pub fn open(backend: B, config: StoreConfig) -> Result<Self> {
        config.validate()?;
        let allocator = IdAllocator::new(config.last_id_file.clone());

        let store = Self {
            backend,
            config,
            allocator,
            save_lock: Mutex::new(()),
        };

        store.backend.create_dir(Path::new(""))?;
        store.allocator.init(&store.backend)?;
        Ok(store)
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Storage path of a quote, relative to the base directory.
    pub fn record_path(&self, id: u64) -> PathBuf {
        PathBuf::from(format!("{}{}", id, self.config.file_ext))
    }

    /// Last id handed out by the allocator.
    pub fn last_id(&self) -> Result<u64> {
        self.allocator.current_last(&self.backend)
    }

    /// Persist a quote.
    ///
    /// New quotes get `last_id + 1`; the allocator only moves after the record
    /// file has been written. Quotes that already have an id overwrite their file.
    pub fn save(&self, mut quote: Quote) -> Result<Quote> {
        let _guard = self.save_lock.lock();

        let is_new = quote.is_new();
        if is_new {
            let last = self.allocator.current_last(&self.backend)?;
            quote.id = last.checked_add(1).ok_or_else(|| {
                QuotezError::Config(format!("quote ids exhausted (last id is {})", last))
            })?;
        }

        let text = serde_json::to_string_pretty(&quote)?;
        self.backend.write_text(&self.record_path(quote.id), &text)?;

        if is_new {
            self.allocator.advance_to(&self.backend, quote.id)?;
        }

        tracing::debug!(id = quote.id, new = is_new, "saved quote");
        Ok(quote)
    }

    /// Load a quote. Missing or unreadable JSON is `None`, not an error, and so
    /// is a file whose stored id disagrees with its name.
    pub fn find_by_id(&self, id: u64) -> Result<Option<Quote>> {
        let path = self.record_path(id);
        let Some(text) = self.backend.read_text(&path)? else {
            return Ok(None);
        };

        match serde_json::from_str::<Quote>(&text) {
            Ok(quote) if quote.id == id => Ok(Some(quote)),
            Ok(quote) => {
                tracing::warn!(
                    path = %self.backend.location(&path).display(),
                    stored_id = quote.id,
                    "ignoring quote file with mismatched id"
                );
                Ok(None)
            }
            Err(e) => {
                tracing::warn!(
                    path = %self.backend.location(&path).display(),
                    error = %e,
                    "ignoring unparseable quote file"
                );
                Ok(None)
            }
        }
    }

    /// Remove a quote's file. Returns whether there was one.
    pub fn delete_by_id(&self, id: u64) -> Result<bool> {
        let removed = self.backend.delete_file(&self.record_path(id))?;
        tracing::debug!(id, removed, "delete quote");
        Ok(removed)
    }

    /// Number of stored quote files.
    pub fn count(&self) -> Result<usize> {
        Ok(self.record_paths()?.len())
    }

    /// Create `count` placeholder quotes through the regular save path.
    pub fn make_sample_data(&self, count: usize) -> Result<Vec<Quote>> {
        (1..=count)
            .map(|i| self.save(Quote::new(format!("Quote {}", i), format!("Author {}", i))))
            .collect()
    }

    /// Every `<id><file_ext>` file directly in the base directory, with its id.
    /// Only names `record_path` would produce count, so `01.json` is skipped
    /// along with config, temp files and subdirectories.
    pub(crate) fn record_paths(&self) -> Result<Vec<(u64, PathBuf)>> {
        let ext = self.config.file_ext.as_str();
        let mut found = Vec::new();

        for path in self.backend.list_files(Path::new(""))? {
            let Some(name) = path.file_name().and_then(|s| s.to_str()) else {
                continue;
            };
            let Some(stem) = name.strip_suffix(ext) else {
                continue;
            };
            if stem.is_empty() || !stem.bytes().all(|b| b.is_ascii_digit()) {
                tracing::debug!(file = name, "skipping non-record file");
                continue;
            }
            match stem.parse::<u64>() {
                Ok(id) if id > 0 && self.record_path(id) == Path::new(name) => {
                    found.push((id, path))
                }
                _ => tracing::debug!(file = name, "skipping non-record file"),
            }
        }

        Ok(found)
    }

    /// Read and decode one record file. Decoding failures are hard errors here.
    pub(crate) fn read_record(&self, path: &Path) -> Result<Option<Quote>> {
        let Some(text) = self.backend.read_text(path)? else {
            return Ok(None);
        };
        serde_json::from_str(&text)
            .map(Some)
            .map_err(|source| QuotezError::CorruptRecord {
                path: self.backend.location(path),
                source,
            })
    }
}
