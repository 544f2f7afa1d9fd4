use super::backend::StorageBackend;
use super::listing::Listing;
use super::record_store::RecordStore;
use crate::error::Result;
use std::path::PathBuf;

/// Writes every stored quote into the single build artifact.
pub struct Exporter<'a, B: StorageBackend> {
    store: &'a RecordStore<B>,
}

impl<'a, B: StorageBackend> Exporter<'a, B> {
    pub fn new(store: &'a RecordStore<B>) -> Self {
        Self { store }
    }

    /// Regenerate the artifact from scratch and return where it was written.
    pub fn build(&self) -> Result<PathBuf> {
        let page = Listing::new(self.store).find_all()?;
        let text = serde_json::to_string_pretty(page.quotes())?;

        let path = &self.store.config().build_path;
        self.store.backend().write_text(path, &text)?;

        let location = self.store.backend().location(path);
        tracing::debug!(
            path = %location.display(),
            quotes = page.total_count(),
            "wrote build artifact"
        );
        Ok(location)
    }
}
