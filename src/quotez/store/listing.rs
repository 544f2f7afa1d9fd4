use super::backend::StorageBackend;
use super::record_store::RecordStore;
use crate::error::Result;
use crate::model::Page;

/// Reconstructs the full set of quotes from the store's directory.
pub struct Listing<'a, B: StorageBackend> {
    store: &'a RecordStore<B>,
}

impl<'a, B: StorageBackend> Listing<'a, B> {
    pub fn new(store: &'a RecordStore<B>) -> Self {
        Self { store }
    }

    /// All stored quotes, sorted by id.
    ///
    /// A record file that cannot be decoded aborts the listing with
    /// `CorruptRecord`. A file that vanishes between enumeration and read is
    /// skipped.
    pub fn find_all(&self) -> Result<Page> {
        let mut quotes = Vec::new();

        for (_, path) in self.store.record_paths()? {
            if let Some(quote) = self.store.read_record(&path)? {
                quotes.push(quote);
            }
        }

        quotes.sort_by_key(|q| q.id);
        Ok(Page::new(quotes, self.store.config().page_size))
    }
}
