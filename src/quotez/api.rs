//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every UI (the CLI subcommands and the interactive shell).
//!
//! It dispatches to `commands/*.rs` and returns `Result<CmdResult>`. It does no
//! business logic and no terminal I/O.
//!
//! `QuotezApi<B: StorageBackend>` is generic over the storage backend:
//! - Production: `QuotezApi<FsBackend>`
//! - Testing: `QuotezApi<MemBackend>`

use crate::commands;
use crate::error::Result;
use crate::model::Page;
use crate::store::{Listing, RecordStore, StorageBackend};

pub struct QuotezApi<B: StorageBackend> {
    store: RecordStore<B>,
}

impl<B: StorageBackend> QuotezApi<B> {
    pub fn new(store: RecordStore<B>) -> Self {
        Self { store }
    }

    pub fn add_quote(&self, content: String, author: String) -> Result<commands::CmdResult> {
        commands::add::run(&self.store, content, author)
    }

    pub fn list_quotes(&self, page: Option<usize>) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, page)
    }

    pub fn view_quote(&self, id: u64) -> Result<commands::CmdResult> {
        commands::view::run(&self.store, id)
    }

    pub fn modify_quote(
        &self,
        id: u64,
        update: commands::QuoteUpdate,
    ) -> Result<commands::CmdResult> {
        commands::modify::run(&self.store, id, update)
    }

    pub fn delete_quote(&self, id: u64) -> Result<commands::CmdResult> {
        commands::delete::run(&self.store, id)
    }

    pub fn build(&self) -> Result<commands::CmdResult> {
        commands::build::run(&self.store)
    }

    pub fn make_sample_data(&self, count: usize) -> Result<commands::CmdResult> {
        commands::sample::run(&self.store, count)
    }

    /// The whole listing, unpaged.
    pub fn find_all(&self) -> Result<Page> {
        Listing::new(&self.store).find_all()
    }

    pub fn store(&self) -> &RecordStore<B> {
        &self.store
    }
}

pub use commands::{CmdMessage, CmdResult, ListedPage, MessageLevel, QuoteUpdate};
