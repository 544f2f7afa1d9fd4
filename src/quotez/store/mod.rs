//! # Storage Layer
//!
//! Quotes are stored one JSON file per quote. A plain text file holds the last
//! issued id, and a consolidated build artifact can be regenerated on demand.
//!
//! ## Components
//!
//! - [`record_store::RecordStore`]: save / find / delete / count by id
//! - [`allocator::IdAllocator`]: persisted last-id counter
//! - [`listing::Listing`]: enumerates every record into a [`Page`](crate::model::Page)
//! - [`exporter::Exporter`]: writes all records into one JSON array
//!
//! ## Backends
//!
//! The components above never touch `std::fs` directly. They talk to a
//! [`backend::StorageBackend`]:
//!
//! - [`fs_backend::FsBackend`]: production filesystem backend, atomic writes
//! - [`mem_backend::MemBackend`]: in-memory backend for testing
//!
//! ## Write Ordering
//!
//! Saving a new quote writes the record file first and advances the id
//! counter second. A crash in between leaves the counter behind, so the next
//! new quote reuses that id; the counter never runs ahead of the files.
//!
//! ## Storage Layout
//!
//! ```text
//! <home>/quotes/
//! ├── lastId.txt          # Last issued id
//! ├── config.json         # Optional store configuration
//! ├── {id}.json           # One file per quote
//! └── build/data.json     # Build artifact
//! ```

pub mod allocator;
pub mod backend;
pub mod exporter;
pub mod fs_backend;
pub mod listing;
pub mod mem_backend;
pub mod record_store;

pub use allocator::IdAllocator;
pub use backend::StorageBackend;
pub use exporter::Exporter;
pub use fs_backend::FsBackend;
pub use listing::Listing;
pub use mem_backend::MemBackend;
pub use record_store::RecordStore;
