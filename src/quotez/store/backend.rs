use crate::error::Result;
use std::path::{Path, PathBuf};

/// Abstract interface for raw storage I/O.
///
/// This trait handles the "how" of storage (filesystem vs memory), while
/// `RecordStore` handles the "what" (ids, records, listing). All paths are
/// relative to the backend root.
pub trait StorageBackend {
    /// Whether anything (file or directory) exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and its parents. Existing directories are fine.
    fn create_dir(&self, path: &Path) -> Result<()>;

    /// Create an empty file if nothing is there yet.
    /// Returns false (and leaves the file untouched) when it already exists.
    fn create_file(&self, path: &Path) -> Result<bool>;

    /// Files directly inside `dir`, as paths relative to the root.
    /// A missing directory yields an empty list.
    fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>>;

    /// Read a file as text.
    /// Returns Ok(None) if the file does not exist.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read_text(&self, path: &Path) -> Result<Option<String>>;

    /// Replace the contents of a file, creating parent directories as needed.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn write_text(&self, path: &Path, text: &str) -> Result<()>;

    /// Delete a file. Returns whether something was actually removed.
    fn delete_file(&self, path: &Path) -> Result<bool>;

    /// The user-facing location of `path`.
    /// For FsBackend this is the real path, for MemBackend a virtual one.
    fn location(&self, path: &Path) -> PathBuf;
}
