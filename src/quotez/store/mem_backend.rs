use super::backend::StorageBackend;
use crate::error::{QuotezError, Result};
use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since quotez is single-threaded.
#[derive(Default)]
pub struct MemBackend {
    files: RefCell<BTreeMap<PathBuf, String>>,
    dirs: RefCell<BTreeSet<PathBuf>>,
    simulate_write_error: Cell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    fn check_write(&self, path: &Path) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(QuotezError::storage(
                "write",
                self.location(path),
                io::Error::other("simulated write error"),
            ));
        }
        Ok(())
    }

    fn add_parents(&self, path: &Path) {
        let mut dirs = self.dirs.borrow_mut();
        for ancestor in path.ancestors().skip(1) {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            dirs.insert(ancestor.to_path_buf());
        }
    }
}

impl StorageBackend for MemBackend {
    fn exists(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path) || self.dirs.borrow().contains(path)
    }

    fn create_dir(&self, path: &Path) -> Result<()> {
        self.check_write(path)?;
        self.add_parents(path);
        self.dirs.borrow_mut().insert(path.to_path_buf());
        Ok(())
    }

    fn create_file(&self, path: &Path) -> Result<bool> {
        if self.files.borrow().contains_key(path) {
            return Ok(false);
        }
        self.check_write(path)?;
        self.add_parents(path);
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), String::new());
        Ok(true)
    }

    fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        Ok(self
            .files
            .borrow()
            .keys()
            .filter(|p| p.parent() == Some(dir))
            .cloned()
            .collect())
    }

    fn read_text(&self, path: &Path) -> Result<Option<String>> {
        Ok(self.files.borrow().get(path).cloned())
    }

    fn write_text(&self, path: &Path, text: &str) -> Result<()> {
        self.check_write(path)?;
        self.add_parents(path);
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), text.to_string());
        Ok(())
    }

    fn delete_file(&self, path: &Path) -> Result<bool> {
        Ok(self.files.borrow_mut().remove(path).is_some())
    }

    fn location(&self, path: &Path) -> PathBuf {
        PathBuf::from("memory://").join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_file_keeps_existing_content() {
        let backend = MemBackend::new();
        backend.write_text(Path::new("lastId.txt"), "4").unwrap();

        assert!(!backend.create_file(Path::new("lastId.txt")).unwrap());
        assert_eq!(
            backend.read_text(Path::new("lastId.txt")).unwrap(),
            Some("4".to_string())
        );
    }

    #[test]
    fn list_files_only_returns_direct_children() {
        let backend = MemBackend::new();
        backend.write_text(Path::new("1.json"), "{}").unwrap();
        backend.write_text(Path::new("build/data.json"), "[]").unwrap();

        let files = backend.list_files(Path::new("")).unwrap();
        assert_eq!(files, vec![PathBuf::from("1.json")]);
        assert!(backend.exists(Path::new("build")));
    }

    #[test]
    fn simulated_write_error_surfaces_as_storage_error() {
        let backend = MemBackend::new();
        backend.set_simulate_write_error(true);

        let err = backend.write_text(Path::new("1.json"), "{}").unwrap_err();
        assert!(matches!(err, QuotezError::Storage { op: "write", .. }));
        assert_eq!(backend.read_text(Path::new("1.json")).unwrap(), None);
    }
}
