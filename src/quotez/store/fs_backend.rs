use super::backend::StorageBackend;
use crate::error::{QuotezError, Result};
use std::fs::{self, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Filesystem backend rooted at a single directory.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn ensure_parent(&self, full: &Path) -> Result<()> {
        if let Some(parent) = full.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)
                    .map_err(|e| QuotezError::storage("create dir", parent, e))?;
            }
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn exists(&self, path: &Path) -> bool {
        self.root.join(path).exists()
    }

    fn create_dir(&self, path: &Path) -> Result<()> {
        let full = self.root.join(path);
        fs::create_dir_all(&full).map_err(|e| QuotezError::storage("create dir", full, e))
    }

    fn create_file(&self, path: &Path) -> Result<bool> {
        let full = self.root.join(path);
        self.ensure_parent(&full)?;

        match OpenOptions::new().write(true).create_new(true).open(&full) {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(false),
            Err(e) => Err(QuotezError::storage("create", full, e)),
        }
    }

    fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let full = self.root.join(dir);
        let entries = match fs::read_dir(&full) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(QuotezError::storage("list", full, e)),
        };

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| QuotezError::storage("list", &full, e))?;
            let file_type = entry
                .file_type()
                .map_err(|e| QuotezError::storage("stat", entry.path(), e))?;
            if file_type.is_file() {
                files.push(dir.join(entry.file_name()));
            }
        }
        Ok(files)
    }

    fn read_text(&self, path: &Path) -> Result<Option<String>> {
        let full = self.root.join(path);
        match fs::read_to_string(&full) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(QuotezError::storage("read", full, e)),
        }
    }

    fn write_text(&self, path: &Path, text: &str) -> Result<()> {
        let full = self.root.join(path);
        self.ensure_parent(&full)?;

        let dir = full.parent().unwrap_or(&self.root);
        let name = full
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("file");

        // Atomic Write
        let tmp_path = dir.join(format!(".{}-{}.tmp", name, Uuid::new_v4()));
        fs::write(&tmp_path, text).map_err(|e| QuotezError::storage("write", &tmp_path, e))?;
        if let Err(e) = fs::rename(&tmp_path, &full) {
            let _ = fs::remove_file(&tmp_path);
            return Err(QuotezError::storage("rename", full, e));
        }

        Ok(())
    }

    fn delete_file(&self, path: &Path) -> Result<bool> {
        let full = self.root.join(path);
        match fs::remove_file(&full) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(QuotezError::storage("delete", full, e)),
        }
    }

    fn location(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}
