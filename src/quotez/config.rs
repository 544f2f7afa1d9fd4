use crate::error::{QuotezError, Result};
use crate::model::DEFAULT_PAGE_SIZE;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_FILE_EXT: &str = ".json";
const DEFAULT_LAST_ID_FILE: &str = "lastId.txt";
const DEFAULT_BUILD_PATH: &str = "build/data.json";

/// Store configuration. Injected into the record store, listing and exporter.
///
/// `config.json` inside the base directory may override `file_ext` and
/// `page_size`. The remaining paths are fixed.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct StoreConfig {
    #[serde(skip)]
    pub base_dir: PathBuf,

    /// Extension of record files (e.g. ".json")
    #[serde(default = "default_file_ext")]
    pub file_ext: String,

    /// Number of quotes per listing page
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Allocator state file, relative to `base_dir`
    #[serde(skip, default = "default_last_id_file")]
    pub last_id_file: PathBuf,

    /// Build artifact location, relative to `base_dir`
    #[serde(skip, default = "default_build_path")]
    pub build_path: PathBuf,
}

fn default_file_ext() -> String {
    DEFAULT_FILE_EXT.to_string()
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_last_id_file() -> PathBuf {
    PathBuf::from(DEFAULT_LAST_ID_FILE)
}

fn default_build_path() -> PathBuf {
    PathBuf::from(DEFAULT_BUILD_PATH)
}

impl StoreConfig {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            file_ext: default_file_ext(),
            page_size: default_page_size(),
            last_id_file: default_last_id_file(),
            build_path: default_build_path(),
        }
    }

    /// Load overrides from `<base_dir>/config.json`, or defaults if the file is absent.
    pub fn load<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref();
        let config_path = base_dir.join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::new(base_dir));
        }

        let content = fs::read_to_string(&config_path)
            .map_err(|e| QuotezError::storage("read", &config_path, e))?;
        let mut config: StoreConfig = serde_json::from_str(&content)
            .map_err(|e| QuotezError::Config(format!("{}: {}", config_path.display(), e)))?;
        config.base_dir = base_dir.to_path_buf();
        let ext = config.file_ext.clone();
        config.set_file_ext(&ext);
        config.validate()?;
        Ok(config)
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_file_ext(mut self, ext: &str) -> Self {
        self.set_file_ext(ext);
        self
    }

    /// Set the record extension (normalizes to start with a dot)
    pub fn set_file_ext(&mut self, ext: &str) {
        if ext.starts_with('.') {
            self.file_ext = ext.to_string();
        } else {
            self.file_ext = format!(".{}", ext);
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(QuotezError::Config("page_size must be at least 1".into()));
        }
        if self.file_ext.len() < 2 {
            return Err(QuotezError::Config("file_ext must not be empty".into()));
        }
        Ok(())
    }
}
