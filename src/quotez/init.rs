use crate::api::QuotezApi;
use crate::config::StoreConfig;
use crate::error::{QuotezError, Result};
use crate::store::{FsBackend, RecordStore};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the data home.
pub const HOME_ENV: &str = "QUOTEZ_HOME";

/// Directory under the data home that holds the quote files.
const STORE_DIR: &str = "quotes";

pub struct QuotezContext {
    pub api: QuotezApi<FsBackend>,
}

/// Pick the data home: an explicit path wins, then the platform data dir.
pub fn resolve_home(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    ProjectDirs::from("com", "quotez", "quotez")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| QuotezError::Config("Could not determine data directory".into()))
}

/// Open the store under `home` and wire the API on top of it.
pub fn initialize(home: &Path) -> Result<QuotezContext> {
    let base_dir = home.join(STORE_DIR);
    let config = StoreConfig::load(&base_dir)?;

    tracing::debug!(base_dir = %base_dir.display(), "opening quote store");
    let store = RecordStore::open(FsBackend::new(&base_dir), config)?;

    Ok(QuotezContext {
        api: QuotezApi::new(store),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn explicit_home_wins() {
        let home = resolve_home(Some(Path::new("/tmp/somewhere"))).unwrap();
        assert_eq!(home, PathBuf::from("/tmp/somewhere"));
    }

    #[test]
    fn initialize_creates_store_layout() {
        let temp = TempDir::new().unwrap();
        let ctx = initialize(temp.path()).unwrap();

        assert!(temp.path().join("quotes").is_dir());
        assert!(temp.path().join("quotes/lastId.txt").is_file());
        assert_eq!(ctx.api.store().config().base_dir, temp.path().join("quotes"));
    }

    #[test]
    fn initialize_reads_store_config() {
        let temp = TempDir::new().unwrap();
        let base = temp.path().join("quotes");
        std::fs::create_dir_all(&base).unwrap();
        std::fs::write(base.join("config.json"), r#"{"page_size": 3}"#).unwrap();

        let ctx = initialize(temp.path()).unwrap();
        assert_eq!(ctx.api.store().config().page_size, 3);
    }
}
