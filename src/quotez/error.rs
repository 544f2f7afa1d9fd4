use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuotezError {
    #[error("Corrupt record at {}: {source}", .path.display())]
    CorruptRecord {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Storage error ({op} {}): {source}", .path.display())]
    Storage {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid command: {0}")]
    Command(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl QuotezError {
    /// Wraps an I/O failure with the operation and location it happened at.
    pub fn storage(op: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        QuotezError::Storage {
            op,
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, QuotezError>;
