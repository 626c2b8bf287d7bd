use crate::domain::ThemeParam;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failures surfaced by the stores
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid color value for {param}: {value}")]
    InvalidColor { param: ThemeParam, value: String },

    #[error("Name must not be empty")]
    EmptyName,

    #[error("'{0}' is reserved and cannot be used as a theme name")]
    ReservedName(String),

    #[error("Invalid id: {0:?}")]
    InvalidId(String),

    #[error("Project not found: {0}")]
    ProjectNotFound(String),

    #[error("Task not found: {0}")]
    TaskNotFound(String),
}

impl StoreError {
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn json(path: impl AsRef<Path>, source: serde_json::Error) -> Self {
        StoreError::Json {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
