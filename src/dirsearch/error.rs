use crate::index::DisplayIndex;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DirError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Could not read data file {path}: {source}")]
    DataFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid index: {0}")]
    InvalidIndex(String),

    #[error("No result at index {index} ({available} shown)")]
    IndexOutOfRange {
        index: DisplayIndex,
        available: usize,
    },

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, DirError>;
