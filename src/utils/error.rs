use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FsBrowseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Path not found: {}", path.display())]
    PathNotFound { path: PathBuf },

    #[error("Not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, FsBrowseError>;
