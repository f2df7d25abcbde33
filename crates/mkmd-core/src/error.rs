//! Error types for mkmd

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MkmdError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("Found {count} files matching the provided pattern '{pattern}'")]
    AmbiguousTarget { pattern: String, count: usize },

    #[error("An entry with this name already exists: {}", .0.display())]
    NameCollision(PathBuf),

    #[error("No '# ' heading line found in {}", .0.display())]
    MissingHeading(PathBuf),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<glob::PatternError> for MkmdError {
    fn from(err: glob::PatternError) -> Self {
        MkmdError::InvalidArguments(format!("invalid file name pattern: {}", err))
    }
}

impl From<serde_json::Error> for MkmdError {
    fn from(err: serde_json::Error) -> Self {
        MkmdError::Config(err.to_string())
    }
}

impl From<serde_yaml::Error> for MkmdError {
    fn from(err: serde_yaml::Error) -> Self {
        MkmdError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MkmdError>;
