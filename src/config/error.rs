use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("failed to open config file '{path}': {source}")]
    FileOpen {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to decode config file '{path}': {source}")]
    Decode {
        path: PathBuf,
        source: DecodeError,
    },
}

impl ConfigError {
    /// Returns `true` if the file could not be opened.
    pub fn is_file_open(&self) -> bool {
        matches!(self, Self::FileOpen { .. })
    }

    /// Returns `true` if the file was opened but its contents could not be decoded.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }
}

/// The underlying cause of a [`ConfigError::Decode`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DecodeError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    #[error("failed to read contents: {0}")]
    Read(#[from] std::io::Error),
}
