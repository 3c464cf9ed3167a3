//! Manifest error types.

use std::path::PathBuf;
use thiserror::Error;

/// Manifest-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Manifest parsing error")]
    Toml(#[from] toml::de::Error),

    /// A `[[url]]` entry that cannot be turned into a sitemap entry.
    #[error("url[{index}] `{loc}`: {message}")]
    Entry {
        index: usize,
        loc: String,
        message: String,
    },
}

impl ConfigError {
    pub fn entry(index: usize, loc: &str, message: impl ToString) -> Self {
        Self::Entry {
            index,
            loc: loc.to_string(),
            message: message.to_string(),
        }
    }
}
