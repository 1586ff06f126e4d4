//! Object key derivation for the split, autotag and merge stages.
//!
//! Every stage receives a key string from the job runner and hands back the
//! key(s) it should read from or write to. All functions are pure. Parsing
//! rejects keys that lack their stage's literal prefix instead of slicing
//! blindly; constructing a key never fails.

pub mod types;
pub mod splitter;
pub mod autotag;
pub mod merger;

#[cfg(test)]
pub(crate) mod testgen;

pub use types::*;
pub use splitter::*;
pub use autotag::*;
pub use merger::*;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("Invalid key format: '{key}' does not start with '{expected_prefix}'")]
    InvalidKeyFormat { key: String, expected_prefix: String },

    #[error("Key has no file name after the base name: {0}")]
    MissingFileKey(String),

    #[error("Key has an empty file name: {0}")]
    EmptyBasename(String),

    #[error("No chunk keys to merge")]
    NoChunks,

    #[error("Not a chunk key: {0}")]
    InvalidChunkKey(String),
}

/// Strip a required literal prefix, or report which one was missing.
pub(crate) fn strip_required<'a>(key: &'a str, prefix: &str) -> Result<&'a str, PathError> {
    key.strip_prefix(prefix)
        .ok_or_else(|| PathError::InvalidKeyFormat {
            key: key.to_string(),
            expected_prefix: prefix.to_string(),
        })
}
