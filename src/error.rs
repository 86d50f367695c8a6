//! Error type shared by the mapping and the store.

use std::path::PathBuf;

use thiserror::Error;

/// Message used when a full clear is requested without `force`.
pub const FORCE_REQUIRED_MSG: &str = "options.force is required to delete the entire cache.";

#[derive(Error, Debug)]
pub enum StoreError {
    /// The manifest exists but could not be read or parsed.
    #[error("failed to read {path}: {reason}")]
    Read { path: PathBuf, reason: String },

    /// The manifest could not be written (or removed).
    #[error("failed to write {path}: {reason}")]
    Write { path: PathBuf, reason: String },

    #[error("{0}")]
    InvalidOperation(String),
}

impl StoreError {
    pub(crate) fn read(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        StoreError::Read {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        StoreError::Write {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T, E = StoreError> = std::result::Result<T, E>;
