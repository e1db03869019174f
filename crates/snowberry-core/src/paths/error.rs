//! Path-related error types.
//!
//! Missing search directories are never reported here: an absent or
//! unreadable directory is an expected condition and only shows up as a
//! [`DirListing::Unavailable`](super::DirListing) value.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during path resolution and directory operations.
#[derive(Debug, Error)]
pub enum PathError {
    /// Could not determine the user's home directory.
    #[error("Cannot determine home directory")]
    NoHomeDir,

    /// A path was expected to be a directory but was not.
    #[error("{0} exists but is not a directory")]
    NotADirectory(PathBuf),

    /// A directory does not exist and creation was not allowed.
    #[error("Directory {0} does not exist")]
    DirectoryNotFound(PathBuf),

    /// Failed to create a directory.
    #[error("Failed to create directory {path}: {reason}")]
    CreateFailed { path: PathBuf, reason: String },

    /// A user path was requested before the home directory was resolved.
    #[error("Snowberry home directory has not been resolved yet")]
    HomeNotResolved,

    /// A category name did not match any known kind of data.
    #[error("Unknown data category: {0}")]
    UnknownCategory(String),

    /// An empty path was provided.
    #[error("Path cannot be empty")]
    EmptyPath,

    /// Failed to get the current working directory.
    #[error("Cannot determine current directory: {0}")]
    CurrentDirError(String),
}
