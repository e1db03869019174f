//! Directory creation utilities.
//!
//! The `DirectoryCreationStrategy` enum does NOT include interactive/prompt variants;
//! adapter code should handle user interaction separately.

use std::fs;
use std::path::Path;

use tracing::trace;

use super::error::PathError;

/// Strategy for how to handle missing directories when ensuring they exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DirectoryCreationStrategy {
    /// Create directories automatically if they are missing.
    #[default]
    AutoCreate,
    /// Do not create directories; return an error if missing.
    Disallow,
}

/// Ensure the provided directory exists according to the chosen strategy.
///
/// An existing directory is left untouched. If the directory doesn't exist,
/// behavior depends on `strategy`:
/// - `AutoCreate`: Creates the directory (and parents)
/// - `Disallow`: Returns an error
///
/// Returns `true` if the directory was created by this call.
pub fn ensure_directory(path: &Path, strategy: DirectoryCreationStrategy) -> Result<bool, PathError> {
    if path.exists() {
        if !path.is_dir() {
            return Err(PathError::NotADirectory(path.to_path_buf()));
        }
        return Ok(false);
    }

    match strategy {
        DirectoryCreationStrategy::AutoCreate => {
            fs::create_dir_all(path).map_err(|e| PathError::CreateFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
            trace!(path = %path.display(), "Created directory");
            Ok(true)
        }
        DirectoryCreationStrategy::Disallow => Err(PathError::DirectoryNotFound(path.to_path_buf())),
    }
}
