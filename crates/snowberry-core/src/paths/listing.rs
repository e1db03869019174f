//! Directory enumeration that keeps "absent" apart from "empty".

use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of enumerating one search directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirListing {
    /// The directory was read; entries are full paths sorted by name.
    Entries(Vec<PathBuf>),
    /// The directory is missing or could not be read.
    Unavailable { path: PathBuf, reason: String },
}

impl DirListing {
    /// Whether the directory could be read (it may still be empty).
    pub const fn is_available(&self) -> bool {
        matches!(self, Self::Entries(_))
    }

    /// The entries of the directory, or nothing if it was unavailable.
    pub fn into_entries(self) -> Vec<PathBuf> {
        match self {
            Self::Entries(entries) => entries,
            Self::Unavailable { .. } => Vec::new(),
        }
    }
}

/// List the entries of `path`.
///
/// Failure to open or read the directory yields [`DirListing::Unavailable`];
/// no partial listings are returned.
pub fn list_directory(path: &Path) -> DirListing {
    let unavailable = |e: std::io::Error| DirListing::Unavailable {
        path: path.to_path_buf(),
        reason: e.to_string(),
    };

    let read_dir = match fs::read_dir(path) {
        Ok(read_dir) => read_dir,
        Err(e) => return unavailable(e),
    };

    match read_dir
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<Vec<_>, _>>()
    {
        Ok(mut entries) => {
            entries.sort();
            DirListing::Entries(entries)
        }
        Err(e) => unavailable(e),
    }
}
