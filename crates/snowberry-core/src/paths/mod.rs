//! Path services for Snowberry's user data and installed data.
//!
//! This module provides the canonical path resolution for all Snowberry components:
//! - The per-user home directory and its category subdirectories
//! - Bundle roots contributed by plugin packages
//! - System directories relative to the installation
//! - File and bitmap lookup over the merged search paths
//!
//! # Design
//!
//! - State lives in a [`PathResolver`] value owned by the application
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - OS detection is behind the [`Host`] trait; `platform` keeps the rest private

mod category;
mod config;
mod ensure;
mod error;
mod listing;
mod names;
mod platform;
mod report;
mod resolver;

#[cfg(test)]
mod test_utils;

// Re-export public API

// Error type
pub use error::PathError;

// Categories of data
pub use category::Category;

// Platform facts and roots
pub use platform::{
    HOME_DIR_NAME, HOMELESS_HOME_DIR_NAME, Host, MAC_HOME_DIR_NAME, NativeHost, home_dir_name,
    is_case_sensitive, normalize_user_path,
};

// Configuration from arguments and environment
pub use config::{
    HOME_ENV_VAR, HOMELESS_FLAG, ResolverConfig, custom_path_var, custom_paths_from_env,
    home_override_from_env, is_homeless, is_homeless_in,
};

// Directory operations
pub use ensure::{DirectoryCreationStrategy, ensure_directory};
pub use listing::{DirListing, list_directory};

// File name helpers
pub use names::{base_name_without_extension, has_extension, quote_for_command_line};

// The resolver and its diagnostics snapshot
pub use report::SearchPathReport;
pub use resolver::{IMAGE_EXTENSIONS, PathResolver};
