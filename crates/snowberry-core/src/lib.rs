#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod paths;

// Re-export path utilities
pub use paths::{
    Category, DirListing, DirectoryCreationStrategy, Host, IMAGE_EXTENSIONS, NativeHost,
    PathError, PathResolver, ResolverConfig, SearchPathReport, base_name_without_extension,
    ensure_directory, has_extension, is_case_sensitive, is_homeless, list_directory,
    quote_for_command_line,
};
