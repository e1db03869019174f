//! Main commands enum.
//!
//! This module defines the available commands for the CLI tool.

use clap::Subcommand;
use snowberry_core::Category;

/// Available commands for inspecting Snowberry's data locations.
#[derive(Subcommand)]
pub enum Commands {
    /// Show the home directory and the search paths of every category
    Paths,

    /// List the files of one category, highest precedence first
    Files {
        /// Category name (addons, uninstalled, conf, lang, plugins, profiles, graphics, runtime)
        category: Category,
    },

    /// Locate a bitmap in the graphics search paths
    FindImage {
        /// Bitmap name without extension
        name: String,
    },
}
