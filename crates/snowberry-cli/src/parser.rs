//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use snowberry_core::paths::{HOMELESS_FLAG, normalize_user_path};

use crate::commands::Commands;

/// Command-line interface for inspecting where Snowberry keeps its data.
#[derive(Parser)]
#[command(name = "snowberry")]
#[command(about = "Inspect Snowberry's user, bundle and system data paths")]
#[command(version)]
pub struct Cli {
    /// Keep user data in the installation directory (same as `-nohome`)
    #[arg(long = "nohome", global = true)]
    pub nohome: bool,

    /// Place the Snowberry home directory under this directory (overrides `SNOWBERRY_HOME`)
    #[arg(long = "home", global = true, value_parser = normalize_user_path)]
    pub home: Option<PathBuf>,

    /// Directory that system paths are relative to (defaults to the working directory)
    #[arg(long = "system-root", global = true)]
    pub system_root: Option<PathBuf>,

    /// Add a bundle root; may be repeated, earlier bundles take precedence
    #[arg(long = "bundle", global = true)]
    pub bundles: Vec<PathBuf>,

    /// Print machine-readable JSON instead of text
    #[arg(long = "json", global = true)]
    pub json: bool,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Parse arguments, accepting the launcher's single-dash `-nohome` flag.
    ///
    /// clap would read `-nohome` as a cluster of short flags, so it is taken
    /// out before parsing and folded into `--nohome`.
    pub fn parse_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_args(args).unwrap_or_else(|e| e.exit())
    }

    /// Like [`parse_args`](Self::parse_args), but returns the error instead
    /// of exiting the process.
    pub fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut homeless = false;
        let args: Vec<OsString> = args
            .into_iter()
            .map(Into::into)
            .filter(|arg| {
                let is_flag = arg == HOMELESS_FLAG;
                homeless |= is_flag;
                !is_flag
            })
            .collect();

        let mut cli = Self::try_parse_from(args)?;
        cli.nohome |= homeless;
        Ok(cli)
    }
}
