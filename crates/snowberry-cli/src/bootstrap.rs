//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where the path resolver is constructed for
//! the CLI adapter. Command-line flags are layered over the configuration read
//! from the process environment, then the home directory is resolved once.

use anyhow::{Context, Result};
use snowberry_core::paths::{PathResolver, ResolverConfig};
use tracing::debug;

use crate::parser::Cli;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Resolver settings after applying command-line flags.
    pub resolver: ResolverConfig,
}

impl CliConfig {
    /// Read the environment, then apply the flags given on the command line.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let base = ResolverConfig::from_env().context("Failed to read path overrides")?;
        Ok(Self::with_overrides(base, cli))
    }

    /// Layer command-line flags over `base`. Flags win over the environment.
    pub fn with_overrides(mut base: ResolverConfig, cli: &Cli) -> Self {
        base.homeless |= cli.nohome;
        if let Some(home) = &cli.home {
            base.home_override = Some(home.clone());
        }
        if let Some(root) = &cli.system_root {
            base.system_root = Some(root.clone());
        }
        base.bundle_paths.extend(cli.bundles.iter().cloned());

        Self { resolver: base }
    }
}

/// Construct the resolver and resolve (creating if needed) the home directory.
pub fn bootstrap(config: CliConfig) -> Result<PathResolver> {
    debug!(
        homeless = config.resolver.homeless,
        bundles = ?config.resolver.bundle_paths,
        "Bootstrapping path resolver"
    );

    PathResolver::initialize(config.resolver).context("Failed to set up the Snowberry home directory")
}
