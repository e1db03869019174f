//! Resolver configuration from process arguments and environment variables.
//!
//! Overrides are read only. The CLI may load them from a `.env` file before
//! calling [`ResolverConfig::from_env`].

use std::collections::HashMap;
use std::env;
use std::ffi::OsStr;
use std::path::PathBuf;

use super::category::Category;
use super::error::PathError;
use super::platform::normalize_user_path;

/// Process argument that selects a homeless setup.
pub const HOMELESS_FLAG: &str = "-nohome";

/// Environment variable that overrides where the home directory is placed.
pub const HOME_ENV_VAR: &str = "SNOWBERRY_HOME";

/// Inputs for constructing a [`PathResolver`](super::PathResolver).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Keep user data in the installation directory.
    pub homeless: bool,
    /// Directory to place the home directory under, instead of the platform default.
    pub home_override: Option<PathBuf>,
    /// Directory that system paths are relative to. Defaults to the bundle's
    /// resources directory, or the current working directory.
    pub system_root: Option<PathBuf>,
    /// Bundle roots, in search order.
    pub bundle_paths: Vec<PathBuf>,
    /// User path overrides.
    pub custom_paths: HashMap<Category, PathBuf>,
}

impl ResolverConfig {
    /// Build a configuration from the process arguments and environment.
    ///
    /// - `homeless` is set when the arguments contain [`HOMELESS_FLAG`]
    /// - `home_override` comes from [`HOME_ENV_VAR`]
    /// - `custom_paths` come from the `SNOWBERRY_<CATEGORY>_DIR` variables
    pub fn from_env() -> Result<Self, PathError> {
        Ok(Self {
            homeless: is_homeless(),
            home_override: home_override_from_env()?,
            system_root: None,
            bundle_paths: Vec::new(),
            custom_paths: custom_paths_from_env()?,
        })
    }
}

/// Homeless setup means that Snowberry uses the main installation
/// directory for user data.
pub fn is_homeless() -> bool {
    is_homeless_in(env::args_os())
}

/// Whether `args` contains [`HOMELESS_FLAG`].
pub fn is_homeless_in<I, S>(args: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    args.into_iter()
        .any(|arg| arg.as_ref() == OsStr::new(HOMELESS_FLAG))
}

/// Name of the environment variable that overrides the user path of `category`.
pub fn custom_path_var(category: Category) -> String {
    format!("SNOWBERRY_{}_DIR", category.as_str().to_ascii_uppercase())
}

/// Read [`HOME_ENV_VAR`], if set to a non-empty value.
pub fn home_override_from_env() -> Result<Option<PathBuf>, PathError> {
    read_path_var(HOME_ENV_VAR)
}

/// Read every category's override variable.
pub fn custom_paths_from_env() -> Result<HashMap<Category, PathBuf>, PathError> {
    let mut custom = HashMap::new();
    for category in Category::ALL {
        if let Some(path) = read_path_var(&custom_path_var(category))? {
            custom.insert(category, path);
        }
    }
    Ok(custom)
}

fn read_path_var(key: &str) -> Result<Option<PathBuf>, PathError> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => normalize_user_path(&value).map(Some),
        _ => Ok(None),
    }
}
