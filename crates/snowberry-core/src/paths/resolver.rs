//! The path resolver: user home, bundle roots and system root merged into
//! per-category search paths.
//!
//! Search order is always user path, then bundle paths in registration order,
//! then the system path. Anything found earlier in that order shadows the
//! same thing found later.

use std::collections::{HashMap, HashSet};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::category::Category;
use super::config::ResolverConfig;
use super::ensure::{DirectoryCreationStrategy, ensure_directory};
use super::error::PathError;
use super::listing::{DirListing, list_directory};
use super::platform::{
    Host, NativeHost, absolutize, current_dir, home_dir_name, is_case_sensitive,
    locate_home_base,
};

/// Bitmap extensions tried by [`PathResolver::find_image`], in order.
pub const IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "bmp", "png"];

/// Prefix of the user profiles directory when the plain name would collide
/// with the system profiles directory.
const COLLIDING_PROFILES_PREFIX: &str = "user";

/// Resolves where each [`Category`] of data lives.
///
/// Construct one at startup, call [`resolve_home`](Self::resolve_home) (or use
/// [`initialize`](PathResolver::initialize)), then register bundles and
/// overrides. Queries that need the user path fail with
/// [`PathError::HomeNotResolved`] until the home directory is known.
pub struct PathResolver<H: Host = NativeHost> {
    host: H,
    homeless: bool,
    home_override: Option<PathBuf>,
    working_dir: PathBuf,
    system_root: PathBuf,
    home: Option<PathBuf>,
    bundle_paths: Vec<PathBuf>,
    custom_paths: HashMap<Category, PathBuf>,
}

impl PathResolver<NativeHost> {
    /// Create a resolver for the native platform. The home directory is not
    /// resolved yet.
    pub fn new(config: ResolverConfig) -> Result<Self, PathError> {
        Self::with_host(NativeHost, config)
    }

    /// Create a resolver for the native platform and resolve (and create)
    /// the home directory.
    pub fn initialize(config: ResolverConfig) -> Result<Self, PathError> {
        let mut resolver = Self::new(config)?;
        resolver.resolve_home()?;
        Ok(resolver)
    }
}

impl<H: Host> PathResolver<H> {
    /// Create a resolver that takes its platform facts from `host`.
    ///
    /// Relative paths in `config`, and relative paths registered later, are
    /// interpreted against the working directory at construction time.
    pub fn with_host(host: H, config: ResolverConfig) -> Result<Self, PathError> {
        let cwd = current_dir()?;

        let system_root = match config.system_root {
            Some(root) => absolutize(&root, &cwd),
            None => host.bundle_resources_dir().unwrap_or_else(|| cwd.clone()),
        };

        Ok(Self {
            host,
            homeless: config.homeless,
            home_override: config.home_override.map(|p| absolutize(&p, &cwd)),
            system_root,
            home: None,
            bundle_paths: config
                .bundle_paths
                .iter()
                .map(|p| absolutize(p, &cwd))
                .collect(),
            custom_paths: config
                .custom_paths
                .into_iter()
                .map(|(category, p)| (category, absolutize(&p, &cwd)))
                .collect(),
            working_dir: cwd,
        })
    }

    /// The platform facts this resolver uses.
    pub const fn host(&self) -> &H {
        &self.host
    }

    /// Whether user data is kept in the installation directory.
    pub const fn homeless(&self) -> bool {
        self.homeless
    }

    /// Directory that system paths are relative to.
    pub fn system_root(&self) -> &Path {
        &self.system_root
    }

    /// Returns `true` if the host's file system distinguishes letter case.
    pub fn is_case_sensitive(&self) -> bool {
        is_case_sensitive(&self.host)
    }

    /// Resolve the Snowberry home directory, creating it and the user
    /// directory of every category if they don't exist yet.
    ///
    /// Only the first successful call does any work; later calls return the
    /// cached directory without touching the file system.
    pub fn resolve_home(&mut self) -> Result<&Path, PathError> {
        if self.home.is_none() {
            let home = self.locate_home();
            ensure_directory(&home, DirectoryCreationStrategy::AutoCreate)?;

            for category in Category::ALL {
                let dir = self.user_path_in(&home, category);
                ensure_directory(&dir, DirectoryCreationStrategy::AutoCreate)?;
            }

            info!(
                home = %home.display(),
                homeless = self.homeless,
                "Resolved Snowberry home directory"
            );
            self.home = Some(home);
        }

        self.home.as_deref().ok_or(PathError::HomeNotResolved)
    }

    fn locate_home(&self) -> PathBuf {
        let base = self.home_override.clone().unwrap_or_else(|| {
            locate_home_base(
                &self.host,
                self.homeless,
                &self.system_root,
                |key| env::var(key).ok(),
                dirs::home_dir,
            )
        });

        absolutize(
            &base.join(home_dir_name(&self.host, self.homeless)),
            &self.system_root,
        )
    }

    /// The resolved home directory, if [`resolve_home`](Self::resolve_home)
    /// has succeeded.
    pub fn home_directory(&self) -> Option<&Path> {
        self.home.as_deref()
    }

    /// Add a bundle root. Files are searched in bundles after the user path
    /// and before the system path, in the order the bundles were added.
    pub fn add_bundle_path(&mut self, path: impl Into<PathBuf>) {
        let path = absolutize(&path.into(), &self.working_dir);
        self.bundle_paths.push(path);
    }

    /// Use `path` as the user path of `category` instead of the one under
    /// the home directory.
    pub fn set_custom_path(&mut self, category: Category, path: impl Into<PathBuf>) {
        let path = absolutize(&path.into(), &self.working_dir);
        self.custom_paths.insert(category, path);
    }

    /// Directory of `category` under the system root.
    pub fn system_path(&self, category: Category) -> PathBuf {
        self.system_root.join(category)
    }

    /// Directory where the current user's data of `category` is stored.
    pub fn user_path(&self, category: Category) -> Result<PathBuf, PathError> {
        let path = match self.custom_paths.get(&category) {
            Some(custom) => custom.clone(),
            None => {
                let home = self.home.as_deref().ok_or(PathError::HomeNotResolved)?;
                self.user_path_in(home, category)
            }
        };

        debug!(%category, path = %path.display(), "Resolved user path");
        Ok(path)
    }

    fn user_path_in(&self, home: &Path, category: Category) -> PathBuf {
        if let Some(custom) = self.custom_paths.get(&category) {
            return custom.clone();
        }

        let path = home.join(category);

        // The system profiles directory and the user profiles directory
        // can't be the same.
        if category == Category::Profiles && path == self.system_path(category) {
            return home.join(format!("{COLLIDING_PROFILES_PREFIX}{category}"));
        }
        path
    }

    /// Directories of `category` inside every bundle root, in registration order.
    pub fn bundle_paths(&self, category: Category) -> Vec<PathBuf> {
        self.bundle_paths
            .iter()
            .map(|root| root.join(category))
            .collect()
    }

    /// Every directory searched for `category`: user, bundles, system.
    pub fn search_paths(&self, category: Category) -> Result<Vec<PathBuf>, PathError> {
        let bundles = self.bundle_paths(category);
        let mut paths = Vec::with_capacity(bundles.len() + 2);
        paths.push(self.user_path(category)?);
        paths.extend(bundles);
        paths.push(self.system_path(category));
        Ok(paths)
    }

    /// All files of `category` as absolute paths.
    ///
    /// Directories that are missing or unreadable are skipped. A file
    /// reachable through more than one search path is listed once, at its
    /// highest-precedence position.
    pub fn list_files(&self, category: Category) -> Result<Vec<PathBuf>, PathError> {
        let mut seen = HashSet::new();
        let mut files = Vec::new();

        for dir in self.search_paths(category)? {
            match list_directory(&dir) {
                DirListing::Entries(entries) => {
                    for entry in entries {
                        let full = absolutize(&entry, &self.working_dir);
                        let key = fs::canonicalize(&full).unwrap_or_else(|_| full.clone());
                        if seen.insert(key) {
                            files.push(full);
                        }
                    }
                }
                DirListing::Unavailable { path, reason } => {
                    debug!(path = %path.display(), %reason, "Skipping unavailable search path");
                }
            }
        }

        Ok(files)
    }

    /// Locate a bitmap by its name without extension.
    ///
    /// Search paths are tried in precedence order and each of
    /// [`IMAGE_EXTENSIONS`] is tried within a directory before moving on, so
    /// a user bitmap always wins over a system one.
    pub fn find_image(&self, base_name: &str) -> Result<Option<PathBuf>, PathError> {
        for dir in self.search_paths(Category::Graphics)? {
            for ext in IMAGE_EXTENSIONS {
                let file_name = dir.join(format!("{base_name}.{ext}"));
                if file_name.exists() {
                    return Ok(Some(file_name));
                }
            }
        }

        Ok(None)
    }
}
