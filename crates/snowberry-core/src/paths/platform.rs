//! Platform-specific path detection and resolution.
//!
//! The [`Host`] trait is the only source of "which platform is this" facts;
//! everything else in the module is a pure function of those facts, the
//! environment lookups handed in, and the paths passed as arguments.

use std::env;
use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

use super::error::PathError;

/// Name of the home directory on macOS, placed under Application Support.
pub const MAC_HOME_DIR_NAME: &str = "Snowberry";

/// Name of the home directory everywhere else, placed under the user's home.
pub const HOME_DIR_NAME: &str = ".snowberry";

/// In a homeless setup the home directory is the installation directory itself.
pub const HOMELESS_HOME_DIR_NAME: &str = ".";

/// Platform facts supplied by the embedding application.
#[cfg_attr(test, mockall::automock)]
pub trait Host {
    /// Whether the launcher runs on Windows.
    fn is_windows(&self) -> bool;

    /// Whether the launcher runs on macOS.
    fn is_mac(&self) -> bool;

    /// The `Resources` directory of the application bundle, on bundle-based
    /// platforms. System data lives there instead of the working directory.
    fn bundle_resources_dir(&self) -> Option<PathBuf>;
}

/// Host facts of the platform this binary was compiled for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NativeHost;

impl Host for NativeHost {
    fn is_windows(&self) -> bool {
        cfg!(target_os = "windows")
    }

    fn is_mac(&self) -> bool {
        cfg!(target_os = "macos")
    }

    fn bundle_resources_dir(&self) -> Option<PathBuf> {
        if !self.is_mac() {
            return None;
        }

        // Snowberry.app/Contents/MacOS/snowberry
        let exe = env::current_exe().ok()?;
        let contents = exe.parent()?.parent()?;
        if contents.file_name() != Some(OsStr::new("Contents")) {
            return None;
        }

        let resources = contents.join("Resources");
        resources.is_dir().then_some(resources)
    }
}

/// Returns `true` if the host's file system distinguishes letter case.
pub fn is_case_sensitive<H: Host + ?Sized>(host: &H) -> bool {
    !host.is_windows() && !host.is_mac()
}

/// Name of the directory that holds the user's Snowberry files.
pub fn home_dir_name<H: Host + ?Sized>(host: &H, homeless: bool) -> &'static str {
    if homeless {
        HOMELESS_HOME_DIR_NAME
    } else if host.is_mac() {
        MAC_HOME_DIR_NAME
    } else {
        HOME_DIR_NAME
    }
}

/// Pick the directory under which the Snowberry home directory is placed.
///
/// Resolution order:
/// 1. Homeless setup: the installation directory (`install_dir`)
/// 2. `$HOME`
/// 3. Windows only: `%HOMEDRIVE%%HOMEPATH%`, `%USERPROFILE%`, `%APPDATA%`
/// 4. The platform's notion of the home directory (`platform_home`)
/// 5. The installation directory
///
/// On macOS the user home found in steps 2 and 4 is followed by
/// `Library/Application Support`.
pub(super) fn locate_home_base<H, V, P>(
    host: &H,
    homeless: bool,
    install_dir: &Path,
    var: V,
    platform_home: P,
) -> PathBuf
where
    H: Host + ?Sized,
    V: Fn(&str) -> Option<String>,
    P: FnOnce() -> Option<PathBuf>,
{
    if homeless {
        return install_dir.to_path_buf();
    }

    let non_empty = |key: &str| var(key).filter(|value| !value.is_empty());
    let app_data_in = |home: PathBuf| {
        if host.is_mac() {
            home.join("Library").join("Application Support")
        } else {
            home
        }
    };

    if let Some(home) = non_empty("HOME") {
        return app_data_in(PathBuf::from(home));
    }

    if host.is_windows() {
        if let Some(home_path) = non_empty("HOMEPATH") {
            let drive = var("HOMEDRIVE").unwrap_or_default();
            return PathBuf::from(format!("{drive}{home_path}"));
        }
        if let Some(profile) = non_empty("USERPROFILE") {
            return PathBuf::from(profile);
        }
        if let Some(app_data) = non_empty("APPDATA") {
            return PathBuf::from(app_data);
        }
    }

    // The failsafe.
    platform_home()
        .map(app_data_in)
        .unwrap_or_else(|| install_dir.to_path_buf())
}

/// Resolve `.` and `..` components without touching the file system.
pub(super) fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let popped = matches!(
                    normalized.components().next_back(),
                    Some(Component::Normal(_))
                ) && normalized.pop();
                if !popped && !normalized.has_root() {
                    normalized.push(Component::ParentDir);
                }
            }
            other => normalized.push(other),
        }
    }

    if normalized.as_os_str().is_empty() {
        normalized.push(Component::CurDir);
    }
    normalized
}

/// Make `path` absolute by interpreting it relative to `base`.
pub(super) fn absolutize(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize_lexically(path)
    } else {
        normalize_lexically(&base.join(path))
    }
}

/// The process's current working directory.
pub(super) fn current_dir() -> Result<PathBuf, PathError> {
    env::current_dir().map_err(|e| PathError::CurrentDirError(e.to_string()))
}

/// Normalize a user-provided path, expanding `~` and making it absolute.
pub fn normalize_user_path(raw: &str) -> Result<PathBuf, PathError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PathError::EmptyPath);
    }

    let expanded = if trimmed.starts_with("~/") || trimmed == "~" {
        let home = dirs::home_dir().ok_or(PathError::NoHomeDir)?;
        if trimmed == "~" {
            home
        } else {
            home.join(trimmed.trim_start_matches("~/"))
        }
    } else {
        PathBuf::from(trimmed)
    };

    if expanded.is_absolute() {
        Ok(normalize_lexically(&expanded))
    } else {
        Ok(absolutize(&expanded, &current_dir()?))
    }
}
