//! Kinds of data that have their own user, bundle and system directories.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::PathError;

/// A named kind of application data.
///
/// The directory name of each category is the same under the user home,
/// under every bundle root and under the system root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Installed addons.
    Addons,
    /// Addons that have been uninstalled but are kept around.
    Uninstalled,
    /// Configuration files.
    Conf,
    /// Language packs.
    Lang,
    /// Launcher plugins.
    Plugins,
    /// Game profiles.
    Profiles,
    /// Bitmaps used by the user interface.
    Graphics,
    /// Runtime files written by the engine.
    Runtime,
}

impl Category {
    /// Every category, in the order their user directories are created.
    pub const ALL: [Self; 8] = [
        Self::Addons,
        Self::Uninstalled,
        Self::Conf,
        Self::Lang,
        Self::Plugins,
        Self::Profiles,
        Self::Graphics,
        Self::Runtime,
    ];

    /// Directory name of the category.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Addons => "addons",
            Self::Uninstalled => "uninstalled",
            Self::Conf => "conf",
            Self::Lang => "lang",
            Self::Plugins => "plugins",
            Self::Profiles => "profiles",
            Self::Graphics => "graphics",
            Self::Runtime => "runtime",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<Path> for Category {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl FromStr for Category {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| PathError::UnknownCategory(name.to_string()))
    }
}
