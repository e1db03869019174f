//! Snapshot of everything the resolver knows, for diagnostics.
//!
//! This is the "golden truth" for path resolution - use it for:
//! - CLI `snowberry paths` command output
//! - Debugging why a file is (or isn't) picked up

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use super::category::Category;
use super::error::PathError;
use super::platform::Host;
use super::resolver::PathResolver;

/// All resolved paths captured in a single struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchPathReport {
    /// The Snowberry home directory, if resolved.
    pub home_directory: Option<PathBuf>,
    /// Directory that system paths are relative to.
    pub system_root: PathBuf,
    /// Whether user data is kept in the installation directory.
    pub homeless: bool,
    /// Whether file names are case sensitive on this host.
    pub case_sensitive: bool,
    /// Search paths of every category, highest precedence first.
    pub search_paths: BTreeMap<Category, Vec<PathBuf>>,
}

impl<H: Host> PathResolver<H> {
    /// Capture the current state of the resolver.
    pub fn report(&self) -> Result<SearchPathReport, PathError> {
        let search_paths: BTreeMap<_, _> = Category::ALL
            .into_iter()
            .map(|category| self.search_paths(category).map(|paths| (category, paths)))
            .collect::<Result<_, _>>()?;

        Ok(SearchPathReport {
            home_directory: self.home_directory().map(PathBuf::from),
            system_root: self.system_root().to_path_buf(),
            homeless: self.homeless(),
            case_sensitive: self.is_case_sensitive(),
            search_paths,
        })
    }
}

impl fmt::Display for SearchPathReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.home_directory {
            Some(home) => writeln!(f, "home_directory = {}", home.display())?,
            None => writeln!(f, "home_directory = (unresolved)")?,
        }
        writeln!(f, "system_root = {}", self.system_root.display())?;
        writeln!(f, "homeless = {}", self.homeless)?;
        write!(f, "case_sensitive = {}", self.case_sensitive)?;

        for (category, paths) in &self.search_paths {
            let joined = paths
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", ");
            write!(f, "\n{category} = {joined}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::config::ResolverConfig;
    use crate::paths::platform::MockHost;
    use tempfile::tempdir;

    fn resolver(install: &std::path::Path, home: &std::path::Path) -> PathResolver<MockHost> {
        let mut host = MockHost::new();
        host.expect_is_windows().return_const(false);
        host.expect_is_mac().return_const(false);

        let config = ResolverConfig {
            home_override: Some(home.to_path_buf()),
            system_root: Some(install.to_path_buf()),
            ..ResolverConfig::default()
        };
        PathResolver::with_host(host, config).unwrap()
    }

    #[test]
    fn report_lists_every_category() {
        let install = tempdir().unwrap();
        let home = tempdir().unwrap();
        let mut resolver = resolver(install.path(), home.path());
        resolver.resolve_home().unwrap();
        resolver.add_bundle_path(install.path().join("bundles").join("jdoom"));

        let report = resolver.report().unwrap();
        assert_eq!(report.search_paths.len(), Category::ALL.len());
        assert_eq!(report.search_paths[&Category::Graphics].len(), 3);
        assert!(report.case_sensitive);
    }

    #[test]
    fn report_requires_resolved_home() {
        let install = tempdir().unwrap();
        let home = tempdir().unwrap();
        let resolver = resolver(install.path(), home.path());

        assert!(matches!(resolver.report(), Err(PathError::HomeNotResolved)));
    }

    #[test]
    fn display_format_is_parseable() {
        let install = tempdir().unwrap();
        let home = tempdir().unwrap();
        let mut resolver = resolver(install.path(), home.path());
        resolver.resolve_home().unwrap();

        let output = resolver.report().unwrap().to_string();
        assert!(output.contains("home_directory = "));
        assert!(output.contains("system_root = "));
        assert!(output.contains("homeless = false"));
        assert!(output.contains("graphics = "));
        assert!(output.lines().all(|line| line.contains(" = ")));
    }

    #[test]
    fn serializes_categories_as_keys() {
        let install = tempdir().unwrap();
        let home = tempdir().unwrap();
        let mut resolver = resolver(install.path(), home.path());
        resolver.resolve_home().unwrap();

        let json = serde_json::to_value(resolver.report().unwrap()).unwrap();
        assert!(json["search_paths"]["profiles"].is_array());
        assert_eq!(json["homeless"], serde_json::Value::Bool(false));
    }
}
