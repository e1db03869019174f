//! Integration tests for search path precedence.
//!
//! Every test builds its own resolver over scratch directories, so no test
//! depends on the real home directory or the working directory.

use std::fs;
use std::path::{Path, PathBuf};

use snowberry_core::paths::{Category, Host, PathResolver, ResolverConfig};
use tempfile::{TempDir, tempdir};

/// A Unix-like host without application bundles.
struct UnixHost;

impl Host for UnixHost {
    fn is_windows(&self) -> bool {
        false
    }

    fn is_mac(&self) -> bool {
        false
    }

    fn bundle_resources_dir(&self) -> Option<PathBuf> {
        None
    }
}

struct Fixture {
    install: TempDir,
    home_base: TempDir,
    resolver: PathResolver<UnixHost>,
}

impl Fixture {
    fn new() -> Self {
        let install = tempdir().unwrap();
        let home_base = tempdir().unwrap();
        let config = ResolverConfig {
            home_override: Some(home_base.path().to_path_buf()),
            system_root: Some(install.path().to_path_buf()),
            ..ResolverConfig::default()
        };
        let mut resolver = PathResolver::with_host(UnixHost, config).unwrap();
        resolver.resolve_home().unwrap();

        Self {
            install,
            home_base,
            resolver,
        }
    }

    fn home(&self) -> PathBuf {
        self.home_base.path().join(".snowberry")
    }
}

fn touch(dir: &Path, name: &str) -> PathBuf {
    fs::create_dir_all(dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, b"").unwrap();
    path
}

#[test]
fn user_paths_live_under_home() {
    let fx = Fixture::new();

    for category in Category::ALL {
        assert_eq!(fx.resolver.user_path(category).unwrap(), fx.home().join(category));
    }
    assert_eq!(fx.resolver.home_directory(), Some(fx.home().as_path()));
}

#[test]
fn custom_path_overrides_user_path() {
    let mut fx = Fixture::new();
    let custom = fx.install.path().join("shared-profiles");

    fx.resolver.set_custom_path(Category::Profiles, &custom);
    assert_eq!(fx.resolver.user_path(Category::Profiles).unwrap(), custom);
    assert_eq!(fx.resolver.user_path(Category::Profiles).unwrap(), custom);

    let replacement = fx.install.path().join("other-profiles");
    fx.resolver.set_custom_path(Category::Profiles, &replacement);
    assert_eq!(fx.resolver.user_path(Category::Profiles).unwrap(), replacement);

    // Other categories are unaffected.
    assert_eq!(
        fx.resolver.user_path(Category::Runtime).unwrap(),
        fx.home().join("runtime")
    );
}

#[test]
fn search_paths_are_user_bundles_system() {
    let mut fx = Fixture::new();
    let first = fx.install.path().join("bundles").join("first");
    let second = fx.install.path().join("bundles").join("second");
    fx.resolver.add_bundle_path(&first);
    fx.resolver.add_bundle_path(&second);

    let paths = fx.resolver.search_paths(Category::Addons).unwrap();
    assert_eq!(
        paths,
        vec![
            fx.home().join("addons"),
            first.join("addons"),
            second.join("addons"),
            fx.install.path().join("addons"),
        ]
    );
    assert_eq!(
        fx.resolver.bundle_paths(Category::Lang),
        vec![first.join("lang"), second.join("lang")]
    );
}

#[test]
fn search_paths_without_bundles() {
    let fx = Fixture::new();
    let paths = fx.resolver.search_paths(Category::Conf).unwrap();

    assert_eq!(paths.len(), 2);
    assert_eq!(paths[0], fx.resolver.user_path(Category::Conf).unwrap());
    assert_eq!(paths[1], fx.resolver.system_path(Category::Conf));
}

#[test]
fn list_files_skips_missing_directories() {
    let mut fx = Fixture::new();
    fx.resolver
        .add_bundle_path(fx.install.path().join("bundles").join("missing"));

    let user = touch(&fx.home().join("addons"), "user.box");
    let system = touch(&fx.install.path().join("addons"), "system.pk3");

    let files = fx.resolver.list_files(Category::Addons).unwrap();
    assert_eq!(files, vec![user, system]);
}

#[test]
fn list_files_is_empty_when_nothing_exists() {
    let fx = Fixture::new();
    assert!(fx.resolver.list_files(Category::Plugins).unwrap().is_empty());
}

#[test]
fn list_files_lists_shared_directory_once() {
    let mut fx = Fixture::new();
    let bundle = fx.install.path().join("bundles").join("jdoom");
    let file = touch(&bundle.join("lang"), "english.lang");

    // The same bundle registered twice resolves to one directory.
    fx.resolver.add_bundle_path(&bundle);
    fx.resolver.add_bundle_path(&bundle);

    let files = fx.resolver.list_files(Category::Lang).unwrap();
    assert_eq!(files, vec![file]);
}

#[test]
fn find_image_prefers_path_precedence_over_extension() {
    let fx = Fixture::new();
    let user_png = touch(&fx.home().join("graphics"), "logo.png");
    touch(&fx.install.path().join("graphics"), "logo.jpg");

    assert_eq!(fx.resolver.find_image("logo").unwrap(), Some(user_png));
}

#[test]
fn find_image_uses_extension_order_within_directory() {
    let fx = Fixture::new();
    let graphics = fx.install.path().join("graphics");
    touch(&graphics, "banner.png");
    let bmp = touch(&graphics, "banner.bmp");

    assert_eq!(fx.resolver.find_image("banner").unwrap(), Some(bmp));

    let jpg = touch(&graphics, "banner.jpg");
    assert_eq!(fx.resolver.find_image("banner").unwrap(), Some(jpg));
}

#[test]
fn find_image_checks_bundles_before_system() {
    let mut fx = Fixture::new();
    let bundle = fx.install.path().join("bundles").join("jheretic");
    fx.resolver.add_bundle_path(&bundle);

    let bundled = touch(&bundle.join("graphics"), "icon.png");
    touch(&fx.install.path().join("graphics"), "icon.jpg");

    assert_eq!(fx.resolver.find_image("icon").unwrap(), Some(bundled));
}

#[test]
fn find_image_missing_returns_none() {
    let fx = Fixture::new();
    assert_eq!(fx.resolver.find_image("nothing-here").unwrap(), None);
}

#[test]
fn resolve_home_twice_returns_cached_path() {
    let mut fx = Fixture::new();

    let first = fx.resolver.resolve_home().unwrap().to_path_buf();
    let second = fx.resolver.resolve_home().unwrap().to_path_buf();
    assert_eq!(first, second);
    assert_eq!(first, fx.home());
}
