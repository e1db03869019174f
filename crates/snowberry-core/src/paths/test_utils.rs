//! Test utilities for path tests that need environment variable isolation.
//!
//! This module provides synchronization primitives to prevent race conditions
//! in tests that modify environment variables like `SNOWBERRY_HOME`.

use std::env;
use std::sync::Mutex;

/// Shared lock to serialize tests that depend on environment variables.
///
/// All tests that read or write environment variables (especially the
/// `SNOWBERRY_*` overrides) must acquire this lock to prevent race conditions.
pub static ENV_LOCK: Mutex<()> = Mutex::new(());

/// RAII guard that restores an environment variable to its original value on drop.
///
/// # Example
///
/// ```ignore
/// let _guard = ENV_LOCK.lock().unwrap();
/// let _home = EnvVarGuard::set("SNOWBERRY_HOME", "/tmp/test");
/// let _conf = EnvVarGuard::unset("SNOWBERRY_CONF_DIR");
/// // Original values restored when the guards are dropped
/// ```
pub struct EnvVarGuard {
    key: String,
    previous: Option<String>,
}

impl EnvVarGuard {
    /// Set an environment variable and return a guard that will restore it.
    pub fn set(key: &str, value: &str) -> Self {
        let guard = Self::capture(key);
        write_var(key, Some(value));
        guard
    }

    /// Remove an environment variable and return a guard that will restore it.
    pub fn unset(key: &str) -> Self {
        let guard = Self::capture(key);
        write_var(key, None);
        guard
    }

    fn capture(key: &str) -> Self {
        Self {
            key: key.to_string(),
            previous: env::var(key).ok(),
        }
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        write_var(&self.key, self.previous.as_deref());
    }
}

// Callers hold ENV_LOCK, so no other test thread touches the environment.
#[allow(unsafe_code)]
fn write_var(key: &str, value: Option<&str>) {
    match value {
        Some(value) => unsafe { env::set_var(key, value) },
        None => unsafe { env::remove_var(key) },
    }
}
