// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! The config directory is resolved in the following priority order:
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI argument** (`--config-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variable** (`KEEPSAKE_CONFIG_DIR`)
//! 4. **Platform default** - via `dirs` crate
//!
//! The content root (where `/photos/..` and `/music/..` locators live) is
//! resolved by [`resolve_content_root`]: CLI positional argument, then the
//! `gallery.content_dir` setting, then `./public`.

use crate::app::config::DEFAULT_CONTENT_DIR;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "Keepsake";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "KEEPSAKE_CONFIG_DIR";

/// Global CLI override for config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config-dir` CLI argument.
///
/// Only the first call has an effect; later calls are ignored so that
/// tests constructing several applications do not panic.
pub fn init_cli_overrides(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        tracing::debug!("config dir override already initialized");
    }
}

/// Returns the CLI override for config directory, if set.
fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

/// Returns the application config directory path.
///
/// - Linux: `~/.config/Keepsake/`
/// - macOS: `~/Library/Application Support/Keepsake/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\Keepsake\`
///
/// Returns `None` if the config directory cannot be determined (rare edge case).
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
///
/// # Arguments
///
/// * `override_path` - Optional path to use instead of default. Takes highest priority.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    // Priority 1: Explicit override (for tests)
    if let Some(path) = override_path {
        return Some(path);
    }

    // Priority 2: CLI argument
    if let Some(path) = get_cli_config_dir() {
        return Some(path);
    }

    // Priority 3: Environment variable
    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    // Priority 4: Platform default with app name
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Picks the directory that root-relative locators are resolved against.
pub fn resolve_content_root(cli_dir: Option<&str>, configured: Option<&Path>) -> PathBuf {
    if let Some(dir) = cli_dir.filter(|d| !d.is_empty()) {
        return PathBuf::from(dir);
    }
    if let Some(dir) = configured {
        return dir.to_path_buf();
    }
    PathBuf::from(DEFAULT_CONTENT_DIR)
}

/// Maps a resource locator to a filesystem path.
///
/// Root-relative locators (`/photos/1.jpg`) are joined onto `root`. Anything
/// that already points at an existing absolute path (picked files) is used as is.
pub fn resolve_locator(root: &Path, locator: &str) -> PathBuf {
    let candidate = Path::new(locator);
    if candidate.is_absolute() && candidate.exists() {
        return candidate.to_path_buf();
    }
    let relative = locator.trim_start_matches(['/', '\\']);
    root.join(relative)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to prevent parallel tests from interfering with each other's env vars
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn app_config_dir_contains_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_CONFIG_DIR);

        if let Some(path) = get_app_config_dir() {
            assert!(
                path.to_string_lossy().contains(APP_NAME),
                "App config dir should contain app name"
            );
        }
    }

    #[test]
    fn override_path_takes_precedence_for_config_dir() {
        let override_path = PathBuf::from("/custom/config/path");
        let result = get_app_config_dir_with_override(Some(override_path.clone()));
        assert_eq!(result, Some(override_path));
    }

    #[test]
    fn env_var_overrides_default_config_dir() {
        let _lock = ENV_MUTEX.lock().unwrap();
        let test_path = "/test/config/dir";
        std::env::set_var(ENV_CONFIG_DIR, test_path);

        let result = get_app_config_dir();
        assert_eq!(result, Some(PathBuf::from(test_path)));

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn empty_env_var_uses_default() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "");

        if let Some(path) = get_app_config_dir() {
            assert!(path.to_string_lossy().contains(APP_NAME));
        }

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn content_root_prefers_cli_then_config() {
        let configured = PathBuf::from("/from/config");
        assert_eq!(
            resolve_content_root(Some("/from/cli"), Some(&configured)),
            PathBuf::from("/from/cli")
        );
        assert_eq!(resolve_content_root(None, Some(&configured)), configured);
        assert_eq!(
            resolve_content_root(None, None),
            PathBuf::from(DEFAULT_CONTENT_DIR)
        );
    }

    #[test]
    fn root_relative_locator_joins_content_root() {
        let root = PathBuf::from("/srv/keepsake");
        assert_eq!(
            resolve_locator(&root, "/photos/7.jpg"),
            PathBuf::from("/srv/keepsake/photos/7.jpg")
        );
    }

    #[test]
    fn existing_absolute_path_is_kept() {
        let dir = tempfile::tempdir().expect("temp dir");
        let file = dir.path().join("picked.png");
        std::fs::write(&file, b"x").expect("write");
        let root = PathBuf::from("/unrelated");

        let locator = file.to_string_lossy().to_string();
        assert_eq!(resolve_locator(&root, &locator), file);
    }
}
