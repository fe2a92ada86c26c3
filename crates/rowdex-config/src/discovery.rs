//! Configuration file discovery.
//!
//! Finds the `.rowdex.toml` governing an invocation by walking up the directory tree
//! from a starting point, falling back to the global `~/.rowdex.toml` if present.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

/// The configuration filename.
pub const CONFIG_FILENAME: &str = ".rowdex.toml";

/// Discovers the configuration file relevant to the given directory.
///
/// Walks up from `cwd` to the filesystem root and returns the first `.rowdex.toml`
/// found; the closest file wins. If none exists along the way, returns `~/.rowdex.toml`
/// when that file exists. Returns `None` if there is no configuration at all.
pub fn discover_config_file(cwd: &Path) -> Option<PathBuf> {
    let mut current = Some(cwd);
    while let Some(dir) = current {
        let config_path = dir.join(CONFIG_FILENAME);
        if config_path.is_file() {
            return Some(config_path);
        }
        current = dir.parent();
    }

    global_config_path().filter(|path| path.is_file())
}

/// Returns the path to the global configuration file (`~/.rowdex.toml`).
///
/// Returns `None` if the home directory cannot be determined.
pub fn global_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join(CONFIG_FILENAME))
}
