//! Configuration system for rowdex.
//!
//! rowdex uses a TOML configuration file named `.rowdex.toml`, discovered by walking up
//! the directory tree from the current working directory and falling back to
//! `~/.rowdex.toml`. Configuration is loaded once per invocation and passed to
//! components explicitly; nothing reads it through process-wide state.
//!
//! Two settings exist: `cache_root` (where cached indexes live, overriding the home
//! directory default) and `[search] limit` (maximum matches returned per query).

#![warn(missing_docs)]

mod discovery;
mod error;

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;

pub use discovery::{CONFIG_FILENAME, discover_config_file, global_config_path};
pub use error::ConfigError;

/// Default maximum matches returned per query.
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

/// Top-level configuration for rowdex.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Cache root override from the config file, if any. Absolute after loading.
    pub cache_root: Option<PathBuf>,
    /// Search-related settings.
    pub search: SearchSettings,
}

/// Search-related settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Maximum matches returned per query.
    pub limit: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            limit: DEFAULT_SEARCH_LIMIT,
        }
    }
}

/// On-disk shape of a `.rowdex.toml` file.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
    /// Cache root, possibly relative to the config file's directory.
    cache_root: Option<PathBuf>,
    /// Search-related settings.
    search: SearchSettings,
}

impl Config {
    /// Loads configuration by discovering the nearest `.rowdex.toml`.
    ///
    /// Returns `Ok(Config::default())` if no configuration file exists.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        match discover_config_file(cwd) {
            Some(path) => Self::load_from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Loads configuration from a specific file.
    ///
    /// A relative `cache_root` is resolved against the config file's directory, so a
    /// project-local config can keep its cache next to the project.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;

        let raw: RawConfig =
            toml::from_str(&contents).map_err(|source| ConfigError::ParseToml {
                path: path.to_path_buf(),
                source,
            })?;

        let cache_root = raw.cache_root.map(|root| {
            if root.is_absolute() {
                root
            } else {
                let base = path.parent().unwrap_or_else(|| Path::new("."));
                base.join(root)
            }
        });

        Ok(Self {
            cache_root,
            search: raw.search,
        })
    }
}

#[cfg(test)]
mod test {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn search_settings_defaults() {
        let search = SearchSettings::default();
        assert_eq!(search.limit, DEFAULT_SEARCH_LIMIT);
    }

    #[test]
    fn default_config_has_no_cache_root() {
        let config = Config::default();
        assert!(config.cache_root.is_none());
        assert_eq!(config.search.limit, DEFAULT_SEARCH_LIMIT);
    }

    #[test]
    fn loads_settings_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        fs::write(&path, "cache_root = \"/var/cache/rowdex\"\n\n[search]\nlimit = 25\n")
            .unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.cache_root, Some(PathBuf::from("/var/cache/rowdex")));
        assert_eq!(config.search.limit, 25);
    }

    #[test]
    fn relative_cache_root_resolves_against_config_dir() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        fs::write(&path, "cache_root = \"cache\"\n").unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.cache_root, Some(temp.path().join("cache")));
    }

    #[test]
    fn empty_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        fs::write(&path, "").unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert!(config.cache_root.is_none());
        assert_eq!(config.search.limit, DEFAULT_SEARCH_LIMIT);
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        fs::write(&path, "cache_root = [not toml").unwrap();

        let err = Config::load_from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseToml { .. }));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);

        let err = Config::load_from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ReadFile { .. }));
    }

    #[test]
    fn load_without_any_config_is_default() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("a/b");
        fs::create_dir_all(&nested).unwrap();

        // May pick up a real ~/.rowdex.toml on the test machine; only assert the
        // no-config case when discovery finds nothing.
        if discover_config_file(&nested).is_none() {
            let config = Config::load(&nested).unwrap();
            assert!(config.cache_root.is_none());
        }
    }
}
