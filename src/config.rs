//! User configuration file.
//!
//! Looked up in order:
//! 1. `--config <path>` on the command line
//! 2. `<config dir>/got-it-first/config.toml` (e.g. ~/.config on Linux)
//! 3. Built-in defaults

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;
use crate::models::ReentryPolicy;

const APP_DIR: &str = "got-it-first";

/// Settings read from config.toml
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// What re-entering a screen does to its nested selection
    pub reentry: ReentryPolicy,
    /// Slide-in transitions and the pulsing loyalty banner
    pub animations: bool,
    /// Event poll / animation tick interval
    pub tick_rate_ms: u64,
    /// Catalog file to use instead of the built-in one
    pub catalog: Option<PathBuf>,
    /// Reload the catalog file when it changes on disk
    pub watch_catalog: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reentry: ReentryPolicy::Preserve,
            animations: true,
            tick_rate_ms: 100,
            catalog: None,
            watch_catalog: true,
        }
    }
}

impl Config {
    /// Default location of config.toml, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
    }

    /// Load from an explicit path, or the default path when it exists
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Default log file location
pub fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join(APP_DIR).join("got-it.log"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.reentry, ReentryPolicy::Preserve);
        assert!(config.animations);
        assert_eq!(config.tick_rate_ms, 100);
        assert!(config.catalog.is_none());
    }

    #[test]
    fn test_load_partial_file_keeps_defaults() {
        let file = write_config("reentry = \"reset\"\n");
        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.reentry, ReentryPolicy::Reset);
        assert!(config.animations);
        assert!(config.watch_catalog);
    }

    #[test]
    fn test_load_full_file() {
        let file = write_config(
            "reentry = \"preserve\"\n\
             animations = false\n\
             tick_rate_ms = 250\n\
             catalog = \"/tmp/catalog.json\"\n\
             watch_catalog = false\n",
        );
        let config = Config::load(Some(file.path())).unwrap();
        assert!(!config.animations);
        assert_eq!(config.tick_rate_ms, 250);
        assert_eq!(config.catalog, Some(PathBuf::from("/tmp/catalog.json")));
        assert!(!config.watch_catalog);
    }

    #[test]
    fn test_invalid_policy_is_parse_error() {
        let file = write_config("reentry = \"sometimes\"\n");
        let err = Config::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_missing_explicit_file_is_io_error() {
        let err = Config::load(Some(Path::new("/nonexistent/config.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
