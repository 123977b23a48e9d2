//! # Configuration
//!
//! Settings live in `config.json` inside the config directory:
//! `BOOKSHELF_HOME` when set, otherwise the OS config directory (via the
//! `directories` crate).
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `catalog_file` | none | Catalog used when `--file` and `BOOKSHELF_FILE` are absent |
//! | `pretty` | `true` | Indent the catalog JSON |
//!
//! Catalog path resolution, first match wins: `--file`, `BOOKSHELF_FILE`,
//! `catalog_file`, then `books.json` in the current directory.

use crate::error::{CatalogError, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
pub const DEFAULT_CATALOG_FILE: &str = "books.json";
pub const HOME_ENV: &str = "BOOKSHELF_HOME";
pub const FILE_ENV: &str = "BOOKSHELF_FILE";

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ShelfConfig {
    #[serde(default)]
    pub catalog_file: Option<PathBuf>,

    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_pretty() -> bool {
    true
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            catalog_file: None,
            pretty: default_pretty(),
        }
    }
}

impl ShelfConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(CatalogError::Io)?;
        let config: ShelfConfig =
            serde_json::from_str(&content).map_err(CatalogError::Serialization)?;
        Ok(config)
    }

    /// Pick the catalog file. `flag` is the `--file` argument and `env` the
    /// value of `BOOKSHELF_FILE`.
    pub fn catalog_path(&self, flag: Option<PathBuf>, env: Option<PathBuf>) -> PathBuf {
        flag.or(env)
            .or_else(|| self.catalog_file.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_FILE))
    }
}

/// Resolve the config directory from `BOOKSHELF_HOME` (passed in as
/// `home_override`) or the platform default.
pub fn config_dir(home_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(home) = home_override {
        return Ok(home);
    }
    ProjectDirs::from("com", "bookshelf", "bookshelf")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| CatalogError::Input("Could not determine config directory".to_string()))
}
