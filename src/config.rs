//! Settings loaded from a TOML file.
//!
//! Sources, lowest priority first: built-in defaults, the settings file, then the
//! `APIFORM_BASE_URL` environment variable. Command-line flags are applied by the caller.

use crate::error::ConfigError;
use crate::schema::DEFAULT_BASE_URL;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const BASE_URL_ENV: &str = "APIFORM_BASE_URL";

const FALLBACK_STORE_FILE: &str = "apiform-drafts.json";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("dev", "apiform", "apiform")
}

/// Default location of the settings file, if the platform has a config directory.
pub fn default_config_path() -> Option<PathBuf> {
    project_dirs().map(|d| d.config_dir().join("config.toml"))
}

/// Default location of the draft store.
pub fn default_store_path() -> PathBuf {
    project_dirs()
        .map(|d| d.data_dir().join("drafts.json"))
        .unwrap_or_else(|| PathBuf::from(FALLBACK_STORE_FILE))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Prefix of every compiled URL.
    pub base_url: String,
    /// JSON document holding saved drafts.
    pub store_path: PathBuf,
    /// Optional JSON catalog replacing the built-in one.
    pub catalog_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            store_path: default_store_path(),
            catalog_path: None,
        }
    }
}

impl Settings {
    pub fn from_toml(text: &str, origin: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::Parse {
            path: origin.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Reads settings from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(text) => {
                debug!(path = %path.display(), "loaded settings");
                Self::from_toml(&text, path)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Io {
                path: path.display().to_string(),
                source,
            }),
        }
    }

    /// Loads from `path` or the default location, then applies the environment.
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut settings = match path.map(Path::to_path_buf).or_else(default_config_path) {
            Some(path) => Self::load(&path)?,
            None => Self::default(),
        };
        settings.apply_env(|name| std::env::var(name).ok());
        Ok(settings)
    }

    /// Applies overrides looked up by variable name.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(BASE_URL_ENV).filter(|u| !u.trim().is_empty()) {
            self.base_url = url;
        }
    }
}
