use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Looked up in the site root when no explicit config path is given.
pub const CONFIG_FILE_NAME: &str = "mdsite.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Site layout. Relative paths are resolved against the site root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub content_dir: PathBuf,
    pub static_dir: PathBuf,
    pub public_dir: PathBuf,
    pub template: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            content_dir: PathBuf::from("content"),
            static_dir: PathBuf::from("static"),
            public_dir: PathBuf::from("public"),
            template: PathBuf::from("template.html"),
        }
    }
}

impl SiteConfig {
    /// Load a config file. A missing file is `Ok(None)`.
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }
        Self::read(config_path).map(Some)
    }

    /// Load the config for `root`: the explicit `config_path` if given (it
    /// must exist), otherwise `root/mdsite.toml` if present, otherwise the
    /// defaults. The result is resolved against `root`.
    pub fn load_for_root(root: &Path, config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match config_path {
            Some(path) => Self::read(path)?,
            None => Self::load_from_path(root.join(CONFIG_FILE_NAME))?.unwrap_or_default(),
        };
        Ok(config.resolve_against(root))
    }

    fn read(config_path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
            config_path: config_path.to_path_buf(),
            source,
        })
    }

    /// Make every relative path absolute with respect to `root`.
    pub fn resolve_against(self, root: &Path) -> Self {
        let resolve = |p: PathBuf| if p.is_absolute() { p } else { root.join(p) };
        SiteConfig {
            content_dir: resolve(self.content_dir),
            static_dir: resolve(self.static_dir),
            public_dir: resolve(self.public_dir),
            template: resolve(self.template),
        }
    }
}
