//! TOML configuration for the `marketscan` binary.
//!
//! A config file holds a `[paths]` table for artifact locations and one table
//! per pipeline stage. Every key is optional.

use std::path::{Path, PathBuf};

use marketscan_core::{ArtifactStore, Error, Result};
use marketscan_pipeline::PipelineSettings;
use serde::{Deserialize, Serialize};

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "MARKETSCAN_CONFIG";

/// Directory and binary name.
pub const PROJECT_NAME: &str = "marketscan";

/// File name inside the per-user config directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Where artifacts are read and written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Collected data
    pub data_dir: PathBuf,
    /// Analyses and reports
    pub results_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            results_dir: PathBuf::from("results"),
        }
    }
}

/// Everything the binary reads from its config file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketscanConfig {
    /// Artifact locations
    pub paths: PathsConfig,
    /// Stage parameters
    #[serde(flatten)]
    pub pipeline: PipelineSettings,
}

/// Where configuration comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// A file named on the command line or in the environment; must exist
    Named(PathBuf),
    /// The per-user file; read only if present
    UserDefault(PathBuf),
    /// No file location could be determined
    Defaults,
}

impl ConfigSource {
    /// Resolve the source for an optional explicit path.
    pub fn resolve(explicit: Option<&Path>) -> Self {
        Self::resolve_with(explicit, default_config_path())
    }

    fn resolve_with(explicit: Option<&Path>, user_default: Option<PathBuf>) -> Self {
        match (explicit, user_default) {
            (Some(path), _) => ConfigSource::Named(path.to_path_buf()),
            (None, Some(path)) => ConfigSource::UserDefault(path),
            (None, None) => ConfigSource::Defaults,
        }
    }

    /// The file this source points at.
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigSource::Named(path) | ConfigSource::UserDefault(path) => Some(path),
            ConfigSource::Defaults => None,
        }
    }
}

/// `<config_dir>/marketscan/config.toml`, if the platform has a config
/// directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(PROJECT_NAME).join(CONFIG_FILE))
}

impl MarketscanConfig {
    /// Load and validate configuration from `source`.
    pub fn load(source: &ConfigSource) -> Result<Self> {
        let config = match source {
            ConfigSource::Named(path) => {
                if !path.is_file() {
                    return Err(Error::config(format!(
                        "Config file not found at {}",
                        path.display()
                    )));
                }
                Self::from_file(path)?
            }
            ConfigSource::UserDefault(path) if path.is_file() => Self::from_file(path)?,
            _ => {
                tracing::debug!("No config file found, using defaults");
                Self::default()
            }
        };
        config.validate()?;
        Ok(config)
    }

    /// Read a config file without validating it.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(e, path))?;
        tracing::debug!(path = %path.display(), "Loaded config file");
        Self::parse(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))
    }

    /// Parse TOML text.
    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Reject values no stage can work with.
    pub fn validate(&self) -> Result<()> {
        if self.paths.data_dir.as_os_str().is_empty() {
            return Err(Error::config("paths.data_dir must not be empty"));
        }
        if self.paths.results_dir.as_os_str().is_empty() {
            return Err(Error::config("paths.results_dir must not be empty"));
        }
        self.pipeline.validate()
    }

    /// Serialize as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// The artifact store these paths describe.
    pub fn store(&self) -> ArtifactStore {
        ArtifactStore::new(&self.paths.data_dir, &self.paths.results_dir)
    }
}
