//! Configuration I/O (YAML loading and export)

use super::engine_config::{EngineConfig, ParallelConfig};
use super::error::{ConfigError, ConfigResult};
use super::validation::Validatable;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Supported YAML schema versions
pub const SUPPORTED_VERSIONS: &[u32] = &[1];

/// YAML Schema v1
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigExportV1 {
    /// Schema version (always 1 for v1)
    #[serde(default)]
    pub version: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parallel: Option<ParallelConfig>,
}

impl EngineConfig {
    /// Load and validate a configuration file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&content)?;
        debug!("Loaded engine configuration from {}", path.display());
        Ok(config)
    }

    /// Parse and validate a configuration document
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let export: ConfigExportV1 = serde_yaml::from_str(content)?;

        let version = export.version.ok_or(ConfigError::MissingVersion)?;
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(ConfigError::UnsupportedVersion {
                found: version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        let config = EngineConfig {
            parallel: export.parallel.unwrap_or_default(),
        };
        config.validate()?;
        debug!(
            "Validated {} configuration (version {})",
            config.config_name(),
            version
        );
        Ok(config)
    }

    /// Export as a v1 YAML document
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let export = ConfigExportV1 {
            version: Some(1),
            parallel: Some(self.parallel.clone()),
        };
        serde_yaml::to_string(&export).map_err(ConfigError::Yaml)
    }
}
