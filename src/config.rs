use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// BLS verification is on unless a batch opts out.
pub const DEFAULT_BLS_ACTIVE: bool = true;

fn default_bls_active() -> bool {
    DEFAULT_BLS_ACTIVE
}

/// Parameters shared by every case of one generation batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// General category of the produced vectors (e.g. `sanity`)
    pub runner_name: String,

    /// Specialization within the runner (e.g. `blocks`)
    pub handler_name: String,

    /// Fork the deferred cases run against. When several forks apply, the latest one.
    pub fork_name: String,

    #[serde(default = "default_bls_active")]
    pub bls_active: bool,

    /// Fail discovery for sources without a name instead of logging `<unnamed>`
    #[serde(default)]
    pub require_source_name: bool,
}

impl GeneratorConfig {
    pub fn new(
        runner_name: impl Into<String>,
        handler_name: impl Into<String>,
        fork_name: impl Into<String>,
    ) -> Self {
        Self {
            runner_name: runner_name.into(),
            handler_name: handler_name.into(),
            fork_name: fork_name.into(),
            bls_active: DEFAULT_BLS_ACTIVE,
            require_source_name: false,
        }
    }

    pub fn with_bls_active(mut self, bls_active: bool) -> Self {
        self.bls_active = bls_active;
        self
    }

    pub fn with_require_source_name(mut self, require: bool) -> Self {
        self.require_source_name = require;
        self
    }

    /// Reject empty batch names. Runs on every parse, load and generation pass.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.runner_name.is_empty() {
            return Err(ConfigError::empty_field("runner_name"));
        }
        if self.handler_name.is_empty() {
            return Err(ConfigError::empty_field("handler_name"));
        }
        if self.fork_name.is_empty() {
            return Err(ConfigError::empty_field("fork_name"));
        }
        Ok(())
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_yaml::from_str(content).map_err(|e| ConfigError::parse("yaml", e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(content).map_err(|e| ConfigError::parse("json", e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file, picking the format from its extension.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::read(path, e))?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&content),
            Some("json") => Self::from_json_str(&content),
            _ => Err(ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}
