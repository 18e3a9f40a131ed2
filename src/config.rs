//! Configuration management for the file manager
//!
//! Loads deployment settings from manager.toml with environment overrides
//! (FILE_MANAGER_* variables), validated after load.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// File-manager deployment settings.
#[derive(Debug, Deserialize, Clone)]
pub struct ManagerConfig {
    /// Root directory all relative file operations resolve against.
    pub root: String,

    /// Glob patterns describing which files count as static assets.
    #[serde(default = "default_asset_patterns")]
    pub asset_patterns: Vec<String>,
}

fn default_asset_patterns() -> Vec<String> {
    vec!["**/*.png".to_string(), "**/*.svg".to_string(), "**/*.css".to_string()]
}

impl ManagerConfig {
    /// Load configuration from manager.toml with environment overrides.
    /// Environment: FILE_MANAGER_ROOT.
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("manager").required(false))
            .add_source(Environment::with_prefix("FILE_MANAGER"))
            .build()?;

        let config: ManagerConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.root.trim().is_empty() {
            return Err(ConfigError::Message("root must not be empty".into()));
        }
        if self.asset_patterns.iter().any(|p| p.trim().is_empty()) {
            return Err(ConfigError::Message(
                "asset_patterns must not contain empty patterns".into(),
            ));
        }
        Ok(())
    }
}
