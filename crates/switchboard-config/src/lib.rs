//! Switchboard configuration system.
//!
//! TOML-based configuration with validation. Every section has defaults,
//! so an empty or partial file is a valid config.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use switchboard_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{SwitchboardConfig, CONFIG_SCHEMA_VERSION};
pub use toml_loader::{load_default, load_from_path};

use std::path::Path;

use switchboard_common::ConfigError;

/// Load config from the platform default path and validate it.
pub fn load_config() -> Result<SwitchboardConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from an explicit path and validate it.
///
/// Unlike [`load_from_path`], a config that fails validation is an error.
pub fn load_config_from(path: &Path) -> Result<SwitchboardConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &SwitchboardConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
