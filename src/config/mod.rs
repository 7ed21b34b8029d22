mod types;

pub use types::{Config, SeedMessage, ServerConfig};

use crate::error::{PostboxError, Result};
use std::collections::HashSet;
use std::fs;

/// Load configuration from a TOML file
pub fn load_config(path: &str) -> Result<Config> {
    let contents = fs::read_to_string(path).map_err(|e| {
        PostboxError::Config(format!("Failed to read config file '{}': {}", path, e))
    })?;

    let config: Config = toml::from_str(&contents)?;
    validate_seed_messages(&config)?;

    Ok(config)
}

/// Save configuration to a TOML file
pub fn save_config(config: &Config, path: &str) -> Result<()> {
    validate_seed_messages(config)?;

    let toml_string = toml::to_string_pretty(config)?;
    fs::write(path, toml_string).map_err(|e| {
        PostboxError::Config(format!("Failed to write config file '{}': {}", path, e))
    })?;

    Ok(())
}

fn validate_seed_messages(config: &Config) -> Result<()> {
    let mut seen = HashSet::new();

    for message in &config.messages {
        message.validate().map_err(PostboxError::Config)?;

        if !seen.insert(message.id.as_str()) {
            return Err(PostboxError::Config(format!(
                "Duplicate seed message id '{}'",
                message.id
            )));
        }
    }

    Ok(())
}
