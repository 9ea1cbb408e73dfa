//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use url::Url;

use super::Settings;
use crate::utils::errors::{Result, VenueLensError};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_api_config(&settings.api)?;
    validate_logging_config(&settings.logging)?;
    Ok(())
}

/// Validate API configuration
fn validate_api_config(config: &super::ApiConfig) -> Result<()> {
    if config.base_url.is_empty() {
        return Err(VenueLensError::Config(
            "API base URL is required".to_string(),
        ));
    }

    Url::parse(&config.base_url)
        .map_err(|e| VenueLensError::Config(format!("Invalid API base URL: {}", e)))?;

    if config.timeout_seconds == 0 {
        return Err(VenueLensError::Config(
            "API timeout must be greater than 0".to_string(),
        ));
    }

    if let Some(token) = &config.bearer_token {
        if token.trim().is_empty() {
            return Err(VenueLensError::Config(
                "Bearer token must not be blank when set".to_string(),
            ));
        }
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(VenueLensError::Config(format!(
            "Invalid log level: {}. Must be one of: {}",
            config.level,
            valid_levels.join(", ")
        )));
    }

    if config.file_path.is_empty() {
        return Err(VenueLensError::Config(
            "Log file path is required".to_string(),
        ));
    }

    Ok(())
}
