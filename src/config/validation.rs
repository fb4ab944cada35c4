//! Configuration validation module
//!
//! This module provides validation functions for the bridge configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{BridgeError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_api_config(&settings.api)?;
    validate_pages_config(&settings.pages)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate backend API configuration
fn validate_api_config(config: &super::ApiConfig) -> Result<()> {
    if config.base_url.is_empty() {
        return Err(BridgeError::Config(
            "API base URL is required".to_string()
        ));
    }

    let url = url::Url::parse(&config.base_url)
        .map_err(|e| BridgeError::Config(format!("Invalid API base URL {}: {}", config.base_url, e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(BridgeError::Config(
            format!("API base URL must use http or https, got {}", url.scheme())
        ));
    }

    if config.timeout_seconds == Some(0) {
        return Err(BridgeError::Config(
            "API timeout must be greater than 0 when set".to_string()
        ));
    }

    Ok(())
}

/// Validate navigation targets
fn validate_pages_config(config: &super::PagesConfig) -> Result<()> {
    if config.after_login.is_empty() {
        return Err(BridgeError::Config(
            "Page after login is required".to_string()
        ));
    }

    if config.after_logout.is_empty() {
        return Err(BridgeError::Config(
            "Page after logout is required".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(BridgeError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(BridgeError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    if config.file_name.is_empty() {
        return Err(BridgeError::Config(
            "Log file name is required".to_string()
        ));
    }

    Ok(())
}
