//! Configuration management for the portal client
//!
//! This module handles loading, validation, and merging of all client configuration.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{PortalError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the portal client
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Portal configuration
    pub portal: PortalConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| PortalError::config(format!("Failed to read config file: {}", e)))?;

        let portal: PortalConfig = serde_yaml::from_str(&content)
            .map_err(|e| PortalError::config(format!("Failed to parse config: {}", e)))?;

        let config = Self { portal };
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables, reading `.env` first when present
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file loaded: {}", e);
        }

        let portal = PortalConfig::from_env()?;
        let config = Self { portal };

        config.validate()?;
        Ok(config)
    }

    /// Load the optional file, then let the environment override it
    pub async fn load<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        let env = Self::from_env()?;
        let config = match path {
            Some(path) => Self::from_file(path).await?.merge(env),
            None => env,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn api(&self) -> &ApiConfig {
        &self.portal.api
    }

    pub fn sending(&self) -> &SendingConfig {
        &self.portal.sending
    }

    pub fn logging(&self) -> &LoggingConfig {
        &self.portal.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        self.portal
            .validate()
            .map_err(|e| PortalError::config(format!("Invalid configuration: {}", e)))
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.portal = self.portal.merge(other.portal);
        self
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.portal)
            .map_err(|e| PortalError::config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
