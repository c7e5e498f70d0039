//! Configuration validators

use super::base_url::validate_base_url;
use super::trait_def::Validate;
use crate::config::models::*;
use tracing::debug;

impl Validate for PortalConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating portal configuration");

        self.api.validate()?;
        self.sending.validate()?;
        self.logging.validate()?;

        debug!("Portal configuration validation completed");
        Ok(())
    }
}

impl Validate for ApiConfig {
    fn validate(&self) -> Result<(), String> {
        validate_base_url(&self.base_url, "API base URL")?;

        if self.timeout == 0 {
            return Err("API timeout must be greater than 0".to_string());
        }

        if self.timeout > 3600 {
            return Err("API timeout should not exceed 1 hour".to_string());
        }

        if self.user_agent.trim().is_empty() {
            return Err("User agent cannot be empty".to_string());
        }

        Ok(())
    }
}

impl Validate for SendingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.max_message_length == 0 {
            return Err("Max message length must be greater than 0".to_string());
        }

        if self.preview_size == 0 {
            return Err("Preview size must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        tracing_subscriber::EnvFilter::try_new(&self.level)
            .map(|_| ())
            .map_err(|e| format!("Invalid log level '{}': {}", self.level, e))
    }
}
