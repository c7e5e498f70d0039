//! Top level portal configuration

use super::*;
use crate::utils::error::{PortalError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const ENV_API_URL: &str = "SMS_PORTAL_API_URL";
pub const ENV_TIMEOUT: &str = "SMS_PORTAL_TIMEOUT";
pub const ENV_USER_AGENT: &str = "SMS_PORTAL_USER_AGENT";
pub const ENV_MAX_MESSAGE_LENGTH: &str = "SMS_PORTAL_MAX_MESSAGE_LENGTH";
pub const ENV_PREVIEW_SIZE: &str = "SMS_PORTAL_PREVIEW_SIZE";
pub const ENV_LOG_LEVEL: &str = "SMS_PORTAL_LOG_LEVEL";
pub const ENV_LOG_JSON: &str = "SMS_PORTAL_LOG_JSON";

/// Portal configuration as stored on disk
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortalConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub sending: SendingConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl PortalConfig {
    /// Merge configurations (other takes precedence)
    pub fn merge(self, other: Self) -> Self {
        Self {
            api: self.api.merge(other.api),
            sending: self.sending.merge(other.sending),
            logging: self.logging.merge(other.logging),
        }
    }

    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        debug!("Loading configuration from environment variables");
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut config = Self::default();

        if let Some(url) = get(ENV_API_URL) {
            config.api.base_url = url;
        }
        if let Some(timeout) = get(ENV_TIMEOUT) {
            config.api.timeout = timeout
                .trim()
                .parse()
                .map_err(|e| PortalError::config(format!("Invalid timeout: {}", e)))?;
        }
        if let Some(agent) = get(ENV_USER_AGENT) {
            config.api.user_agent = agent;
        }
        if let Some(max) = get(ENV_MAX_MESSAGE_LENGTH) {
            config.sending.max_message_length = max
                .trim()
                .parse()
                .map_err(|e| PortalError::config(format!("Invalid max message length: {}", e)))?;
        }
        if let Some(size) = get(ENV_PREVIEW_SIZE) {
            config.sending.preview_size = size
                .trim()
                .parse()
                .map_err(|e| PortalError::config(format!("Invalid preview size: {}", e)))?;
        }
        if let Some(level) = get(ENV_LOG_LEVEL) {
            config.logging.level = level;
        }
        if let Some(json) = get(ENV_LOG_JSON) {
            config.logging.json = matches!(
                json.trim().to_lowercase().as_str(),
                "true" | "1" | "yes" | "on"
            );
        }

        Ok(config)
    }
}
