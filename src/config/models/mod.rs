//! Configuration data models
//!
//! This module defines all configuration structures used by the portal client.

#![allow(missing_docs)]

pub mod api;
pub mod logging;
pub mod portal;
pub mod sending;

// Re-export all configuration types
pub use api::*;
pub use logging::*;
pub use portal::*;
pub use sending::*;

/// Default API base URL
pub fn default_base_url() -> String {
    "http://127.0.0.1:8080".to_string()
}

/// Default timeout in seconds
pub fn default_timeout() -> u64 {
    30
}

/// Default user agent sent with every request
pub fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

/// Longest message body accepted by the send form
pub fn default_max_message_length() -> usize {
    600
}

/// Number of recipients shown in the upload preview
pub fn default_preview_size() -> usize {
    5
}

/// Default log filter directive
pub fn default_log_level() -> String {
    "info".to_string()
}
