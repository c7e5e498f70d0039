//! Send form limits

use super::*;
use serde::{Deserialize, Serialize};

/// Limits applied by the send pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendingConfig {
    /// Message text is truncated to this many characters
    #[serde(default = "default_max_message_length")]
    pub max_message_length: usize,
    /// How many parsed recipients are echoed back for review
    #[serde(default = "default_preview_size")]
    pub preview_size: usize,
}

impl Default for SendingConfig {
    fn default() -> Self {
        Self {
            max_message_length: default_max_message_length(),
            preview_size: default_preview_size(),
        }
    }
}

impl SendingConfig {
    pub fn merge(mut self, other: Self) -> Self {
        if other.max_message_length != default_max_message_length() {
            self.max_message_length = other.max_message_length;
        }
        if other.preview_size != default_preview_size() {
            self.preview_size = other.preview_size;
        }
        self
    }
}
