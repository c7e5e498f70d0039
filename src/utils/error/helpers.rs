//! Helper functions for creating specific error types

use super::types::PortalError;

/// Helper functions for creating specific errors
impl PortalError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn submission<S: Into<String>>(message: S) -> Self {
        Self::Submission(message.into())
    }

    pub fn api<S: Into<String>>(status: u16, message: S) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Text suitable for showing to the user, without the category prefix
    pub fn user_message(&self) -> String {
        match self {
            Self::Parse(msg) | Self::Validation(msg) | Self::Submission(msg) => msg.clone(),
            Self::Input(rule) => rule.to_string(),
            Self::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// Input errors are warnings the user can fix in the form
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::Input(_))
    }
}
