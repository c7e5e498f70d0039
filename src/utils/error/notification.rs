//! User-facing notifications built from pipeline outcomes

use super::types::PortalError;
use serde::{Deserialize, Serialize};

pub const SUCCESS_TITLE: &str = "Success";
pub const ERROR_TITLE: &str = "Error";
pub const NOTICE_TITLE: &str = "Notice";

/// Payload for a dismissible alert shown by the host shell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn new<T: Into<String>, M: Into<String>>(title: T, message: M) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn success<M: Into<String>>(message: M) -> Self {
        Self::new(SUCCESS_TITLE, message)
    }

    pub fn from_error(error: &PortalError) -> Self {
        let title = if error.is_input_error() {
            NOTICE_TITLE
        } else {
            ERROR_TITLE
        };
        Self::new(title, error.user_message())
    }

    pub fn is_error(&self) -> bool {
        self.title == ERROR_TITLE
    }
}

impl From<&PortalError> for Notification {
    fn from(error: &PortalError) -> Self {
        Self::from_error(error)
    }
}
