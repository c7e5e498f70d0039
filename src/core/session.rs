//! Session context injected into every network operation

use crate::utils::error::{InputError, Result};
use std::fmt;

/// Credentials and identity of the signed-in account.
///
/// The host obtains these from wherever it keeps them and passes the session
/// explicitly; nothing in this crate reads ambient storage.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Session {
    /// Sent as `Authorization: Bearer ...`
    pub bearer_token: String,
    /// Sent in the request body as `authToken` on send endpoints
    pub auth_token: String,
    pub client_id: Option<String>,
    pub user_name: Option<String>,
}

impl Session {
    pub fn new<B: Into<String>, A: Into<String>>(bearer_token: B, auth_token: A) -> Self {
        Self {
            bearer_token: bearer_token.into(),
            auth_token: auth_token.into(),
            client_id: None,
            user_name: None,
        }
    }

    pub fn with_client_id<S: Into<String>>(mut self, client_id: S) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    pub fn with_user_name<S: Into<String>>(mut self, user_name: S) -> Self {
        self.user_name = Some(user_name.into());
        self
    }

    /// Client id required by the dashboard endpoints
    pub fn require_client_id(&self) -> Result<&str> {
        self.client_id
            .as_deref()
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| InputError::MissingClientId.into())
    }
}

// Tokens never end up in logs.
impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("bearer_token", &"[REDACTED]")
            .field("auth_token", &"[REDACTED]")
            .field("client_id", &self.client_id)
            .field("user_name", &self.user_name)
            .finish()
    }
}
