//! Utility modules for the portal client
//!
//! - **error**: Error types and user-facing notifications
//! - **logging**: Tracing subscriber setup

pub mod error;
pub mod logging;

pub use error::{InputError, Notification, PortalError, Result};
