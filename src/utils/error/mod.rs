//! Error handling for the portal client
//!
//! This module defines all error types used throughout the crate and the
//! conversion of errors into user-facing notifications.

#![allow(missing_docs)]

mod helpers;
mod notification;
mod types;

pub use notification::Notification;
pub use types::{InputError, PortalError, Result};
