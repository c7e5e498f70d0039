//! Platform SDK
//!
//! API traits used by the core modules plus the reqwest-backed client that
//! implements them.

pub mod api;
pub mod client;
pub mod types;

// Re-exports for convenience
pub use api::{DashboardApi, MessagingApi, RegistrationApi};
pub use client::PortalClient;
pub use types::*;
