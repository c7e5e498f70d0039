//! Core portal logic
//!
//! Everything here is independent of the HTTP transport: the send pipeline
//! and the dashboard views talk to the platform through the traits in
//! [`crate::sdk::api`].

pub mod batch;
pub mod catalog;
pub mod dashboard;
pub mod draft;
pub mod pipeline;
pub mod recipients;
pub mod session;
