//! Portal HTTP client
//!
//! `PortalClient` implements every API trait over reqwest.

mod client;
mod dashboard;
mod messaging;
mod registration;


pub use client::{PortalClient, endpoints};
pub use messaging::{BULK_FAILURE_MESSAGE, SINGLE_FAILURE_MESSAGE};
