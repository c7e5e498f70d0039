//! # sms-portal
//!
//! Client library for an SMS messaging platform: bulk sending from
//! spreadsheets, account dashboards and self-registration quotes.
//!
//! ## Features
//!
//! - **Bulk sending**: read recipients from `.xlsx`/`.xls`/`.ods` files and send
//!   one message to all of them in a single request
//! - **Pre-flight checks**: ordered validation with one tagged error per rule
//! - **Dashboards**: statistics, message history, packages, invoices and tickets
//! - **Registration**: package catalog, quotes and form validation
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sms_portal::{Config, PortalClient, SendPipeline, Session};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load(Some("config/sms-portal.yaml")).await?;
//!     let client = PortalClient::new(config.api().clone())?;
//!     let session = Session::new("bearer-token", "account-token");
//!
//!     let mut pipeline = SendPipeline::new(client, *config.sending());
//!     pipeline.set_policy_accepted(true);
//!     pipeline.set_bulk_mode(true);
//!     pipeline.set_message("Hello");
//!     pipeline.load_recipient_file("numbers.xlsx").await?;
//!
//!     let receipt = pipeline.submit(&session).await?;
//!     println!("Sent to {} numbers", receipt.recipients);
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod core;
pub mod sdk;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use core::catalog::{PackageCatalog, RegistrationForm, ServiceSelection};
pub use core::dashboard::{
    HistoryFilter, HistoryView, InvoicesView, PackagesView, StatisticsView, SupportView,
};
pub use core::pipeline::{SendPhase, SendPipeline, SendView};
pub use core::recipients::{RecipientList, parse_recipient_bytes, parse_recipient_file};
pub use core::session::Session;
pub use sdk::{DashboardApi, MessagingApi, PortalClient, RegistrationApi};
pub use utils::error::{InputError, Notification, PortalError, Result};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
