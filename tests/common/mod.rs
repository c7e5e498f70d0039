//! Common test utilities for sms-portal
//!
//! # Usage
//!
//! ```rust
//! use crate::common::{fixtures, server};
//!
//! #[tokio::test]
//! async fn my_test() {
//!     let portal = server::TestPortal::start().await;
//!     let file = fixtures::SpreadsheetFactory::numbers(&["218911111111"]);
//!     // ...
//! }
//! ```

pub mod assertions;

pub use fixtures::{SessionFactory, SpreadsheetFactory};
pub use server::TestPortal;
