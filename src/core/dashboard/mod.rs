//! Dashboard views
//!
//! Each view owns the data it renders and loads it only when `refresh` is
//! called with an explicit [`Session`](crate::core::session::Session). A failed
//! refresh leaves the view empty and hands the error back to the caller.

mod history;
mod invoices;
mod packages;
mod statistics;
mod support;

pub use history::{HistoryFilter, HistoryView, MASK_VISIBLE_CHARS, mask_message};
pub use invoices::InvoicesView;
pub use packages::PackagesView;
pub use statistics::{DAYS_IN_SERIES, MONTHS_IN_SERIES, StatisticsView, fill_series};
pub use support::{SupportView, TICKET_FAILURE_MESSAGE};
