//! Sent message history

use crate::core::session::Session;
use crate::sdk::api::DashboardApi;
use crate::sdk::types::{HistoryEntry, HistoryQuery};
use crate::utils::error::Result;
use chrono::{Days, NaiveDate};
use tracing::{debug, warn};

/// Characters of a message left readable in the history table
pub const MASK_VISIBLE_CHARS: usize = 10;
const MASK_WIDTH: usize = 24;

/// Hide a message body behind its first few characters
pub fn mask_message(message: &str) -> String {
    if message.is_empty() {
        return String::new();
    }
    let visible: String = message.chars().take(MASK_VISIBLE_CHARS).collect();
    format!("{} {}", visible, "*".repeat(MASK_WIDTH))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryFilter {
    /// Substring matched against recipient numbers; empty matches everything
    pub phone: String,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
}

impl HistoryFilter {
    /// Yesterday through tomorrow, relative to `today`
    pub fn around(today: NaiveDate) -> Self {
        Self {
            phone: String::new(),
            from_date: today.checked_sub_days(Days::new(1)).unwrap_or(today),
            to_date: today.checked_add_days(Days::new(1)).unwrap_or(today),
        }
    }

    pub fn matches(&self, entry: &HistoryEntry) -> bool {
        self.phone.is_empty()
            || entry
                .phone_no
                .as_deref()
                .is_some_and(|phone| phone.contains(&self.phone))
    }
}

#[derive(Debug, Clone)]
pub struct HistoryView {
    filter: HistoryFilter,
    entries: Vec<HistoryEntry>,
}

impl HistoryView {
    pub fn new(today: NaiveDate) -> Self {
        Self::with_filter(HistoryFilter::around(today))
    }

    pub fn with_filter(filter: HistoryFilter) -> Self {
        Self {
            filter,
            entries: Vec::new(),
        }
    }

    pub fn filter(&self) -> &HistoryFilter {
        &self.filter
    }

    pub fn filter_mut(&mut self) -> &mut HistoryFilter {
        &mut self.filter
    }

    pub async fn refresh<A>(&mut self, api: &A, session: &Session) -> Result<()>
    where
        A: DashboardApi + ?Sized,
    {
        let query = HistoryQuery {
            client_id: session.require_client_id()?.to_string(),
            phone_no: self.filter.phone.clone(),
            from_date: self.filter.from_date,
            to_date: self.filter.to_date,
        };
        match api.message_history(session, &query).await {
            Ok(entries) => {
                debug!(
                    "Loaded {} history entries between {} and {}",
                    entries.len(),
                    query.from_date,
                    query.to_date
                );
                self.entries = entries;
                Ok(())
            }
            Err(e) => {
                warn!("Failed to load message history: {}", e);
                self.entries.clear();
                Err(e)
            }
        }
    }

    /// Entries that pass the local phone filter
    pub fn visible(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().filter(|e| self.filter.matches(e))
    }

    /// Billed pages across the visible entries
    pub fn total_pages(&self) -> u64 {
        self.visible().map(|e| u64::from(e.page_count)).sum()
    }
}
