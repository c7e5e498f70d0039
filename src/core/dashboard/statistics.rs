//! Yearly and monthly message statistics

use crate::core::session::Session;
use crate::sdk::api::DashboardApi;
use crate::sdk::types::{ClientInfo, SmsStatPoint, StatsQuery};
use crate::utils::error::{InputError, Result};
use tracing::{debug, warn};

pub const MONTHS_IN_SERIES: u32 = 12;
pub const DAYS_IN_SERIES: u32 = 31;

/// One point per label in `1..=len`; labels the server omitted count as zero
pub fn fill_series(points: &[SmsStatPoint], len: u32) -> Vec<SmsStatPoint> {
    (1..=len)
        .map(|label| {
            points
                .iter()
                .find(|p| p.label == label)
                .cloned()
                .unwrap_or(SmsStatPoint {
                    label,
                    ..SmsStatPoint::default()
                })
        })
        .collect()
}

#[derive(Debug, Clone)]
pub struct StatisticsView {
    year: i32,
    client_info: Option<ClientInfo>,
    monthly: Vec<SmsStatPoint>,
    selected_month: Option<u32>,
    daily: Vec<SmsStatPoint>,
}

impl StatisticsView {
    pub fn new(year: i32) -> Self {
        Self {
            year,
            client_info: None,
            monthly: Vec::new(),
            selected_month: None,
            daily: Vec::new(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Change the year; the series stay empty until the next refresh
    pub fn set_year(&mut self, year: i32) {
        self.year = year;
        self.monthly.clear();
        self.selected_month = None;
        self.daily.clear();
    }

    pub fn client_info(&self) -> Option<&ClientInfo> {
        self.client_info.as_ref()
    }

    pub fn monthly(&self) -> &[SmsStatPoint] {
        &self.monthly
    }

    pub fn selected_month(&self) -> Option<u32> {
        self.selected_month
    }

    pub fn daily(&self) -> &[SmsStatPoint] {
        &self.daily
    }

    /// Sum of the monthly series
    pub fn year_total(&self) -> u64 {
        self.monthly.iter().map(|p| p.total_count).sum()
    }

    /// `(libyana, madar)` totals of the selected month
    pub fn carrier_totals(&self) -> (u64, u64) {
        self.daily.iter().fold((0, 0), |(libyana, madar), p| {
            (libyana + p.libyana_count, madar + p.madar_count)
        })
    }

    /// Load the account summary (first call only) and the 12-month series
    pub async fn refresh<A>(&mut self, api: &A, session: &Session) -> Result<()>
    where
        A: DashboardApi + ?Sized,
    {
        let client_id = session.require_client_id()?.to_string();

        if self.client_info.is_none() {
            match api.client_info(session).await {
                Ok(info) => self.client_info = Some(info),
                Err(e) => warn!("Failed to load client info: {}", e),
            }
        }

        let query = StatsQuery {
            client_id,
            year: self.year,
            month: None,
        };
        match api.sms_stats(session, &query).await {
            Ok(points) => {
                debug!("Loaded {} monthly stat points for {}", points.len(), self.year);
                self.monthly = fill_series(&points, MONTHS_IN_SERIES);
                Ok(())
            }
            Err(e) => {
                warn!("Failed to load statistics for {}: {}", self.year, e);
                self.monthly.clear();
                Err(e)
            }
        }
    }

    /// Load the per-carrier daily series of one month
    pub async fn select_month<A>(&mut self, api: &A, session: &Session, month: u32) -> Result<()>
    where
        A: DashboardApi + ?Sized,
    {
        if !(1..=MONTHS_IN_SERIES).contains(&month) {
            return Err(InputError::InvalidMonth(month).into());
        }
        let client_id = session.require_client_id()?.to_string();

        self.selected_month = Some(month);
        let query = StatsQuery {
            client_id,
            year: self.year,
            month: Some(month),
        };
        match api.sms_stats(session, &query).await {
            Ok(points) => {
                self.daily = fill_series(&points, DAYS_IN_SERIES);
                Ok(())
            }
            Err(e) => {
                warn!("Failed to load statistics for {}-{}: {}", self.year, month, e);
                self.daily.clear();
                Err(e)
            }
        }
    }

    pub fn clear_month(&mut self) {
        self.selected_month = None;
        self.daily.clear();
    }
}
