//! SDK data types
//!
//! Request and response bodies of the dashboard, catalog and registration
//! endpoints. Send bodies live in `core::batch`.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

/// Outcome of an accepted send request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SendReceipt {
    /// Number of recipients in the accepted request
    pub recipients: usize,
    /// Response body, when the server returned JSON
    pub response: Option<serde_json::Value>,
}

/// Account balance and sender information
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientInfo {
    pub balance: Option<f64>,
    pub spend: Option<f64>,
    pub spend_today: Option<f64>,
    pub spend_yesterday: Option<f64>,
    pub finish_contract: Option<String>,
    #[serde(rename = "senderID")]
    pub sender_id: Option<String>,
    pub sender_expire: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientInfoQuery {
    pub client_id: String,
    pub user_name: Option<String>,
}

/// Statistics request; `month` switches from a yearly to a daily breakdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsQuery {
    pub client_id: String,
    pub year: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,
}

/// One bucket of the statistics response; `label` is a month or a day number
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SmsStatPoint {
    pub label: u32,
    pub total_count: u64,
    pub libyana_count: u64,
    pub madar_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryQuery {
    pub client_id: String,
    pub phone_no: String,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
}

/// A sent message as recorded by the platform
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HistoryEntry {
    pub phone_no: Option<String>,
    #[serde(rename = "msg")]
    pub message: Option<String>,
    pub page_count: u32,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientQuery {
    pub client_id: String,
}

/// A package purchased by the account
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PackageRecord {
    pub id_seq: Option<i64>,
    pub package_name: Option<String>,
    pub package_size: Option<u64>,
    pub created_contract: Option<String>,
    pub finish_contract: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Invoice {
    pub invoice_no: Option<String>,
    pub invoice_date: Option<String>,
    pub package_name: Option<String>,
    pub package_qty: Option<u64>,
    pub package_price: Option<f64>,
    pub payment_date: Option<String>,
}

/// A support ticket
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ticket {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: String,
    pub created: Option<String>,
    pub updated: Option<String>,
}

impl Ticket {
    pub fn is_open(&self) -> bool {
        self.status.eq_ignore_ascii_case("open")
    }

    pub fn created_at(&self) -> Option<NaiveDateTime> {
        self.created.as_deref().and_then(parse_timestamp)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTicket {
    pub client_id: String,
    pub title: String,
    pub description: String,
}

/// Ticket submission answer; either flag signals acceptance
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TicketSubmission {
    pub success: Option<bool>,
    pub response: Option<i64>,
}

impl TicketSubmission {
    pub fn accepted(&self) -> bool {
        self.success == Some(true) || self.response == Some(1)
    }
}

/// Service line a package belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ServiceKind {
    /// Transactional messages
    A2p,
    /// Advertising campaigns
    Ads,
}

impl ServiceKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::A2p => "A2P",
            Self::Ads => "ADS",
        }
    }
}

impl TryFrom<u8> for ServiceKind {
    type Error = String;

    fn try_from(flag: u8) -> Result<Self, Self::Error> {
        match flag {
            0 => Ok(Self::A2p),
            1 => Ok(Self::Ads),
            other => Err(format!("unknown package type flag {}", other)),
        }
    }
}

impl From<ServiceKind> for u8 {
    fn from(kind: ServiceKind) -> Self {
        match kind {
            ServiceKind::A2p => 0,
            ServiceKind::Ads => 1,
        }
    }
}

/// A package offered in the public catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogPackage {
    #[serde(rename = "packageID", deserialize_with = "id_as_string")]
    pub package_id: String,
    pub package_name: String,
    /// `None` for flags this client does not know
    #[serde(rename = "packageTypeFlag", default, deserialize_with = "known_kind")]
    pub kind: Option<ServiceKind>,
    #[serde(default)]
    pub package_qty: u64,
    #[serde(default)]
    pub package_price: f64,
}

/// Body of the registration request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    pub client_name: String,
    pub phone_no: String,
    pub email: String,
    pub company_name: String,
    pub activity: String,
    pub a2p_package_name: Option<String>,
    pub a2p_message_count: Option<u64>,
    pub a2p_package_price: Option<f64>,
    pub a2p_sender_id: Option<String>,
    pub ads_package_name: Option<String>,
    pub ads_message_count: Option<u64>,
    pub ads_package_price: Option<f64>,
    pub ads_sender_id: Option<String>,
}

/// Accept timestamps with or without an offset
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

/// Ids arrive as numbers or strings depending on the endpoint
fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Null => Ok(String::new()),
        other => Err(serde::de::Error::custom(format!(
            "expected a string or number id, got {}",
            other
        ))),
    }
}

fn known_kind<'de, D>(deserializer: D) -> Result<Option<ServiceKind>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value
        .as_u64()
        .and_then(|flag| u8::try_from(flag).ok())
        .and_then(|flag| ServiceKind::try_from(flag).ok()))
}
