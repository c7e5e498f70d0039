//! Outbound message batches and send request bodies

use serde::{Deserialize, Serialize};

/// One message addressed to one recipient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboundMessage {
    pub phone_number: String,
    pub message: String,
    /// Empty: the server applies the account's default sender
    #[serde(rename = "senderID")]
    pub sender_id: String,
}

impl OutboundMessage {
    pub fn new<P: Into<String>, M: Into<String>>(phone_number: P, message: M) -> Self {
        Self {
            phone_number: phone_number.into(),
            message: message.into(),
            sender_id: String::new(),
        }
    }
}

/// Body of `POST /sms/send-bulk`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkSendRequest {
    pub auth_token: String,
    pub messages: Vec<OutboundMessage>,
}

/// Body of `POST /sms/send-single`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SingleSendRequest {
    pub auth_token: String,
    pub phone_number: String,
    pub message: String,
}

/// One message per recipient, all sharing the same text
pub fn build_batch(recipients: &[String], message: &str) -> Vec<OutboundMessage> {
    recipients
        .iter()
        .map(|phone| OutboundMessage::new(phone.as_str(), message))
        .collect()
}
