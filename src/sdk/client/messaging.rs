//! Message dispatch

use super::client::{PortalClient, endpoints};
use crate::core::batch::{BulkSendRequest, OutboundMessage, SingleSendRequest};
use crate::core::session::Session;
use crate::sdk::api::MessagingApi;
use crate::sdk::types::SendReceipt;
use crate::utils::error::{PortalError, Result};
use async_trait::async_trait;
use reqwest::RequestBuilder;
use tracing::{debug, info, warn};

pub const BULK_FAILURE_MESSAGE: &str = "Failed to send messages from file";
pub const SINGLE_FAILURE_MESSAGE: &str = "Failed to send message";

impl PortalClient {
    /// Send once; never retried. The server text is surfaced verbatim on failure.
    async fn dispatch(
        &self,
        request: RequestBuilder,
        recipients: usize,
        generic_failure: &str,
    ) -> Result<SendReceipt> {
        let response = request.send().await.map_err(|e| {
            warn!("Send request failed before a response arrived: {}", e);
            PortalError::submission(generic_failure)
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Send request rejected with status {}", status.as_u16());
            let message = if body.trim().is_empty() {
                generic_failure.to_string()
            } else {
                body
            };
            return Err(PortalError::Submission(message));
        }

        let body = response.bytes().await.unwrap_or_default();
        let parsed = serde_json::from_slice(&body).ok();
        if parsed.is_none() && !body.is_empty() {
            debug!("Send response body is not JSON ({} bytes)", body.len());
        }

        info!("Send request accepted for {} recipients", recipients);
        Ok(SendReceipt {
            recipients,
            response: parsed,
        })
    }
}

#[async_trait]
impl MessagingApi for PortalClient {
    async fn send_bulk(
        &self,
        session: &Session,
        messages: &[OutboundMessage],
    ) -> Result<SendReceipt> {
        let body = BulkSendRequest {
            auth_token: session.auth_token.clone(),
            messages: messages.to_vec(),
        };
        let request = self.authorized_post(endpoints::SEND_BULK, session, &body);
        self.dispatch(request, messages.len(), BULK_FAILURE_MESSAGE)
            .await
    }

    async fn send_single(
        &self,
        session: &Session,
        phone_number: &str,
        message: &str,
    ) -> Result<SendReceipt> {
        let body = SingleSendRequest {
            auth_token: session.auth_token.clone(),
            phone_number: phone_number.to_string(),
            message: message.to_string(),
        };
        let request = self.authorized_post(endpoints::SEND_SINGLE, session, &body);
        self.dispatch(request, 1, SINGLE_FAILURE_MESSAGE).await
    }
}
