//! Core portal client implementation

use crate::config::ApiConfig;
use crate::core::session::Session;
use crate::utils::error::{PortalError, Result};
use reqwest::{RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

/// Endpoint paths relative to the configured base URL
pub mod endpoints {
    pub const SEND_BULK: &str = "/sms/send-bulk";
    pub const SEND_SINGLE: &str = "/sms/send-single";
    pub const SMS_STATS: &str = "/sms/stats";
    pub const SMS_HISTORY: &str = "/sms/history";
    pub const CLIENT_INFO: &str = "/client/info";
    pub const PACKAGE_HISTORY: &str = "/packages/history";
    pub const INVOICES: &str = "/invoices";
    pub const TICKETS: &str = "/tickets";
    pub const SUBMIT_TICKET: &str = "/tickets/submit";
    pub const PACKAGES: &str = "/packages";
    pub const REGISTER: &str = "/clients/register";
}

/// HTTP client for the messaging platform
#[derive(Debug, Clone)]
pub struct PortalClient {
    pub(crate) config: ApiConfig,
    pub(crate) http_client: reqwest::Client,
}

impl PortalClient {
    /// Create a new client
    pub fn new(config: ApiConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout_duration())
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| PortalError::config(format!("Failed to create HTTP client: {}", e)))?;

        info!("PortalClient created for {}", config.base_url);

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Get configuration
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub(crate) fn url(&self, path: &str) -> String {
        self.config.endpoint(path)
    }

    pub(crate) fn authorized_post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        session: &Session,
        body: &B,
    ) -> RequestBuilder {
        let url = self.url(path);
        debug!("POST {}", url);
        self.http_client
            .post(url)
            .bearer_auth(&session.bearer_token)
            .json(body)
    }

    pub(crate) fn authorized_get(&self, path: &str, session: &Session) -> RequestBuilder {
        let url = self.url(path);
        debug!("GET {}", url);
        self.http_client.get(url).bearer_auth(&session.bearer_token)
    }

    /// Send a dashboard request and decode its JSON body
    pub(crate) async fn fetch_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.send().await?;
        let response = ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

/// Turn a non-2xx response into `PortalError::Api` carrying the body text
pub(crate) async fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = if body.trim().is_empty() {
        format!("Request failed with status {}", status.as_u16())
    } else {
        body
    };
    Err(PortalError::api(status.as_u16(), message))
}
