//! Remote API seams
//!
//! The pipeline and the dashboard views talk to the platform only through
//! these traits; `PortalClient` is the HTTP implementation.

use super::types::*;
use crate::core::batch::OutboundMessage;
use crate::core::session::Session;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Message dispatch endpoints
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessagingApi: Send + Sync {
    /// Send the whole batch in one request
    async fn send_bulk(&self, session: &Session, messages: &[OutboundMessage])
    -> Result<SendReceipt>;

    /// Send one message to one phone number
    async fn send_single(
        &self,
        session: &Session,
        phone_number: &str,
        message: &str,
    ) -> Result<SendReceipt>;
}

/// Read-mostly dashboard endpoints
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DashboardApi: Send + Sync {
    async fn client_info(&self, session: &Session) -> Result<ClientInfo>;

    async fn sms_stats(&self, session: &Session, query: &StatsQuery) -> Result<Vec<SmsStatPoint>>;

    async fn message_history(
        &self,
        session: &Session,
        query: &HistoryQuery,
    ) -> Result<Vec<HistoryEntry>>;

    async fn package_history(&self, session: &Session) -> Result<Vec<PackageRecord>>;

    async fn invoices(&self, session: &Session) -> Result<Vec<Invoice>>;

    async fn tickets(&self, session: &Session) -> Result<Vec<Ticket>>;

    async fn submit_ticket(&self, session: &Session, ticket: &NewTicket)
    -> Result<TicketSubmission>;
}

/// Public, unauthenticated endpoints
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationApi: Send + Sync {
    async fn packages(&self) -> Result<Vec<CatalogPackage>>;

    async fn register(&self, request: &RegistrationRequest) -> Result<()>;
}
