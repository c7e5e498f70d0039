//! Dashboard endpoints

use super::client::{PortalClient, endpoints};
use crate::core::session::Session;
use crate::sdk::api::DashboardApi;
use crate::sdk::types::*;
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
impl DashboardApi for PortalClient {
    async fn client_info(&self, session: &Session) -> Result<ClientInfo> {
        let body = ClientInfoQuery {
            client_id: session.require_client_id()?.to_string(),
            user_name: session.user_name.clone(),
        };
        self.fetch_json(self.authorized_post(endpoints::CLIENT_INFO, session, &body))
            .await
    }

    async fn sms_stats(&self, session: &Session, query: &StatsQuery) -> Result<Vec<SmsStatPoint>> {
        self.fetch_json(self.authorized_post(endpoints::SMS_STATS, session, query))
            .await
    }

    async fn message_history(
        &self,
        session: &Session,
        query: &HistoryQuery,
    ) -> Result<Vec<HistoryEntry>> {
        self.fetch_json(self.authorized_post(endpoints::SMS_HISTORY, session, query))
            .await
    }

    async fn package_history(&self, session: &Session) -> Result<Vec<PackageRecord>> {
        let body = ClientQuery {
            client_id: session.require_client_id()?.to_string(),
        };
        self.fetch_json(self.authorized_post(endpoints::PACKAGE_HISTORY, session, &body))
            .await
    }

    async fn invoices(&self, session: &Session) -> Result<Vec<Invoice>> {
        let client_id = session.require_client_id()?;
        let request = self
            .authorized_get(endpoints::INVOICES, session)
            .query(&[("clientId", client_id), ("flag", "2")]);
        self.fetch_json(request).await
    }

    async fn tickets(&self, session: &Session) -> Result<Vec<Ticket>> {
        let body = ClientQuery {
            client_id: session.require_client_id()?.to_string(),
        };
        self.fetch_json(self.authorized_post(endpoints::TICKETS, session, &body))
            .await
    }

    async fn submit_ticket(
        &self,
        session: &Session,
        ticket: &NewTicket,
    ) -> Result<TicketSubmission> {
        self.fetch_json(self.authorized_post(endpoints::SUBMIT_TICKET, session, ticket))
            .await
    }
}
