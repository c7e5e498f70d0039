//! Support tickets

use crate::core::session::Session;
use crate::sdk::api::DashboardApi;
use crate::sdk::types::{NewTicket, Ticket};
use crate::utils::error::{InputError, PortalError, Result};
use std::cmp::Reverse;
use tracing::{info, warn};

pub const TICKET_FAILURE_MESSAGE: &str = "An error occurred while sending the ticket";

#[derive(Debug, Clone, Default)]
pub struct SupportView {
    tickets: Vec<Ticket>,
}

impl SupportView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tickets, newest first
    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn open_count(&self) -> usize {
        self.tickets.iter().filter(|t| t.is_open()).count()
    }

    pub async fn refresh<A>(&mut self, api: &A, session: &Session) -> Result<&[Ticket]>
    where
        A: DashboardApi + ?Sized,
    {
        session.require_client_id()?;
        match api.tickets(session).await {
            Ok(mut tickets) => {
                // Unparseable timestamps sort last
                tickets.sort_by_key(|t| Reverse(t.created_at()));
                self.tickets = tickets;
                Ok(&self.tickets)
            }
            Err(e) => {
                warn!("Failed to load tickets: {}", e);
                self.tickets.clear();
                Err(e)
            }
        }
    }

    /// Open a ticket, then reload the list.
    ///
    /// Submission and the reload are separate outcomes: once the platform has
    /// accepted the ticket a failed reload only empties the list.
    pub async fn submit_ticket<A>(
        &mut self,
        api: &A,
        session: &Session,
        title: &str,
        description: &str,
    ) -> Result<()>
    where
        A: DashboardApi + ?Sized,
    {
        let (title, description) = (title.trim(), description.trim());
        if title.is_empty() || description.is_empty() {
            return Err(InputError::IncompleteTicket.into());
        }

        let ticket = NewTicket {
            client_id: session.require_client_id()?.to_string(),
            title: title.to_string(),
            description: description.to_string(),
        };
        let accepted = match api.submit_ticket(session, &ticket).await {
            Ok(answer) => answer.accepted(),
            Err(e) => {
                warn!("Ticket submission failed: {}", e);
                false
            }
        };
        if !accepted {
            return Err(PortalError::submission(TICKET_FAILURE_MESSAGE));
        }

        info!("Ticket \"{}\" submitted", ticket.title);
        if let Err(e) = self.refresh(api, session).await {
            warn!("Ticket list reload failed after submission: {}", e);
        }
        Ok(())
    }
}
