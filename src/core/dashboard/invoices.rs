use crate::core::session::Session;
use crate::sdk::api::DashboardApi;
use crate::sdk::types::Invoice;
use crate::utils::error::Result;
use tracing::warn;

#[derive(Debug, Clone, Default)]
pub struct InvoicesView {
    invoices: Vec<Invoice>,
}

impl InvoicesView {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn refresh<A>(&mut self, api: &A, session: &Session) -> Result<&[Invoice]>
    where
        A: DashboardApi + ?Sized,
    {
        session.require_client_id()?;
        match api.invoices(session).await {
            Ok(invoices) => {
                self.invoices = invoices;
                Ok(&self.invoices)
            }
            Err(e) => {
                warn!("Failed to load invoices: {}", e);
                self.invoices.clear();
                Err(e)
            }
        }
    }

    pub fn invoices(&self) -> &[Invoice] {
        &self.invoices
    }

    /// Invoices with no recorded payment date
    pub fn unpaid(&self) -> impl Iterator<Item = &Invoice> {
        self.invoices
            .iter()
            .filter(|i| i.payment_date.as_deref().is_none_or(|d| d.trim().is_empty()))
    }
}
