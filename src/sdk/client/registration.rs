//! Public catalog and registration endpoints

use super::client::{PortalClient, ensure_success, endpoints};
use crate::sdk::api::RegistrationApi;
use crate::sdk::types::{CatalogPackage, RegistrationRequest};
use crate::utils::error::{PortalError, Result};
use async_trait::async_trait;
use tracing::info;

#[async_trait]
impl RegistrationApi for PortalClient {
    async fn packages(&self) -> Result<Vec<CatalogPackage>> {
        let request = self.http_client.get(self.url(endpoints::PACKAGES));
        self.fetch_json(request).await
    }

    async fn register(&self, request: &RegistrationRequest) -> Result<()> {
        let response = self
            .http_client
            .post(self.url(endpoints::REGISTER))
            .json(request)
            .send()
            .await?;

        match ensure_success(response).await {
            Ok(_) => {
                info!("Registration request accepted for {}", request.company_name);
                Ok(())
            }
            Err(PortalError::Api { message, .. }) => Err(PortalError::Submission(message)),
            Err(other) => Err(other),
        }
    }
}
