use crate::core::session::Session;
use crate::sdk::api::DashboardApi;
use crate::sdk::types::PackageRecord;
use crate::utils::error::Result;
use tracing::warn;

/// Packages purchased by the account
#[derive(Debug, Clone, Default)]
pub struct PackagesView {
    packages: Vec<PackageRecord>,
}

impl PackagesView {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn refresh<A>(&mut self, api: &A, session: &Session) -> Result<&[PackageRecord]>
    where
        A: DashboardApi + ?Sized,
    {
        session.require_client_id()?;
        match api.package_history(session).await {
            Ok(packages) => {
                self.packages = packages;
                Ok(&self.packages)
            }
            Err(e) => {
                warn!("Failed to load package history: {}", e);
                self.packages.clear();
                Err(e)
            }
        }
    }

    pub fn packages(&self) -> &[PackageRecord] {
        &self.packages
    }

    /// Total message allowance across all purchased packages
    pub fn total_size(&self) -> u64 {
        self.packages.iter().filter_map(|p| p.package_size).sum()
    }
}
