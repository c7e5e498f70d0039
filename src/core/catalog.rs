//! Package catalog, price quotes and registration form checks

use crate::sdk::api::RegistrationApi;
use crate::sdk::types::{CatalogPackage, RegistrationRequest, ServiceKind};
use crate::utils::error::{InputError, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

pub const TEST_PACKAGE_ID: &str = "test";
pub const TEST_PACKAGE_NAME: &str = "Trial package";
pub const TEST_PACKAGE_QTY: u64 = 50;
pub const TEST_SENDER_ID: &str = "13201";

/// Yearly sender ID fee added to every paid A2P registration
pub const A2P_SENDER_FEE: f64 = 500.0;
pub const A2P_CUSTOM_MIN: u64 = 250_000;
pub const ADS_CUSTOM_MIN: u64 = 1_100_000;

fn test_package() -> CatalogPackage {
    CatalogPackage {
        package_id: TEST_PACKAGE_ID.to_string(),
        package_name: TEST_PACKAGE_NAME.to_string(),
        kind: Some(ServiceKind::A2p),
        package_qty: TEST_PACKAGE_QTY,
        package_price: 0.0,
    }
}

fn custom_minimum(kind: ServiceKind) -> u64 {
    match kind {
        ServiceKind::A2p => A2P_CUSTOM_MIN,
        ServiceKind::Ads => ADS_CUSTOM_MIN,
    }
}

/// Packages grouped by service line.
///
/// The last package of each group is the custom package: the applicant types
/// the message count and no fixed price applies.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PackageCatalog {
    a2p: Vec<CatalogPackage>,
    ads: Vec<CatalogPackage>,
}

impl PackageCatalog {
    /// Group packages, with the free trial package leading the A2P list.
    ///
    /// Duplicate ids keep the position of their first occurrence and the
    /// contents of their last. Packages with an unknown type flag are left out.
    pub fn from_packages(packages: Vec<CatalogPackage>) -> Self {
        let (a2p, ads): (Vec<_>, Vec<_>) = packages
            .into_iter()
            .filter(|p| {
                if p.kind.is_none() {
                    debug!("Skipping package {} with unknown type", p.package_id);
                }
                p.kind.is_some()
            })
            .partition(|p| p.kind == Some(ServiceKind::A2p));

        let mut merged: Vec<CatalogPackage> = Vec::new();
        for package in std::iter::once(test_package()).chain(a2p).chain(ads) {
            match merged
                .iter_mut()
                .find(|p| p.package_id == package.package_id)
            {
                Some(slot) => *slot = package,
                None => merged.push(package),
            }
        }

        let (a2p, ads) = merged
            .into_iter()
            .partition(|p| p.kind == Some(ServiceKind::A2p));
        Self { a2p, ads }
    }

    /// Fetch the public package list
    pub async fn load<A>(api: &A) -> Result<Self>
    where
        A: RegistrationApi + ?Sized,
    {
        let packages = api.packages().await?;
        info!("Loaded {} catalog packages", packages.len());
        Ok(Self::from_packages(packages))
    }

    pub fn packages(&self, kind: ServiceKind) -> &[CatalogPackage] {
        match kind {
            ServiceKind::A2p => &self.a2p,
            ServiceKind::Ads => &self.ads,
        }
    }

    pub fn find(&self, kind: ServiceKind, package_id: &str) -> Option<&CatalogPackage> {
        self.packages(kind)
            .iter()
            .find(|p| p.package_id == package_id)
    }

    pub fn custom_package_id(&self, kind: ServiceKind) -> Option<&str> {
        self.packages(kind).last().map(|p| p.package_id.as_str())
    }

    pub fn is_custom(&self, kind: ServiceKind, package_id: &str) -> bool {
        self.custom_package_id(kind) == Some(package_id)
    }

    /// Pre-filled selection for a package, as the form shows it after picking
    pub fn select(&self, kind: ServiceKind, package_id: &str) -> Option<ServiceSelection> {
        let package = self.find(kind, package_id)?;
        let selection = if package.package_id == TEST_PACKAGE_ID {
            ServiceSelection {
                package_id: Some(package.package_id.clone()),
                message_count: Some(TEST_PACKAGE_QTY),
                sender_id: TEST_SENDER_ID.to_string(),
            }
        } else if self.is_custom(kind, package_id) {
            ServiceSelection::with_package(package_id)
        } else {
            ServiceSelection {
                message_count: Some(package.package_qty),
                ..ServiceSelection::with_package(package_id)
            }
        };
        Some(selection)
    }

    /// Fixed price of a selection; custom packages have none
    pub fn package_price(&self, kind: ServiceKind, selection: &ServiceSelection) -> Option<f64> {
        let package_id = selection.package_id.as_deref()?;
        if self.is_custom(kind, package_id) {
            return None;
        }
        self.find(kind, package_id)
            .map(|p| p.package_qty as f64 * p.package_price)
    }

    /// Total shown to the applicant
    pub fn quote(&self, form: &RegistrationForm) -> f64 {
        let mut total = 0.0;
        if let Some(a2p) = &form.a2p {
            total += self.package_price(ServiceKind::A2p, a2p).unwrap_or(0.0);
            if !a2p.is_test_package() {
                total += A2P_SENDER_FEE;
            }
        }
        if let Some(ads) = &form.ads {
            total += self.package_price(ServiceKind::Ads, ads).unwrap_or(0.0);
        }
        debug!("Quoted registration at {}", total);
        total
    }
}

/// Chosen package for one service line
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceSelection {
    pub package_id: Option<String>,
    /// Typed by the applicant for custom packages, pre-filled otherwise
    pub message_count: Option<u64>,
    pub sender_id: String,
}

impl ServiceSelection {
    pub fn with_package<S: Into<String>>(package_id: S) -> Self {
        Self {
            package_id: Some(package_id.into()),
            ..Self::default()
        }
    }

    pub fn is_test_package(&self) -> bool {
        self.package_id.as_deref() == Some(TEST_PACKAGE_ID)
    }
}

/// Self-registration form; a `None` service is not requested
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationForm {
    pub client_name: String,
    pub phone_no: String,
    pub email: String,
    pub company_name: String,
    pub activity: String,
    pub a2p: Option<ServiceSelection>,
    pub ads: Option<ServiceSelection>,
}

impl RegistrationForm {
    fn service(&self, kind: ServiceKind) -> Option<&ServiceSelection> {
        match kind {
            ServiceKind::A2p => self.a2p.as_ref(),
            ServiceKind::Ads => self.ads.as_ref(),
        }
    }

    /// First failing rule, checking A2P before ADS
    pub fn validate(&self, catalog: &PackageCatalog) -> std::result::Result<(), InputError> {
        if self.a2p.is_none() && self.ads.is_none() {
            return Err(InputError::NoServiceSelected);
        }
        for kind in [ServiceKind::A2p, ServiceKind::Ads] {
            if let Some(selection) = self.service(kind) {
                check_selection(catalog, kind, selection)?;
            }
        }
        Ok(())
    }

    /// Validate, then build the request body
    pub fn to_request(&self, catalog: &PackageCatalog) -> Result<RegistrationRequest> {
        self.validate(catalog)?;

        let name = |kind: ServiceKind| {
            self.service(kind)
                .and_then(|s| s.package_id.as_deref())
                .and_then(|id| catalog.find(kind, id))
                .map(|p| p.package_name.clone())
        };
        let price = |kind: ServiceKind| {
            self.service(kind)
                .and_then(|s| catalog.package_price(kind, s))
        };

        Ok(RegistrationRequest {
            client_name: self.client_name.clone(),
            phone_no: self.phone_no.clone(),
            email: self.email.clone(),
            company_name: self.company_name.clone(),
            activity: self.activity.clone(),
            a2p_package_name: name(ServiceKind::A2p),
            a2p_message_count: self.a2p.as_ref().and_then(|s| s.message_count),
            a2p_package_price: price(ServiceKind::A2p),
            a2p_sender_id: self.a2p.as_ref().map(|s| s.sender_id.clone()),
            ads_package_name: name(ServiceKind::Ads),
            ads_message_count: self.ads.as_ref().and_then(|s| s.message_count),
            ads_package_price: price(ServiceKind::Ads),
            ads_sender_id: self.ads.as_ref().map(|s| s.sender_id.clone()),
        })
    }
}

fn check_selection(
    catalog: &PackageCatalog,
    kind: ServiceKind,
    selection: &ServiceSelection,
) -> std::result::Result<(), InputError> {
    let service = kind.label();
    let Some(package_id) = selection.package_id.as_deref().filter(|id| !id.is_empty()) else {
        return Err(InputError::MissingPackage(service));
    };

    if catalog.is_custom(kind, package_id) {
        let minimum = custom_minimum(kind);
        if selection.message_count.is_none_or(|count| count < minimum) {
            return Err(InputError::BelowCustomMinimum { service, minimum });
        }
    }

    if selection.sender_id.trim().is_empty() {
        return Err(InputError::MissingSenderId(service));
    }
    Ok(())
}
