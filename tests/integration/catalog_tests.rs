//! Catalog and registration integration tests

#[cfg(test)]
mod tests {
    use crate::common::TestPortal;
    use serde_json::json;
    use sms_portal::core::catalog::{A2P_SENDER_FEE, TEST_PACKAGE_ID};
    use sms_portal::sdk::types::ServiceKind;
    use sms_portal::{PackageCatalog, PortalError, RegistrationApi, RegistrationForm};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, ResponseTemplate};

    async fn mount_packages(portal: &TestPortal) {
        Mock::given(method("GET"))
            .and(path("/packages"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"packageID": 11, "packageName": "A2P 10k", "packageTypeFlag": 0, "packageQty": 10000, "packagePrice": 0.04},
                {"packageID": 12, "packageName": "A2P custom", "packageTypeFlag": 0},
                {"packageID": 21, "packageName": "ADS 100k", "packageTypeFlag": 1, "packageQty": 100000, "packagePrice": 0.01},
                {"packageID": 22, "packageName": "ADS custom", "packageTypeFlag": 1}
            ])))
            .mount(&portal.server)
            .await;
    }

    fn form(catalog: &PackageCatalog) -> RegistrationForm {
        RegistrationForm {
            client_name: "Salem Ali".to_string(),
            phone_no: "218912345678".to_string(),
            email: "salem@example.com".to_string(),
            company_name: "Salem Trading".to_string(),
            activity: "Retail".to_string(),
            a2p: catalog.select(ServiceKind::A2p, "11"),
            ads: None,
        }
    }

    #[tokio::test]
    async fn test_catalog_load_and_quote() {
        let portal = TestPortal::start().await;
        mount_packages(&portal).await;

        let catalog = PackageCatalog::load(&portal.client).await.unwrap();
        let a2p = catalog.packages(ServiceKind::A2p);
        assert_eq!(a2p[0].package_id, TEST_PACKAGE_ID);
        assert_eq!(a2p.len(), 3);
        assert!(catalog.is_custom(ServiceKind::A2p, "12"));

        let quote = catalog.quote(&form(&catalog));
        assert!((quote - (10_000.0 * 0.04 + A2P_SENDER_FEE)).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_unknown_package_type_skipped() {
        let portal = TestPortal::start().await;
        Mock::given(method("GET"))
            .and(path("/packages"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"packageID": 11, "packageName": "A2P 10k", "packageTypeFlag": 0, "packageQty": 10000, "packagePrice": 0.04},
                {"packageID": 31, "packageName": "Voice", "packageTypeFlag": 2, "packageQty": 500, "packagePrice": 0.2},
                {"packageID": 21, "packageName": "ADS 100k", "packageTypeFlag": 1, "packageQty": 100000, "packagePrice": 0.01}
            ])))
            .mount(&portal.server)
            .await;

        let catalog = PackageCatalog::load(&portal.client).await.unwrap();
        let a2p: Vec<&str> = catalog
            .packages(ServiceKind::A2p)
            .iter()
            .map(|p| p.package_id.as_str())
            .collect();
        let ads: Vec<&str> = catalog
            .packages(ServiceKind::Ads)
            .iter()
            .map(|p| p.package_id.as_str())
            .collect();
        assert_eq!(a2p, [TEST_PACKAGE_ID, "11"]);
        assert_eq!(ads, ["21"]);
    }

    #[tokio::test]
    async fn test_registration_posted_without_token() {
        let portal = TestPortal::start().await;
        mount_packages(&portal).await;
        Mock::given(method("POST"))
            .and(path("/clients/register"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&portal.server)
            .await;

        let catalog = PackageCatalog::load(&portal.client).await.unwrap();
        let mut form = form(&catalog);
        if let Some(a2p) = form.a2p.as_mut() {
            a2p.sender_id = "SalemShop".to_string();
        }
        let request = form.to_request(&catalog).unwrap();
        portal.client.register(&request).await.unwrap();

        let requests = portal.server.received_requests().await.unwrap();
        let register = requests
            .iter()
            .find(|r| r.url.path() == "/clients/register")
            .unwrap();
        assert!(!register.headers.contains_key("authorization"));

        let body: serde_json::Value = serde_json::from_slice(&register.body).unwrap();
        assert_eq!(body["a2pPackageName"], "A2P 10k");
        assert_eq!(body["a2pMessageCount"], 10000);
        assert_eq!(body["a2pSenderId"], "SalemShop");
        assert_eq!(body["adsPackageName"], serde_json::Value::Null);
    }

    #[tokio::test]
    async fn test_registration_failure_text_surfaced() {
        let portal = TestPortal::start().await;
        Mock::given(method("POST"))
            .and(path("/clients/register"))
            .respond_with(ResponseTemplate::new(400).set_body_string("Email already registered"))
            .mount(&portal.server)
            .await;

        let error = portal
            .client
            .register(&Default::default())
            .await
            .unwrap_err();
        assert!(matches!(error, PortalError::Submission(_)));
        assert_eq!(error.user_message(), "Email already registered");
    }
}
