//! Dashboard view integration tests

#[cfg(test)]
mod tests {
    use crate::common::{SessionFactory, TestPortal};
    use chrono::NaiveDate;
    use serde_json::json;
    use sms_portal::{
        HistoryView, InputError, PackagesView, PortalError, StatisticsView, SupportView,
    };
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, ResponseTemplate};

    #[tokio::test]
    async fn test_statistics_year_and_month() {
        let portal = TestPortal::start().await;
        Mock::given(method("POST"))
            .and(path("/client/info"))
            .and(body_json(json!({"clientId": "1007", "userName": "owner"})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"balance": 120.5, "senderID": "Shop"})),
            )
            .expect(1)
            .mount(&portal.server)
            .await;
        Mock::given(method("POST"))
            .and(path("/sms/stats"))
            .and(body_json(json!({"clientId": "1007", "year": 2025})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"label": 2, "totalCount": 40},
                {"label": 7, "totalCount": 2}
            ])))
            .mount(&portal.server)
            .await;
        Mock::given(method("POST"))
            .and(path("/sms/stats"))
            .and(body_json(json!({"clientId": "1007", "year": 2025, "month": 2})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"label": 1, "totalCount": 30, "libyanaCount": 20, "madarCount": 10},
                {"label": 14, "totalCount": 10, "libyanaCount": 4, "madarCount": 6}
            ])))
            .mount(&portal.server)
            .await;

        let session = SessionFactory::create();
        let mut view = StatisticsView::new(2025);
        view.refresh(&portal.client, &session).await.unwrap();

        assert_eq!(view.monthly().len(), 12);
        assert_eq!(view.monthly()[1].total_count, 40);
        assert_eq!(view.monthly()[0].total_count, 0);
        assert_eq!(view.year_total(), 42);
        assert_eq!(view.client_info().unwrap().sender_id.as_deref(), Some("Shop"));

        view.select_month(&portal.client, &session, 2).await.unwrap();
        assert_eq!(view.daily().len(), 31);
        assert_eq!(view.daily()[13].madar_count, 6);
        assert_eq!(view.carrier_totals(), (24, 16));
    }

    #[tokio::test]
    async fn test_history_defaults_and_filter() {
        let portal = TestPortal::start().await;
        Mock::given(method("POST"))
            .and(path("/sms/history"))
            .and(body_json(json!({
                "clientId": "1007",
                "phoneNo": "",
                "fromDate": "2025-06-14",
                "toDate": "2025-06-16"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"phoneNo": "218911111111", "msg": "Your code is 4411", "pageCount": 1},
                {"phoneNo": "218922222222", "msg": "Weekend offer on all items", "pageCount": 2}
            ])))
            .expect(1)
            .mount(&portal.server)
            .await;

        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let mut view = HistoryView::new(today);
        view.refresh(&portal.client, &SessionFactory::create())
            .await
            .unwrap();
        assert_eq!(view.total_pages(), 3);

        view.filter_mut().phone = "2222".to_string();
        let visible: Vec<_> = view.visible().collect();
        assert_eq!(visible.len(), 1);
        assert_eq!(view.total_pages(), 2);
    }

    #[tokio::test]
    async fn test_packages_require_client_id() {
        let portal = TestPortal::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(0)
            .mount(&portal.server)
            .await;

        let mut view = PackagesView::new();
        let error = view
            .refresh(&portal.client, &SessionFactory::anonymous())
            .await
            .unwrap_err();
        assert!(matches!(
            error,
            PortalError::Input(InputError::MissingClientId)
        ));
    }

    #[tokio::test]
    async fn test_ticket_submit_refreshes_list() {
        let portal = TestPortal::start().await;
        Mock::given(method("POST"))
            .and(path("/tickets/submit"))
            .and(body_json(json!({
                "clientId": "1007",
                "title": "Sender name",
                "description": "Please renew our sender ID"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
            .expect(1)
            .mount(&portal.server)
            .await;
        Mock::given(method("POST"))
            .and(path("/tickets"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 1, "title": "Old", "status": "closed", "created": "2025-01-02T08:00:00"},
                {"id": 2, "title": "Sender name", "status": "open", "created": "2025-06-15T09:30:00"}
            ])))
            .expect(1)
            .mount(&portal.server)
            .await;

        let mut view = SupportView::new();
        view.submit_ticket(
            &portal.client,
            &SessionFactory::create(),
            "Sender name",
            "Please renew our sender ID",
        )
        .await
        .unwrap();

        assert_eq!(view.tickets()[0].id, "2");
        assert_eq!(view.open_count(), 1);
    }
}
