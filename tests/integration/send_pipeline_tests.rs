//! Send pipeline integration tests
//!
//! Spreadsheet upload through to the send request, with the platform mocked.

#[cfg(test)]
mod tests {
    use crate::common::assertions::NotificationAssertions;
    use crate::common::{SessionFactory, SpreadsheetFactory, TestPortal};
    use serde_json::json;
    use sms_portal::config::SendingConfig;
    use sms_portal::core::recipients::{INVALID_ROWS_MESSAGE, PARSE_ERROR_MESSAGE};
    use sms_portal::sdk::client::BULK_FAILURE_MESSAGE;
    use sms_portal::{InputError, PortalClient, PortalError, SendPhase, SendPipeline};
    use std::time::Duration;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, ResponseTemplate};

    const NUMBERS: [&str; 3] = ["218911111111", "218922222222", "218933333333"];

    fn pipeline(portal: &TestPortal) -> SendPipeline<PortalClient> {
        let mut pipeline = SendPipeline::new(portal.client.clone(), SendingConfig::default());
        pipeline.set_policy_accepted(true);
        pipeline.set_bulk_mode(true);
        pipeline.set_message("Hello");
        pipeline
    }

    // ==================== Bulk path ====================

    #[tokio::test]
    async fn test_three_row_spreadsheet_sends_one_batch() {
        let portal = TestPortal::start().await;
        Mock::given(method("POST"))
            .and(path("/sms/send-bulk"))
            .and(header("authorization", "Bearer test-bearer"))
            .and(body_json(json!({
                "authToken": "test-account",
                "messages": [
                    {"phoneNumber": "218911111111", "message": "Hello", "senderID": ""},
                    {"phoneNumber": "218922222222", "message": "Hello", "senderID": ""},
                    {"phoneNumber": "218933333333", "message": "Hello", "senderID": ""}
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "queued"})))
            .expect(1)
            .mount(&portal.server)
            .await;

        let file = SpreadsheetFactory::to_file(&SpreadsheetFactory::numbers(&NUMBERS));
        let mut pipeline = pipeline(&portal);
        assert_eq!(pipeline.load_recipient_file(file.path()).await.unwrap(), 3);
        assert_eq!(pipeline.preview(), NUMBERS);

        let receipt = pipeline.submit(&SessionFactory::create()).await.unwrap();
        assert_eq!(receipt.recipients, 3);
        assert_eq!(receipt.response, Some(json!({"status": "queued"})));

        pipeline
            .notification()
            .assert_success("Messages sent successfully (3 numbers)");
        assert_eq!(pipeline.total_numbers(), 0);
        assert!(pipeline.draft().message.is_empty());
        assert_eq!(pipeline.phase(), SendPhase::Idle);
    }

    #[tokio::test]
    async fn test_full_list_sent_beyond_preview() {
        let portal = TestPortal::start().await;
        Mock::given(method("POST"))
            .and(path("/sms/send-bulk"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&portal.server)
            .await;

        let numbers: Vec<String> = (0..8).map(|i| format!("21891000000{}", i)).collect();
        let refs: Vec<&str> = numbers.iter().map(String::as_str).collect();
        let mut pipeline = pipeline(&portal);
        pipeline
            .load_recipient_bytes("list.xlsx", SpreadsheetFactory::numbers(&refs))
            .unwrap();
        assert_eq!(pipeline.preview().len(), 5);

        pipeline.submit(&SessionFactory::create()).await.unwrap();

        let bodies = portal.received_bodies().await;
        assert_eq!(bodies[0]["messages"].as_array().unwrap().len(), 8);
        assert_eq!(bodies[0]["messages"][7]["phoneNumber"], "218910000007");
    }

    #[tokio::test]
    async fn test_blank_row_rejects_whole_file() {
        let portal = TestPortal::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&portal.server)
            .await;

        let bytes =
            SpreadsheetFactory::with_rows(&[Some("218911111111"), None, Some("218933333333")]);
        let mut pipeline = pipeline(&portal);

        let error = pipeline
            .load_recipient_bytes("numbers.xlsx", bytes)
            .unwrap_err();
        assert!(matches!(error, PortalError::Validation(_)));
        pipeline.notification().assert_error(INVALID_ROWS_MESSAGE);
        assert_eq!(pipeline.total_numbers(), 0);

        let error = pipeline.submit(&SessionFactory::create()).await.unwrap_err();
        assert!(matches!(
            error,
            PortalError::Input(InputError::MissingRecipientFile)
        ));
    }

    #[tokio::test]
    async fn test_unreadable_file_reports_parse_error() {
        let portal = TestPortal::start().await;
        let file = SpreadsheetFactory::to_file(b"phone\n218911111111\n");
        let mut pipeline = pipeline(&portal);

        let error = pipeline.load_recipient_file(file.path()).await.unwrap_err();
        assert!(matches!(error, PortalError::Parse(_)));
        pipeline.notification().assert_error(PARSE_ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn test_numeric_cells_become_numbers() {
        let portal = TestPortal::start().await;
        let mut pipeline = pipeline(&portal);

        pipeline
            .load_recipient_bytes(
                "numbers.xlsx",
                SpreadsheetFactory::numeric(&[218911111111.0, 218922222222.0]),
            )
            .unwrap();
        assert_eq!(pipeline.preview(), ["218911111111", "218922222222"]);
    }

    #[tokio::test]
    async fn test_server_error_shown_verbatim_and_draft_kept() {
        let portal = TestPortal::start().await;
        Mock::given(method("POST"))
            .and(path("/sms/send-bulk"))
            .respond_with(ResponseTemplate::new(500).set_body_string("quota exceeded"))
            .expect(1)
            .mount(&portal.server)
            .await;

        let mut pipeline = pipeline(&portal);
        pipeline
            .load_recipient_bytes("numbers.xlsx", SpreadsheetFactory::numbers(&NUMBERS))
            .unwrap();
        let before = pipeline.view();

        let error = pipeline.submit(&SessionFactory::create()).await.unwrap_err();
        assert!(matches!(error, PortalError::Submission(_)));
        pipeline.notification().assert_error("quota exceeded");

        let after = pipeline.view();
        assert_eq!(after.draft, before.draft);
        assert_eq!(after.preview, before.preview);
        assert_eq!(after.total_numbers, 3);
        assert!(!after.is_sending);
    }

    #[tokio::test]
    async fn test_empty_error_body_uses_generic_message() {
        let portal = TestPortal::start().await;
        Mock::given(method("POST"))
            .and(path("/sms/send-bulk"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&portal.server)
            .await;

        let mut pipeline = pipeline(&portal);
        pipeline
            .load_recipient_bytes("numbers.xlsx", SpreadsheetFactory::numbers(&NUMBERS))
            .unwrap();

        assert!(pipeline.submit(&SessionFactory::create()).await.is_err());
        pipeline.notification().assert_error(BULK_FAILURE_MESSAGE);
    }

    #[tokio::test]
    async fn test_busy_flag_visible_while_request_outstanding() {
        let portal = TestPortal::start().await;
        Mock::given(method("POST"))
            .and(path("/sms/send-bulk"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(300)))
            .mount(&portal.server)
            .await;

        let mut pipeline = pipeline(&portal);
        pipeline
            .load_recipient_bytes("numbers.xlsx", SpreadsheetFactory::numbers(&NUMBERS))
            .unwrap();
        let mut updates = pipeline.subscribe();

        let session = SessionFactory::create();
        let (result, saw_busy) = tokio::join!(pipeline.submit(&session), async {
            updates.wait_for(|view| view.is_sending).await.is_ok()
        });

        assert!(result.is_ok());
        assert!(saw_busy);
        assert!(!updates.borrow().is_sending);
    }

    #[tokio::test]
    async fn test_cancelled_submit_returns_to_idle() {
        let portal = TestPortal::start().await;
        Mock::given(method("POST"))
            .and(path("/sms/send-bulk"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
            .mount(&portal.server)
            .await;

        let mut pipeline = pipeline(&portal);
        pipeline
            .load_recipient_bytes("numbers.xlsx", SpreadsheetFactory::numbers(&NUMBERS))
            .unwrap();
        let updates = pipeline.subscribe();
        let session = SessionFactory::create();

        let cancelled =
            tokio::time::timeout(Duration::from_millis(50), pipeline.submit(&session)).await;
        assert!(cancelled.is_err());

        assert_eq!(pipeline.phase(), SendPhase::Idle);
        assert!(!pipeline.is_sending());
        assert!(!updates.borrow().is_sending);
        assert_eq!(updates.borrow().phase, SendPhase::Idle);
        assert_eq!(pipeline.draft().message, "Hello");
        assert_eq!(pipeline.total_numbers(), 3);

        portal.server.reset().await;
        Mock::given(method("POST"))
            .and(path("/sms/send-bulk"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&portal.server)
            .await;

        let receipt = pipeline.submit(&session).await.unwrap();
        assert_eq!(receipt.recipients, 3);
        pipeline
            .notification()
            .assert_success("Messages sent successfully (3 numbers)");
    }

    // ==================== Single path ====================

    #[tokio::test]
    async fn test_single_recipient_send() {
        let portal = TestPortal::start().await;
        Mock::given(method("POST"))
            .and(path("/sms/send-single"))
            .and(body_json(json!({
                "authToken": "test-account",
                "phoneNumber": "218912345678",
                "message": "Hi"
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&portal.server)
            .await;

        let mut pipeline = SendPipeline::new(portal.client.clone(), SendingConfig::default());
        pipeline.set_policy_accepted(true);
        pipeline.set_phone_number("218912345678");
        pipeline.set_message("Hi");

        pipeline.submit(&SessionFactory::create()).await.unwrap();
        pipeline
            .notification()
            .assert_success("Message sent successfully");
    }

    #[tokio::test]
    async fn test_policy_gate_prevents_request() {
        let portal = TestPortal::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&portal.server)
            .await;

        let mut pipeline = SendPipeline::new(portal.client.clone(), SendingConfig::default());
        pipeline.set_phone_number("218912345678");
        pipeline.set_message("Hi");

        assert!(pipeline.submit(&SessionFactory::create()).await.is_err());
        pipeline.notification().assert_notice();
        assert_eq!(pipeline.draft().message, "Hi");
    }
}
