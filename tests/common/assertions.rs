//! Custom test assertions

use sms_portal::Notification;

/// Assertions for notifications
pub trait NotificationAssertions {
    fn assert_success(&self, message: &str);

    fn assert_error(&self, message: &str);

    fn assert_notice(&self);
}

impl NotificationAssertions for Option<&Notification> {
    fn assert_success(&self, message: &str) {
        let notification = self.expect("Expected a notification, got none");
        assert_eq!(notification.title, "Success", "{:?}", notification);
        assert_eq!(notification.message, message);
    }

    fn assert_error(&self, message: &str) {
        let notification = self.expect("Expected a notification, got none");
        assert!(notification.is_error(), "Expected an error, got {:?}", notification);
        assert_eq!(notification.message, message);
    }

    fn assert_notice(&self) {
        let notification = self.expect("Expected a notification, got none");
        assert_eq!(notification.title, "Notice", "{:?}", notification);
    }
}
