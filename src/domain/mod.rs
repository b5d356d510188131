//! Domain layer: strong types with validation and invariants (no network I/O).

mod request;
mod response;
mod validation;
mod value;

pub(crate) use request::check_attachment_size;
pub use request::{
    Attachment, GLANCE_SUBTEXT_MAX_LENGTH, GLANCE_TEXT_MAX_LENGTH, GLANCE_TITLE_MAX_LENGTH,
    GlanceUpdate, MESSAGE_MAX_ATTACHMENT_BYTES, MESSAGE_MAX_LENGTH, MESSAGE_TITLE_MAX_LENGTH,
    MESSAGE_URL_MAX_LENGTH, MESSAGE_URL_TITLE_MAX_LENGTH, Notification, SendGlance,
    SendNotification,
};
pub use response::{
    ApiErrors, DeliveryResponse, QuotaLimit, ReceiptDetails, RecipientDetails,
    SendNotificationResponse, Status,
};
pub use validation::ValidationError;
pub(crate) use value::redact;
pub use value::{AppToken, Priority, Receipt, Sound, UnixTimestamp, UserKey};

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    const TOKEN: &str = "uQiRzpo4DXghDmr9QzzfQu27cmVRsG";
    const USER: &str = "gznej3rKEVAvPUxu9vvNnqpmZpokzF";

    #[test]
    fn fully_populated_notification_is_valid() {
        let notification = Notification {
            message: "My awesome message".to_owned(),
            title: "My title".to_owned(),
            priority: Priority::EMERGENCY,
            url: "http://google.com".to_owned(),
            url_title: "Google".to_owned(),
            timestamp: Some(UnixTimestamp::new(1_700_000_000)),
            retry: Some(Duration::from_secs(60)),
            expire: Some(Duration::from_secs(3600)),
            callback_url: "http://yourapp.com/callback".to_owned(),
            device_name: "SuperDevice".to_owned(),
            sound: Some(Sound::COSMIC),
            html: true,
            monospace: false,
            attachment: None,
        };
        assert!(SendNotification::new(TOKEN, USER, notification).is_ok());
    }

    #[test]
    fn glance_request_validates_identities_first() {
        let err = SendGlance::new(TOKEN, "", GlanceUpdate::default()).unwrap_err();
        assert_eq!(err, ValidationError::EmptyRecipientToken);

        let err = SendGlance::new(TOKEN, USER, GlanceUpdate::default()).unwrap_err();
        assert_eq!(err, ValidationError::GlanceEmpty);
    }

    #[test]
    fn attachment_size_ceiling_is_inclusive() {
        assert!(check_attachment_size(MESSAGE_MAX_ATTACHMENT_BYTES).is_ok());
        assert!(check_attachment_size(MESSAGE_MAX_ATTACHMENT_BYTES + 1).is_err());
        assert_eq!(
            check_attachment_size(0),
            Err(ValidationError::MissingAttachment)
        );
    }
}
