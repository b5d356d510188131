use std::path::PathBuf;
use std::time::Duration;

use crate::domain::validation::ValidationError;
use crate::domain::value::{
    AppToken, Priority, Sound, UnixTimestamp, UserKey, validate_device_names,
};

/// Maximum message body length, in Unicode code points.
pub const MESSAGE_MAX_LENGTH: usize = 1024;
/// Maximum title length, in Unicode code points.
pub const MESSAGE_TITLE_MAX_LENGTH: usize = 250;
/// Maximum supplementary URL length, in Unicode code points.
pub const MESSAGE_URL_MAX_LENGTH: usize = 512;
/// Maximum URL title length, in Unicode code points.
pub const MESSAGE_URL_TITLE_MAX_LENGTH: usize = 100;
/// Maximum attachment size in bytes (2.5 MiB).
pub const MESSAGE_MAX_ATTACHMENT_BYTES: u64 = 2_621_440;

pub const GLANCE_TITLE_MAX_LENGTH: usize = 100;
pub const GLANCE_TEXT_MAX_LENGTH: usize = 100;
pub const GLANCE_SUBTEXT_MAX_LENGTH: usize = 100;

fn char_len(value: &str) -> usize {
    value.chars().count()
}

fn check_length(
    value: &str,
    max: usize,
    err: fn(usize, usize) -> ValidationError,
) -> Result<(), ValidationError> {
    let actual = char_len(value);
    if actual > max {
        return Err(err(max, actual));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Image attached to a notification, sent as a multipart file part.
pub enum Attachment {
    /// Read from disk right before the request is sent.
    Path(PathBuf),
    /// In-memory buffer provided by the caller.
    Bytes(Vec<u8>),
}

impl Attachment {
    fn validate(&self) -> Result<(), ValidationError> {
        let size = match self {
            Self::Path(path) => {
                let invalid = || ValidationError::InvalidAttachmentPath {
                    path: path.display().to_string(),
                };
                let metadata = std::fs::metadata(path).map_err(|_| invalid())?;
                if !metadata.is_file() {
                    return Err(invalid());
                }
                metadata.len()
            }
            Self::Bytes(bytes) => bytes.len() as u64,
        };
        check_attachment_size(size)
    }
}

pub(crate) fn check_attachment_size(size: u64) -> Result<(), ValidationError> {
    if size == 0 {
        return Err(ValidationError::MissingAttachment);
    }
    if size > MESSAGE_MAX_ATTACHMENT_BYTES {
        return Err(ValidationError::AttachmentTooLarge {
            max: MESSAGE_MAX_ATTACHMENT_BYTES,
            actual: size,
        });
    }
    Ok(())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// A notification sent through `messages.json`.
///
/// Only `message` is required; every other field is emitted when it differs
/// from its default. Call [`Notification::validate`] to check the payload
/// against the service limits (the client does this before any I/O).
pub struct Notification {
    pub message: String,
    pub title: String,
    pub priority: Priority,
    pub url: String,
    pub url_title: String,
    pub timestamp: Option<UnixTimestamp>,
    /// Retry interval for emergency priority (minimum accepted by the service is 30s).
    pub retry: Option<Duration>,
    /// Expiration for emergency priority (maximum accepted by the service is 3h).
    pub expire: Option<Duration>,
    pub callback_url: String,
    /// Comma-separated device names; empty sends to all devices.
    pub device_name: String,
    pub sound: Option<Sound>,
    pub html: bool,
    pub monospace: bool,
    pub attachment: Option<Attachment>,
}

impl Notification {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Default::default()
        }
    }

    pub fn with_title(message: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    /// Attach an image file that is read when the request is encoded.
    pub fn attach_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.attachment = Some(Attachment::Path(path.into()));
        self
    }

    /// Attach an in-memory image.
    pub fn attach_bytes(mut self, bytes: impl Into<Vec<u8>>) -> Self {
        self.attachment = Some(Attachment::Bytes(bytes.into()));
        self
    }

    /// Validate the payload. Rules are checked in a fixed order and the first
    /// violation is returned.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.message.is_empty() {
            return Err(ValidationError::MessageEmpty);
        }
        check_length(&self.message, MESSAGE_MAX_LENGTH, |max, actual| {
            ValidationError::MessageTooLong { max, actual }
        })?;
        check_length(&self.title, MESSAGE_TITLE_MAX_LENGTH, |max, actual| {
            ValidationError::TitleTooLong { max, actual }
        })?;
        check_length(&self.url, MESSAGE_URL_MAX_LENGTH, |max, actual| {
            ValidationError::UrlTooLong { max, actual }
        })?;
        check_length(&self.url_title, MESSAGE_URL_TITLE_MAX_LENGTH, |max, actual| {
            ValidationError::UrlTitleTooLong { max, actual }
        })?;

        if self.url.is_empty() && !self.url_title.is_empty() {
            return Err(ValidationError::EmptyUrl);
        }

        if !self.priority.is_known() {
            return Err(ValidationError::InvalidPriority {
                actual: self.priority.level(),
            });
        }

        if self.priority.is_emergency() {
            let is_set = |value: Option<Duration>| value.is_some_and(|d| !d.is_zero());
            if !is_set(self.retry) || !is_set(self.expire) {
                return Err(ValidationError::MissingEmergencyParameter);
            }
        }

        if !self.device_name.is_empty() {
            validate_device_names(&self.device_name)?;
        }

        if let Some(attachment) = &self.attachment {
            attachment.validate()?;
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Update for the Glances companion display (`glances.json`).
pub struct GlanceUpdate {
    /// Description of the data being shown, such as "Widgets Sold".
    pub title: String,
    /// Main line of data, used on most screens.
    pub text: String,
    /// Second line of data.
    pub subtext: String,
    /// Shown on smaller screens; may be negative.
    pub count: Option<i64>,
    /// Shown on some screens as a progress bar, `0..=100`.
    pub percent: Option<i32>,
    /// Comma-separated device names; empty updates all devices.
    pub device_name: String,
}

impl GlanceUpdate {
    fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.text.is_empty()
            && self.subtext.is_empty()
            && self.count.is_none()
            && self.percent.is_none()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.is_empty() {
            return Err(ValidationError::GlanceEmpty);
        }
        check_length(&self.title, GLANCE_TITLE_MAX_LENGTH, |max, actual| {
            ValidationError::GlanceTitleTooLong { max, actual }
        })?;
        check_length(&self.text, GLANCE_TEXT_MAX_LENGTH, |max, actual| {
            ValidationError::GlanceTextTooLong { max, actual }
        })?;
        check_length(&self.subtext, GLANCE_SUBTEXT_MAX_LENGTH, |max, actual| {
            ValidationError::GlanceSubtextTooLong { max, actual }
        })?;

        if let Some(percent) = self.percent {
            if !(0..=100).contains(&percent) {
                return Err(ValidationError::GlancePercentOutOfRange { actual: percent });
            }
        }

        if !self.device_name.is_empty() {
            validate_device_names(&self.device_name)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
/// A validated notification addressed from an application to a recipient.
pub struct SendNotification {
    token: AppToken,
    user: UserKey,
    notification: Notification,
}

impl SendNotification {
    /// Validate the sender token, the recipient key and then the payload,
    /// stopping at the first failure.
    pub fn new(
        token: impl Into<String>,
        user: impl Into<String>,
        notification: Notification,
    ) -> Result<Self, ValidationError> {
        let token = AppToken::new(token)?;
        let user = UserKey::new(user)?;
        notification.validate()?;
        Ok(Self {
            token,
            user,
            notification,
        })
    }

    pub fn token(&self) -> &AppToken {
        &self.token
    }

    pub fn user(&self) -> &UserKey {
        &self.user
    }

    pub fn notification(&self) -> &Notification {
        &self.notification
    }
}

#[derive(Debug, Clone)]
/// A validated glance update addressed from an application to a recipient.
pub struct SendGlance {
    token: AppToken,
    user: UserKey,
    update: GlanceUpdate,
}

impl SendGlance {
    pub fn new(
        token: impl Into<String>,
        user: impl Into<String>,
        update: GlanceUpdate,
    ) -> Result<Self, ValidationError> {
        let token = AppToken::new(token)?;
        let user = UserKey::new(user)?;
        update.validate()?;
        Ok(Self {
            token,
            user,
            update,
        })
    }

    pub fn token(&self) -> &AppToken {
        &self.token
    }

    pub fn user(&self) -> &UserKey {
        &self.user
    }

    pub fn update(&self) -> &GlanceUpdate {
        &self.update
    }
}
