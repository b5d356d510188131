use std::io;
use std::time::Duration;

use serde::Deserialize;

use super::{FormParams, TransportError, WireBody};
use crate::domain::{
    ApiErrors, AppToken, Attachment, DeliveryResponse, Priority, Receipt, SendNotification,
    Sound, Status, UnixTimestamp, UserKey, ValidationError, check_attachment_size,
};

#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("failed to read attachment {path}: {source}")]
    ReadAttachment {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The attachment changed on disk between validation and encoding.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Clone, Deserialize)]
struct DeliveryJsonResponse {
    status: i64,
    #[serde(default)]
    request: String,
    #[serde(default)]
    errors: Vec<String>,
    #[serde(default)]
    receipt: Option<String>,
}

/// Build the flat field list for `messages.json`.
///
/// Required fields come first; optional fields are emitted only when set.
pub fn encode_notification_form(request: &SendNotification) -> FormParams {
    let notification = request.notification();
    let mut params = vec![
        (
            AppToken::FIELD.to_owned(),
            request.token().as_str().to_owned(),
        ),
        (UserKey::FIELD.to_owned(), request.user().as_str().to_owned()),
        ("message".to_owned(), notification.message.clone()),
        (
            Priority::FIELD.to_owned(),
            notification.priority.level().to_string(),
        ),
    ];

    push_non_empty(&mut params, "title", &notification.title);
    push_non_empty(&mut params, "url", &notification.url);
    push_non_empty(&mut params, "url_title", &notification.url_title);
    if let Some(sound) = notification.sound.as_ref() {
        params.push((Sound::FIELD.to_owned(), sound.as_str().to_owned()));
    }
    push_non_empty(&mut params, "device", &notification.device_name);
    if let Some(timestamp) = notification.timestamp {
        params.push((
            UnixTimestamp::FIELD.to_owned(),
            timestamp.value().to_string(),
        ));
    }
    if notification.html {
        params.push(("html".to_owned(), "1".to_owned()));
    }
    if notification.monospace {
        params.push(("monospace".to_owned(), "1".to_owned()));
    }
    push_non_empty(&mut params, "callback", &notification.callback_url);

    if notification.priority.is_emergency() {
        if let Some(retry) = notification.retry {
            params.push(("retry".to_owned(), format_seconds(retry)));
        }
        if let Some(expire) = notification.expire {
            params.push(("expire".to_owned(), format_seconds(expire)));
        }
    }

    params
}

/// Encode a validated notification, reading the attachment if one was given.
pub fn encode_notification(request: &SendNotification) -> Result<WireBody, EncodeError> {
    let fields = encode_notification_form(request);
    let Some(attachment) = request.notification().attachment.as_ref() else {
        return Ok(WireBody::Form(fields));
    };

    let attachment = match attachment {
        Attachment::Path(path) => {
            std::fs::read(path).map_err(|source| EncodeError::ReadAttachment {
                path: path.display().to_string(),
                source,
            })?
        }
        Attachment::Bytes(bytes) => bytes.clone(),
    };
    check_attachment_size(attachment.len() as u64)?;

    Ok(WireBody::Multipart { fields, attachment })
}

fn push_non_empty(params: &mut FormParams, key: &str, value: &str) {
    if !value.is_empty() {
        params.push((key.to_owned(), value.to_owned()));
    }
}

/// Seconds without trailing zeros or exponent: `60`, `3600`, `1.5`, `0.000001`.
fn format_seconds(duration: Duration) -> String {
    let secs = duration.as_secs();
    let nanos = duration.subsec_nanos();
    if nanos == 0 {
        return secs.to_string();
    }
    let fraction = format!("{nanos:09}");
    format!("{secs}.{}", fraction.trim_end_matches('0'))
}

pub fn decode_delivery_json_response(json: &str) -> Result<DeliveryResponse, TransportError> {
    let parsed: DeliveryJsonResponse = serde_json::from_str(json)?;
    Ok(DeliveryResponse {
        status: Status::from_code(parsed.status),
        request: parsed.request,
        errors: ApiErrors(parsed.errors),
        receipt: parsed.receipt.and_then(|receipt| Receipt::new(receipt).ok()),
    })
}
