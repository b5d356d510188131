use std::fmt;

use chrono::{DateTime, Utc};

use crate::domain::value::Receipt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Top-level `status` of a Pushover response (`1` means the request was accepted).
pub enum Status {
    Ok,
    Error,
}

impl Status {
    pub fn from_code(code: i64) -> Self {
        if code == 1 { Self::Ok } else { Self::Error }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Error strings reported by the service, in the order they were returned.
pub struct ApiErrors(pub Vec<String>);

impl ApiErrors {
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for ApiErrors {
    fn from(value: Vec<String>) -> Self {
        Self(value)
    }
}

impl fmt::Display for ApiErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return Ok(());
        }
        write!(f, "Errors:\n{}", self.0.join("\n"))
    }
}

impl std::error::Error for ApiErrors {}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Decoded body of `messages.json`, `glances.json` and `receipts/{id}/cancel.json`.
pub struct DeliveryResponse {
    pub status: Status,
    /// Request tracking id, useful when contacting support.
    pub request: String,
    pub errors: ApiErrors,
    /// Present only for emergency-priority sends.
    pub receipt: Option<Receipt>,
}

impl fmt::Display for DeliveryResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Request id: {}", self.request)?;
        if let Some(receipt) = &self.receipt {
            write!(f, "\nReceipt: {receipt}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Monthly message allowance of the application, read from the
/// `X-Limit-App-*` headers of a send response.
pub struct QuotaLimit {
    /// Messages the application may send per month.
    pub total: u64,
    /// Messages left until the next reset.
    pub remaining: u64,
    pub next_reset: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Result of sending a notification: the decoded body plus the quota snapshot
/// taken from the response headers.
pub struct SendNotificationResponse {
    pub delivery: DeliveryResponse,
    pub limit: QuotaLimit,
}

impl fmt::Display for SendNotificationResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\nUsage {}/{} messages - Next reset : {}",
            self.delivery, self.limit.remaining, self.limit.total, self.limit.next_reset
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Acknowledgment state of an emergency notification (`receipts/{id}.json`).
///
/// Instants the service reports as `0` are `None`.
pub struct ReceiptDetails {
    pub status: Status,
    pub acknowledged: bool,
    pub acknowledged_at: Option<DateTime<Utc>>,
    /// User key of the first user who acknowledged the notification.
    pub acknowledged_by: String,
    pub acknowledged_by_device: String,
    pub last_delivered_at: Option<DateTime<Utc>>,
    pub expired: bool,
    pub expires_at: Option<DateTime<Utc>>,
    pub called_back: bool,
    pub called_back_at: Option<DateTime<Utc>>,
    pub request: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Result of validating a user or group key (`users/validate.json`).
pub struct RecipientDetails {
    pub status: Status,
    pub group: bool,
    pub devices: Vec<String>,
    pub request: String,
    pub errors: ApiErrors,
}
