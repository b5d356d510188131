//! Typed blocking Rust client for the Pushover notification API.
//!
//! The crate is split into a domain layer of strong types and validation, a
//! transport layer for wire-format quirks, and a small client layer that
//! performs one HTTP exchange per call.
//!
//! ```rust,no_run
//! use pushover::{AppToken, Notification, PushoverClient, UserKey};
//!
//! fn main() -> Result<(), pushover::PushoverError> {
//!     let client = PushoverClient::new(AppToken::new("azGDORePK8gMaC0QOYAMyEEuzJnyUi")?)?;
//!     let user = UserKey::new("uQiRzpo4DXghDmr9QzzfQu27cmVRsG")?;
//!     let response = client.send_notification(&user, Notification::new("hello"))?;
//!     println!("{response}");
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{PushoverClient, PushoverClientBuilder, PushoverError};
pub use domain::{
    ApiErrors, AppToken, Attachment, DeliveryResponse, GlanceUpdate, Notification, Priority,
    QuotaLimit, Receipt, ReceiptDetails, RecipientDetails, SendGlance, SendNotification,
    SendNotificationResponse, Sound, Status, UnixTimestamp, UserKey, ValidationError,
};
pub use transport::QuotaHeaderError;
