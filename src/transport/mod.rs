//! Transport layer: wire-format encoding and decoding (no network I/O).

mod flags;
mod glances;
mod limits;
mod messages;
mod receipts;
mod recipients;

pub use glances::encode_glance_form;
pub use limits::{QuotaHeaderError, decode_quota_headers};
pub use messages::{EncodeError, decode_delivery_json_response, encode_notification};
pub use receipts::{decode_receipt_details_json_response, encode_cancel_form};
pub use recipients::{decode_recipient_details_json_response, encode_validate_user_form};

/// Multipart field name and file name of the attachment part.
pub const ATTACHMENT_FIELD: &str = "attachment";

pub type FormParams = Vec<(String, String)>;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Encoded request body.
///
/// Requests without an attachment are sent as `application/x-www-form-urlencoded`;
/// an attachment switches the same fields to `multipart/form-data` with one file part.
pub enum WireBody {
    Form(FormParams),
    Multipart {
        fields: FormParams,
        attachment: Vec<u8>,
    },
}

impl WireBody {
    pub fn fields(&self) -> &[(String, String)] {
        match self {
            Self::Form(fields) | Self::Multipart { fields, .. } => fields,
        }
    }
}
