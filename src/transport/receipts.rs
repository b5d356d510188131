use serde::Deserialize;

use super::flags::{WireEpoch, WireFlag};
use super::{FormParams, TransportError};
use crate::domain::{ApiErrors, AppToken, ReceiptDetails, Status};

#[derive(Debug, Clone, Deserialize)]
struct ReceiptJsonResponse {
    status: i64,
    #[serde(default)]
    request: String,
    #[serde(default)]
    errors: Vec<String>,
    #[serde(default)]
    acknowledged: WireFlag,
    #[serde(default)]
    acknowledged_at: WireEpoch,
    #[serde(default)]
    acknowledged_by: String,
    #[serde(default)]
    acknowledged_by_device: String,
    #[serde(default)]
    last_delivered_at: WireEpoch,
    #[serde(default)]
    expired: WireFlag,
    #[serde(default)]
    expires_at: WireEpoch,
    #[serde(default)]
    called_back: WireFlag,
    #[serde(default)]
    called_back_at: WireEpoch,
}

pub fn encode_cancel_form(token: &AppToken) -> FormParams {
    vec![(AppToken::FIELD.to_owned(), token.as_str().to_owned())]
}

/// Decode `receipts/{receipt}.json`, returning the service errors alongside the details.
pub fn decode_receipt_details_json_response(
    json: &str,
) -> Result<(ReceiptDetails, ApiErrors), TransportError> {
    let parsed: ReceiptJsonResponse = serde_json::from_str(json)?;
    let details = ReceiptDetails {
        status: Status::from_code(parsed.status),
        acknowledged: parsed.acknowledged.into_bool(),
        acknowledged_at: parsed.acknowledged_at.into_option(),
        acknowledged_by: parsed.acknowledged_by,
        acknowledged_by_device: parsed.acknowledged_by_device,
        last_delivered_at: parsed.last_delivered_at.into_option(),
        expired: parsed.expired.into_bool(),
        expires_at: parsed.expires_at.into_option(),
        called_back: parsed.called_back.into_bool(),
        called_back_at: parsed.called_back_at.into_option(),
        request: parsed.request,
    };
    Ok((details, ApiErrors(parsed.errors)))
}
