use serde::Deserialize;

use super::flags::WireFlag;
use super::{FormParams, TransportError};
use crate::domain::{ApiErrors, AppToken, RecipientDetails, Status, UserKey};

#[derive(Debug, Clone, Deserialize)]
struct RecipientJsonResponse {
    status: i64,
    #[serde(default)]
    group: WireFlag,
    #[serde(default)]
    devices: Vec<String>,
    #[serde(default)]
    request: String,
    #[serde(default)]
    errors: Vec<String>,
}

pub fn encode_validate_user_form(token: &AppToken, user: &UserKey) -> FormParams {
    vec![
        (AppToken::FIELD.to_owned(), token.as_str().to_owned()),
        (UserKey::FIELD.to_owned(), user.as_str().to_owned()),
    ]
}

pub fn decode_recipient_details_json_response(
    json: &str,
) -> Result<RecipientDetails, TransportError> {
    let parsed: RecipientJsonResponse = serde_json::from_str(json)?;
    Ok(RecipientDetails {
        status: Status::from_code(parsed.status),
        group: parsed.group.into_bool(),
        devices: parsed.devices,
        request: parsed.request,
        errors: ApiErrors(parsed.errors),
    })
}
