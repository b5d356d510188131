use super::FormParams;
use crate::domain::{AppToken, SendGlance, UserKey};

/// Build the field list for `glances.json`; unset fields are left out so the
/// device keeps showing its previous value for them.
pub fn encode_glance_form(request: &SendGlance) -> FormParams {
    let update = request.update();
    let mut params = vec![
        (
            AppToken::FIELD.to_owned(),
            request.token().as_str().to_owned(),
        ),
        (UserKey::FIELD.to_owned(), request.user().as_str().to_owned()),
    ];

    let text_fields = [
        ("device", &update.device_name),
        ("title", &update.title),
        ("text", &update.text),
        ("subtext", &update.subtext),
    ];
    for (key, value) in text_fields {
        if !value.is_empty() {
            params.push((key.to_owned(), value.clone()));
        }
    }
    if let Some(count) = update.count {
        params.push(("count".to_owned(), count.to_string()));
    }
    if let Some(percent) = update.percent {
        params.push(("percent".to_owned(), percent.to_string()));
    }

    params
}
