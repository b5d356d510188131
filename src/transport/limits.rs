use chrono::DateTime;
use reqwest::header::HeaderMap;

use crate::domain::QuotaLimit;

pub const LIMIT_HEADER: &str = "X-Limit-App-Limit";
pub const REMAINING_HEADER: &str = "X-Limit-App-Remaining";
pub const RESET_HEADER: &str = "X-Limit-App-Reset";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Why the quota headers of a send response could not be read.
pub enum QuotaHeaderError {
    #[error("missing response header {0}")]
    Missing(&'static str),

    #[error("response header {0} must appear exactly once")]
    NotSingular(&'static str),

    #[error("response header {header} is not an integer: {value:?}")]
    NotInteger { header: &'static str, value: String },

    #[error("response header {header} is out of range: {value}")]
    OutOfRange { header: &'static str, value: i64 },
}

fn single_value<'a>(
    headers: &'a HeaderMap,
    name: &'static str,
) -> Result<&'a reqwest::header::HeaderValue, QuotaHeaderError> {
    let mut values = headers.get_all(name).iter();
    let first = values.next().ok_or(QuotaHeaderError::Missing(name))?;
    if values.next().is_some() {
        return Err(QuotaHeaderError::NotSingular(name));
    }
    Ok(first)
}

fn parse_integer<T: std::str::FromStr>(
    headers: &HeaderMap,
    name: &'static str,
) -> Result<T, QuotaHeaderError> {
    let value = single_value(headers, name)?;
    let not_integer = || QuotaHeaderError::NotInteger {
        header: name,
        value: String::from_utf8_lossy(value.as_bytes()).into_owned(),
    };
    value
        .to_str()
        .map_err(|_| not_integer())?
        .trim()
        .parse::<T>()
        .map_err(|_| not_integer())
}

/// Read all three quota headers; any missing or malformed header fails the whole snapshot.
pub fn decode_quota_headers(headers: &HeaderMap) -> Result<QuotaLimit, QuotaHeaderError> {
    let total = parse_integer::<u64>(headers, LIMIT_HEADER)?;
    let remaining = parse_integer::<u64>(headers, REMAINING_HEADER)?;
    let reset = parse_integer::<i64>(headers, RESET_HEADER)?;
    let next_reset = DateTime::from_timestamp(reset, 0).ok_or(QuotaHeaderError::OutOfRange {
        header: RESET_HEADER,
        value: reset,
    })?;

    Ok(QuotaLimit {
        total,
        remaining,
        next_reset,
    })
}
