use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde::de::Error as DeError;

/// Boolean sent by Pushover as the JSON integer `0` or `1`.
///
/// Any other integer is rejected rather than coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WireFlag(bool);

impl WireFlag {
    pub fn into_bool(self) -> bool {
        self.0
    }
}

impl<'de> Deserialize<'de> for WireFlag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match i64::deserialize(deserializer)? {
            0 => Ok(Self(false)),
            1 => Ok(Self(true)),
            other => Err(D::Error::custom(format!(
                "expected flag to be 0 or 1, got {other}"
            ))),
        }
    }
}

/// Instant sent by Pushover as integer Unix seconds, where `0` means "never".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WireEpoch(Option<DateTime<Utc>>);

impl WireEpoch {
    pub fn into_option(self) -> Option<DateTime<Utc>> {
        self.0
    }
}

impl<'de> Deserialize<'de> for WireEpoch {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let seconds = match Option::<i64>::deserialize(deserializer)? {
            Some(seconds) if seconds > 0 => seconds,
            _ => return Ok(Self(None)),
        };
        DateTime::from_timestamp(seconds, 0)
            .map(|instant| Self(Some(instant)))
            .ok_or_else(|| D::Error::custom(format!("timestamp out of range: {seconds}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_accepts_only_zero_and_one() {
        assert!(!serde_json::from_str::<WireFlag>("0").unwrap().into_bool());
        assert!(serde_json::from_str::<WireFlag>("1").unwrap().into_bool());
        assert!(serde_json::from_str::<WireFlag>("2").is_err());
        assert!(serde_json::from_str::<WireFlag>("-1").is_err());
        assert!(serde_json::from_str::<WireFlag>("true").is_err());
    }

    #[test]
    fn epoch_zero_is_absent() {
        let epoch: WireEpoch = serde_json::from_str("0").unwrap();
        assert_eq!(epoch.into_option(), None);

        let epoch: WireEpoch = serde_json::from_str("null").unwrap();
        assert_eq!(epoch.into_option(), None);
    }

    #[test]
    fn epoch_decodes_exact_instant() {
        let epoch: WireEpoch = serde_json::from_str("1424305421").unwrap();
        let instant = epoch.into_option().unwrap();
        assert_eq!(instant.timestamp(), 1_424_305_421);
        assert_eq!(instant.to_rfc3339(), "2015-02-19T00:23:41+00:00");
    }

    #[test]
    fn epoch_rejects_out_of_range_and_non_integers() {
        assert!(serde_json::from_str::<WireEpoch>(&i64::MAX.to_string()).is_err());
        assert!(serde_json::from_str::<WireEpoch>("\"1424305421\"").is_err());
    }
}
