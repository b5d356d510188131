use std::borrow::Cow;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::validation::ValidationError;

static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{30}$").expect("token pattern is valid"));

static DEVICE_NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{1,25}$").expect("device pattern is valid"));

fn is_token_shaped(value: &str) -> bool {
    TOKEN_PATTERN.is_match(value)
}

/// Check a comma-separated device filter; every element must be a valid device name.
pub(crate) fn validate_device_names(value: &str) -> Result<(), ValidationError> {
    if value.split(',').all(|name| DEVICE_NAME_PATTERN.is_match(name)) {
        return Ok(());
    }
    Err(ValidationError::InvalidDeviceName {
        input: value.to_owned(),
    })
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// Pushover application API token (`token`).
///
/// Invariant: exactly 30 ASCII letters or digits.
pub struct AppToken(String);

impl AppToken {
    /// Form field name used by Pushover (`token`).
    pub const FIELD: &'static str = "token";

    /// Create a validated [`AppToken`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::EmptyToken);
        }
        if !is_token_shaped(&value) {
            return Err(ValidationError::InvalidToken);
        }
        Ok(Self(value))
    }

    /// Borrow the validated token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AppToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AppToken").field(&redact(&self.0)).finish()
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// Recipient user or group key (`user`).
///
/// Invariant: exactly 30 ASCII letters or digits.
pub struct UserKey(String);

impl UserKey {
    /// Form field name used by Pushover (`user`).
    pub const FIELD: &'static str = "user";

    /// Create a validated [`UserKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::EmptyRecipientToken);
        }
        if !is_token_shaped(&value) {
            return Err(ValidationError::InvalidRecipientToken);
        }
        Ok(Self(value))
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for UserKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UserKey").field(&redact(&self.0)).finish()
    }
}

/// Short prefix of a secret, used in `Debug` output and logs.
pub(crate) fn redact(value: &str) -> String {
    let prefix: String = value.chars().take(4).collect();
    format!("{prefix}…")
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Receipt id returned for emergency-priority sends.
///
/// Invariant: non-empty after trimming.
pub struct Receipt(String);

impl Receipt {
    /// JSON field name used by Pushover (`receipt`).
    pub const FIELD: &'static str = "receipt";

    /// Create a validated [`Receipt`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyReceipt);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the receipt id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
/// Notification priority (`priority`).
///
/// The raw level is preserved as given; levels outside `-2..=2` are rejected when the
/// notification is validated, not when the value is constructed.
pub struct Priority(i32);

impl Priority {
    /// Form field name used by Pushover (`priority`).
    pub const FIELD: &'static str = "priority";

    /// No notification is generated.
    pub const LOWEST: Self = Self(-2);
    /// Quiet notification, no sound or vibration.
    pub const LOW: Self = Self(-1);
    /// Default priority.
    pub const NORMAL: Self = Self(0);
    /// Bypasses the recipient's quiet hours.
    pub const HIGH: Self = Self(1);
    /// Repeated until acknowledged or expired; requires retry and expire intervals.
    pub const EMERGENCY: Self = Self(2);

    /// Wrap a raw priority level.
    pub fn from_level(level: i32) -> Self {
        Self(level)
    }

    /// Get the integer level as sent on the wire.
    pub fn level(self) -> i32 {
        self.0
    }

    /// Whether the level is one of the five defined priorities.
    pub fn is_known(self) -> bool {
        (Self::LOWEST.0..=Self::EMERGENCY.0).contains(&self.0)
    }

    pub fn is_emergency(self) -> bool {
        self == Self::EMERGENCY
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Notification sound (`sound`).
///
/// Built-in sounds are available as constants; custom sounds uploaded to the
/// application can be referenced with [`Sound::custom`].
pub struct Sound(Cow<'static, str>);

impl Sound {
    /// Form field name used by Pushover (`sound`).
    pub const FIELD: &'static str = "sound";

    pub const PUSHOVER: Self = Self::builtin("pushover");
    pub const BIKE: Self = Self::builtin("bike");
    pub const BUGLE: Self = Self::builtin("bugle");
    pub const CASH_REGISTER: Self = Self::builtin("cashregister");
    pub const CLASSICAL: Self = Self::builtin("classical");
    pub const COSMIC: Self = Self::builtin("cosmic");
    pub const FALLING: Self = Self::builtin("falling");
    pub const GAMELAN: Self = Self::builtin("gamelan");
    pub const INCOMING: Self = Self::builtin("incoming");
    pub const INTERMISSION: Self = Self::builtin("intermission");
    pub const MAGIC: Self = Self::builtin("magic");
    pub const MECHANICAL: Self = Self::builtin("mechanical");
    pub const PIANOBAR: Self = Self::builtin("pianobar");
    pub const SIREN: Self = Self::builtin("siren");
    pub const SPACE_ALARM: Self = Self::builtin("spacealarm");
    pub const TUG_BOAT: Self = Self::builtin("tugboat");
    pub const ALIEN: Self = Self::builtin("alien");
    pub const CLIMB: Self = Self::builtin("climb");
    pub const PERSISTENT: Self = Self::builtin("persistent");
    pub const ECHO: Self = Self::builtin("echo");
    pub const UP_DOWN: Self = Self::builtin("updown");
    /// Silent.
    pub const NONE: Self = Self::builtin("none");

    const fn builtin(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Reference a custom sound by name.
    ///
    /// Invariant: non-empty after trimming.
    pub fn custom(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptySound);
        }
        Ok(Self(Cow::Owned(trimmed.to_owned())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Unix timestamp in seconds (`timestamp`).
///
/// Shown to the recipient instead of the time the API received the message.
pub struct UnixTimestamp(i64);

impl UnixTimestamp {
    /// Form field name used by Pushover (`timestamp`).
    pub const FIELD: &'static str = "timestamp";

    /// Create a timestamp value (no range validation is performed).
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the underlying timestamp in seconds.
    pub fn value(self) -> i64 {
        self.0
    }
}
