use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    EmptyToken,
    InvalidToken,
    EmptyRecipientToken,
    InvalidRecipientToken,
    EmptyReceipt,
    MessageEmpty,
    MessageTooLong { max: usize, actual: usize },
    TitleTooLong { max: usize, actual: usize },
    UrlTooLong { max: usize, actual: usize },
    UrlTitleTooLong { max: usize, actual: usize },
    EmptyUrl,
    InvalidPriority { actual: i32 },
    MissingEmergencyParameter,
    InvalidDeviceName { input: String },
    MissingAttachment,
    InvalidAttachmentPath { path: String },
    AttachmentTooLarge { max: u64, actual: u64 },
    GlanceEmpty,
    GlanceTitleTooLong { max: usize, actual: usize },
    GlanceTextTooLong { max: usize, actual: usize },
    GlanceSubtextTooLong { max: usize, actual: usize },
    GlancePercentOutOfRange { actual: i32 },
    EmptySound,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyToken => write!(f, "empty API token"),
            Self::InvalidToken => write!(f, "invalid API token"),
            Self::EmptyRecipientToken => write!(f, "empty recipient token"),
            Self::InvalidRecipientToken => write!(f, "invalid recipient token"),
            Self::EmptyReceipt => write!(f, "empty receipt"),
            Self::MessageEmpty => write!(f, "message empty"),
            Self::MessageTooLong { max, actual } => {
                write!(f, "message too long: {actual} characters (max {max})")
            }
            Self::TitleTooLong { max, actual } => {
                write!(f, "message title too long: {actual} characters (max {max})")
            }
            Self::UrlTooLong { max, actual } => {
                write!(f, "message URL too long: {actual} characters (max {max})")
            }
            Self::UrlTitleTooLong { max, actual } => {
                write!(
                    f,
                    "message URL title too long: {actual} characters (max {max})"
                )
            }
            Self::EmptyUrl => write!(f, "empty URL, URL title needs an URL"),
            Self::InvalidPriority { actual } => {
                write!(f, "invalid priority: {actual} (expected -2..=2)")
            }
            Self::MissingEmergencyParameter => write!(f, "missing emergency parameter"),
            Self::InvalidDeviceName { input } => write!(f, "invalid device name: {input}"),
            Self::MissingAttachment => write!(f, "missing attachment"),
            Self::InvalidAttachmentPath { path } => {
                write!(f, "invalid attachment path: {path}")
            }
            Self::AttachmentTooLarge { max, actual } => {
                write!(f, "attachment too large: {actual} bytes (max {max})")
            }
            Self::GlanceEmpty => write!(f, "glance update is empty"),
            Self::GlanceTitleTooLong { max, actual } => {
                write!(f, "glance title too long: {actual} characters (max {max})")
            }
            Self::GlanceTextTooLong { max, actual } => {
                write!(f, "glance text too long: {actual} characters (max {max})")
            }
            Self::GlanceSubtextTooLong { max, actual } => {
                write!(
                    f,
                    "glance subtext too long: {actual} characters (max {max})"
                )
            }
            Self::GlancePercentOutOfRange { actual } => {
                write!(f, "glance percent out of range: {actual} (expected 0..=100)")
            }
            Self::EmptySound => write!(f, "sound must not be empty"),
        }
    }
}

impl std::error::Error for ValidationError {}
