use thiserror::Error;

use crate::constants::MAX_SHORTCUTS;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("You can have at most {max} shortcuts (got {count}).", max = MAX_SHORTCUTS)]
    ShortcutLimitExceeded { count: usize },

    #[error("Missing `{field}` in shortcut #{index}")]
    MissingShortcutField { index: usize, field: &'static str },

    #[error("Invalid color for `{field}`: {value:?} (expected #RRGGBB or #AARRGGBB)")]
    InvalidColor { field: &'static str, value: String },

    #[error("Invalid `{field}`: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("Duplicate {kind} resource: {name}")]
    DuplicateResource { kind: String, name: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("XML error: {0}")]
    XmlError(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::SerializationError(err.to_string())
    }
}

impl From<toml_edit::de::Error> for Error {
    fn from(err: toml_edit::de::Error) -> Self {
        Error::SerializationError(err.to_string())
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::XmlError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

// Reports render errors by their message
impl serde::Serialize for Error {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
