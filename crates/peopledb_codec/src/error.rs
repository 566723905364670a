//! Error types for the codec crate.

use thiserror::Error;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur while encoding or decoding a record line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// A line ended before all three fields were seen.
    #[error("missing field: {field}")]
    MissingField {
        /// Name of the missing field.
        field: &'static str,
    },

    /// The name field is empty.
    #[error("name field is empty")]
    EmptyName,

    /// A field that should hold an integer does not.
    #[error("invalid integer in field {field}: {text:?}")]
    InvalidInteger {
        /// Name of the offending field.
        field: &'static str,
        /// The raw text that failed to parse.
        text: String,
    },

    /// A field that should hold a floating-point number does not.
    #[error("invalid number in field {field}: {text:?}")]
    InvalidFloat {
        /// Name of the offending field.
        field: &'static str,
        /// The raw text that failed to parse.
        text: String,
    },

    /// Invalid UTF-8 line.
    #[error("invalid UTF-8 line")]
    InvalidUtf8,

    /// The name contains a field or line delimiter and cannot be written.
    #[error("name cannot be encoded, it contains a delimiter: {name:?}")]
    UnencodableName {
        /// The offending name.
        name: String,
    },
}

impl CodecError {
    /// Create a missing field error.
    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    /// Create an invalid integer error.
    pub fn invalid_integer(field: &'static str, text: impl Into<String>) -> Self {
        Self::InvalidInteger {
            field,
            text: text.into(),
        }
    }

    /// Create an invalid float error.
    pub fn invalid_float(field: &'static str, text: impl Into<String>) -> Self {
        Self::InvalidFloat {
            field,
            text: text.into(),
        }
    }

    /// Create an unencodable name error.
    pub fn unencodable_name(name: impl Into<String>) -> Self {
        Self::UnencodableName { name: name.into() }
    }
}
