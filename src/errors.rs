//! Error types for semverkit
//!
//! The precedence comparator and the renderers are total and never fail.
//! Only the surrounding layers (parser, configuration, CLI) produce errors,
//! and they all funnel into [`SemverError`].

use thiserror::Error;

/// Main error type for semverkit
#[derive(Error, Debug)]
pub enum SemverError {
    #[error("Empty version string")]
    Empty,

    #[error("Malformed version '{input}': expected MAJOR.MINOR.PATCH, found {found} core field(s)")]
    CoreFieldCount { input: String, found: usize },

    #[error("Malformed {field} field: '{value}' is not a non-negative integer")]
    MalformedInteger { field: String, value: String },

    #[error("Leading zero in {field}: '{value}'")]
    LeadingZero { field: String, value: String },

    #[error("Empty identifier in {part}")]
    EmptyIdentifier { part: String },

    #[error("Invalid character in {part} identifier '{identifier}'")]
    InvalidCharacter { part: String, identifier: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Serialization failed: {context}")]
    Serialization {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O operation failed: {operation}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },
}

/// Type alias for Result with SemverError
pub type SemverResult<T> = Result<T, SemverError>;

impl SemverError {
    /// Create a core field count error
    pub fn core_field_count(input: impl Into<String>, found: usize) -> Self {
        Self::CoreFieldCount {
            input: input.into(),
            found,
        }
    }

    /// Create a malformed integer error
    pub fn malformed_integer(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::MalformedInteger {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create a leading zero error
    pub fn leading_zero(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::LeadingZero {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create an empty identifier error
    pub fn empty_identifier(part: impl Into<String>) -> Self {
        Self::EmptyIdentifier { part: part.into() }
    }

    /// Create an invalid character error
    pub fn invalid_character(part: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self::InvalidCharacter {
            part: part.into(),
            identifier: identifier.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            context: context.into(),
            source,
        }
    }

    /// Create an I/O error
    pub fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            operation: operation.into(),
            source,
        }
    }

    /// True for errors raised by the version parser.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            SemverError::Empty
                | SemverError::CoreFieldCount { .. }
                | SemverError::MalformedInteger { .. }
                | SemverError::LeadingZero { .. }
                | SemverError::EmptyIdentifier { .. }
                | SemverError::InvalidCharacter { .. }
        )
    }
}

/// Convert from figment errors
impl From<figment::Error> for SemverError {
    fn from(err: figment::Error) -> Self {
        SemverError::config(err.to_string())
    }
}

/// Convert from serde_json errors
impl From<serde_json::Error> for SemverError {
    fn from(err: serde_json::Error) -> Self {
        SemverError::serialization("json_operation", err)
    }
}

/// Convert from std::io errors
impl From<std::io::Error> for SemverError {
    fn from(err: std::io::Error) -> Self {
        SemverError::io("io_operation", err)
    }
}
