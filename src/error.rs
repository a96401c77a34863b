//! All error types for the langbridge crate.
//!
//! These are returned from all fallible operations (parsing, serialization, dispatch).

use thiserror::Error;

/// Boxed underlying cause attached to an error for diagnostics.
pub type Cause = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("unknown format `{0}`")]
    UnknownFormat(String),

    #[error("parsing error: {message}")]
    Parsing {
        message: String,
        #[source]
        source: Option<Cause>,
    },

    #[error("serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: Option<Cause>,
    },
}

impl Error {
    /// Creates a new parsing error without an underlying cause.
    pub fn parsing(message: impl Into<String>) -> Self {
        Error::Parsing {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new parsing error wrapping an underlying cause.
    pub fn parsing_with(message: impl Into<String>, source: impl Into<Cause>) -> Self {
        Error::Parsing {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Creates a new serialization error without an underlying cause.
    pub fn serialization(message: impl Into<String>) -> Self {
        Error::Serialization {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new serialization error wrapping an underlying cause.
    pub fn serialization_with(message: impl Into<String>, source: impl Into<Cause>) -> Self {
        Error::Serialization {
            message: message.into(),
            source: Some(source.into()),
        }
    }
}
