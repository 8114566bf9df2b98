//! Custom error types with exit codes

use thiserror::Error;

/// Main error type for drone-export
///
/// Every variant is fatal. The message is printed as-is behind a `Fatal: `
/// prefix, so the wording is part of the user-visible contract.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ExportError {
    /// Configuration Error - missing argument, environment variable or credentials
    #[error("{message}")]
    Configuration { message: String },

    /// Client Error - the API client could not be set up
    #[error("Error setting up client: Error {message}")]
    Client { message: String },

    /// Remote Error - the export call failed
    #[error("Unable to import project. Error {message}")]
    Remote { message: String },

    /// Serialization Error - the exported project could not be encoded
    #[error("Unable to parse JSON. Error {message}")]
    Serialization { message: String },
}

impl ExportError {
    /// Get the appropriate exit code for this error type
    #[must_use]
    #[inline]
    pub const fn exit_code(&self) -> i32 {
        match *self {
            Self::Configuration { .. }
            | Self::Client { .. }
            | Self::Remote { .. }
            | Self::Serialization { .. } => 1,
        }
    }

    /// Create a configuration error
    #[inline]
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a client setup error
    #[inline]
    pub fn client<S: Into<String>>(message: S) -> Self {
        Self::Client {
            message: message.into(),
        }
    }

    /// Create a remote export error
    #[inline]
    pub fn remote<S: Into<String>>(message: S) -> Self {
        Self::Remote {
            message: message.into(),
        }
    }

    /// Create a serialization error
    #[inline]
    pub fn serialization<S: Into<String>>(message: S) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }
}
