//! Lair API client module
//!
//! The export pipeline only sees the two capabilities defined here: building
//! a client from a connection config, and exporting a project through it.

pub mod http;
pub mod mock;

pub use http::{HttpClientFactory, LairClient};
pub use mock::MockClientFactory;

use crate::config::ConnectionConfig;
use serde_json::Value;
use thiserror::Error;

/// A full project export, kept as the document the server returned
pub type Project = Value;

/// Errors raised by an API client
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ClientError {
    #[error("unsupported scheme '{0}', expected http or https")]
    UnsupportedScheme(String),

    #[error("invalid server address '{address}': {reason}")]
    InvalidAddress { address: String, reason: String },

    #[error("invalid project id '{0}'")]
    InvalidProjectId(String),

    #[error("project {0} not found")]
    NotFound(String),

    #[error("authentication failed (status {0})")]
    Unauthorized(u16),

    #[error("unexpected status code {0}")]
    UnexpectedStatus(u16),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Free-form failure, used by substitute clients
    #[error("{0}")]
    Other(String),
}

/// Exports projects from a Lair server
pub trait ApiClient {
    /// Fetch the complete document for one project
    fn export_project(&self, id: &str) -> Result<Project, ClientError>;
}

/// Builds API clients from a connection config
pub trait ClientFactory {
    /// Construct an authenticated client
    fn build(&self, config: &ConnectionConfig) -> Result<Box<dyn ApiClient>, ClientError>;
}
