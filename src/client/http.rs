//! HTTP implementation of the Lair API client

use super::{ApiClient, ClientError, ClientFactory, Project};
use crate::config::ConnectionConfig;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, HeaderValue};
use std::fmt;
use tracing::debug;
use url::Url;

/// Blocking client for the Lair API server
pub struct LairClient {
    http: Client,
    base: Url,
    user: String,
    password: String,
}

impl LairClient {
    /// Create a client for the server described by `config`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The scheme is not `http` or `https`
    /// - The host does not form a valid base URL
    /// - The underlying HTTP client cannot be initialized
    #[inline]
    pub fn new(config: &ConnectionConfig) -> Result<Self, ClientError> {
        if !matches!(config.scheme.as_str(), "http" | "https") {
            return Err(ClientError::UnsupportedScheme(config.scheme.clone()));
        }

        let address = format!("{}://{}", config.scheme, config.host);
        let base = Url::parse(&address).map_err(|e| {
            return ClientError::InvalidAddress {
                address: address.clone(),
                reason: e.to_string(),
            };
        })?;
        if base.host_str().is_none_or(str::is_empty) {
            return Err(ClientError::InvalidAddress {
                address,
                reason: "missing host".to_owned(),
            });
        }

        // No request timeout and no retries: a slow export is waited out.
        let http = Client::builder()
            .danger_accept_invalid_certs(config.insecure_skip_verify)
            .timeout(None)
            .build()?;

        debug!(
            "Client ready for {base} (insecure: {})",
            config.insecure_skip_verify
        );

        Ok(Self {
            http,
            base,
            user: config.user.clone(),
            password: config.password.clone(),
        })
    }

    /// URL of the export endpoint for a project
    ///
    /// The id is pushed as a single path segment, so `/` or `?` in it are
    /// percent-encoded instead of changing the route.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is empty, `.` or `..`. Those cannot stand as
    /// a segment and would resolve to another route.
    #[inline]
    pub fn project_url(&self, id: &str) -> Result<Url, ClientError> {
        if is_route_changing(id) {
            return Err(ClientError::InvalidProjectId(id.to_owned()));
        }

        let mut url = self.base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.clear().extend(["api", "projects", id]);
        }
        Ok(url)
    }
}

/// Ids that cannot stand as a single path segment
fn is_route_changing(id: &str) -> bool {
    matches!(id, "" | "." | "..")
}

impl fmt::Debug for LairClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LairClient")
            .field("base", &self.base.as_str())
            .field("user", &self.user)
            .finish_non_exhaustive()
    }
}

impl ApiClient for LairClient {
    fn export_project(&self, id: &str) -> Result<Project, ClientError> {
        let url = self.project_url(id)?;
        debug!("GET {url}");

        let response = self
            .http
            .get(url)
            .basic_auth(&self.user, Some(&self.password))
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .send()?;

        let status = response.status();
        debug!("Server responded with {status}");
        match status {
            StatusCode::NOT_FOUND => return Err(ClientError::NotFound(id.to_owned())),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(ClientError::Unauthorized(status.as_u16()));
            }
            _ if !status.is_success() => {
                return Err(ClientError::UnexpectedStatus(status.as_u16()));
            }
            _ => {}
        }

        Ok(response.json::<Project>()?)
    }
}

/// Factory producing [`LairClient`]s
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpClientFactory;

impl ClientFactory for HttpClientFactory {
    fn build(&self, config: &ConnectionConfig) -> Result<Box<dyn ApiClient>, ClientError> {
        Ok(Box::new(LairClient::new(config)?))
    }
}
