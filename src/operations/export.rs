//! Export operation coordination

use crate::cli::Args;
use crate::client::ClientFactory;
use crate::config::{ConnectionConfig, LAIR_API_SERVER};
use crate::error::ExportError;
use crate::system::System;
use anyhow::Result;
use tracing::{debug, info};

/// Export one project and return its compact JSON encoding
///
/// Checks run in a fixed order, and the first failure wins: server URL
/// presence, project id presence, URL parsing, credentials, client setup,
/// the export call, JSON encoding. Nothing is sent over the network unless
/// every configuration check passed.
///
/// # Errors
///
/// Returns an [`ExportError`] if:
/// - `LAIR_API_SERVER` is unset or empty
/// - No project id was given
/// - The URL is malformed or lacks a username and password
/// - The client cannot be built
/// - The export call fails
/// - The project cannot be encoded as JSON
#[inline]
pub fn export_project(
    args: &Args,
    system: &dyn System,
    factory: &dyn ClientFactory,
) -> Result<String> {
    let server_url = system
        .env_var(LAIR_API_SERVER)
        .ok()
        .filter(|value| !value.is_empty())
        .ok_or_else(|| {
            return ExportError::configuration(format!(
                "Missing {LAIR_API_SERVER} environment variable"
            ));
        })?;

    let Some(project_id) = args.id.as_deref() else {
        return Err(ExportError::configuration("Missing required argument").into());
    };

    let config = ConnectionConfig::from_url(&server_url, args.insecure)?;
    debug!("Using {config:?}");

    let client = factory
        .build(&config)
        .map_err(|e| ExportError::client(e.to_string()))?;

    info!("Exporting project {project_id} from {}", config.host);
    let project = client
        .export_project(project_id)
        .map_err(|e| ExportError::remote(e.to_string()))?;

    let json =
        serde_json::to_string(&project).map_err(|e| ExportError::serialization(e.to_string()))?;
    debug!("Encoded project as {} bytes of JSON", json.len());

    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockClientFactory;
    use crate::system::MockSystem;
    use serde_json::json;

    #[test]
    fn test_empty_server_url_is_missing() {
        let system = MockSystem::new().with_env(LAIR_API_SERVER, "").unwrap();
        let factory = MockClientFactory::returning(json!({}));

        let err = export_project(&Args::for_project("42"), &system, &factory).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Missing LAIR_API_SERVER environment variable"
        );
        assert!(factory.untouched());
    }

    #[test]
    fn test_errors_downcast_to_export_error() {
        let system = MockSystem::new();
        let factory = MockClientFactory::returning(json!({}));

        let err = export_project(&Args::for_project("42"), &system, &factory).unwrap_err();

        let export_err = err.downcast_ref::<ExportError>().unwrap();
        assert!(matches!(export_err, ExportError::Configuration { .. }));
        assert_eq!(export_err.exit_code(), 1);
    }
}
