//! Substitute API client for testing

use super::{ApiClient, ClientError, ClientFactory, Project};
use crate::config::ConnectionConfig;
use std::sync::{Arc, RwLock};

/// In-memory client factory that never touches the network
///
/// Every built config and every exported id is recorded, so tests can check
/// what reached the client and whether it was reached at all.
///
/// # Example
/// ```
/// use drone_export::client::{ClientFactory, MockClientFactory};
/// use drone_export::config::ConnectionConfig;
/// use serde_json::json;
///
/// let factory = MockClientFactory::returning(json!({"id": "42"}));
/// let config = ConnectionConfig::from_url("https://u:p@lair.local", false).unwrap();
///
/// let client = factory.build(&config).unwrap();
/// assert_eq!(client.export_project("42").unwrap(), json!({"id": "42"}));
/// assert_eq!(factory.exported_ids(), vec!["42".to_owned()]);
/// ```
#[derive(Clone, Default)]
pub struct MockClientFactory {
    state: Arc<RwLock<MockState>>,
}

#[derive(Default)]
struct MockState {
    build_error: Option<String>,
    export_result: Option<Result<Project, String>>,
    configs: Vec<ConnectionConfig>,
    exported_ids: Vec<String>,
}

impl MockClientFactory {
    /// Factory whose clients return `project` from every export
    #[must_use]
    #[inline]
    pub fn returning(project: Project) -> Self {
        Self::with_result(Ok(project))
    }

    /// Factory whose clients fail every export with `message`
    #[must_use]
    #[inline]
    pub fn failing_export<S: Into<String>>(message: S) -> Self {
        Self::with_result(Err(message.into()))
    }

    /// Factory that fails to build a client with `message`
    #[must_use]
    #[inline]
    pub fn failing_build<S: Into<String>>(message: S) -> Self {
        let factory = Self::default();
        factory.write_state(|state| state.build_error = Some(message.into()));
        factory
    }

    /// Configs passed to `build`, in call order
    #[must_use]
    pub fn configs(&self) -> Vec<ConnectionConfig> {
        self.state
            .read()
            .map(|state| state.configs.clone())
            .unwrap_or_default()
    }

    /// Project ids passed to `export_project`, in call order
    #[must_use]
    pub fn exported_ids(&self) -> Vec<String> {
        self.state
            .read()
            .map(|state| state.exported_ids.clone())
            .unwrap_or_default()
    }

    /// True when neither `build` nor `export_project` was ever called
    #[must_use]
    pub fn untouched(&self) -> bool {
        self.configs().is_empty() && self.exported_ids().is_empty()
    }

    fn with_result(result: Result<Project, String>) -> Self {
        let factory = Self::default();
        factory.write_state(|state| state.export_result = Some(result));
        factory
    }

    fn write_state(&self, update: impl FnOnce(&mut MockState)) {
        if let Ok(mut state) = self.state.write() {
            update(&mut state);
        }
    }
}

impl ClientFactory for MockClientFactory {
    fn build(&self, config: &ConnectionConfig) -> Result<Box<dyn ApiClient>, ClientError> {
        let mut state = self
            .state
            .write()
            .map_err(|e| ClientError::Other(e.to_string()))?;
        state.configs.push(config.clone());
        if let Some(message) = state.build_error.clone() {
            return Err(ClientError::Other(message));
        }
        drop(state);
        Ok(Box::new(MockClient {
            state: Arc::clone(&self.state),
        }))
    }
}

struct MockClient {
    state: Arc<RwLock<MockState>>,
}

impl ApiClient for MockClient {
    fn export_project(&self, id: &str) -> Result<Project, ClientError> {
        let mut state = self
            .state
            .write()
            .map_err(|e| ClientError::Other(e.to_string()))?;
        state.exported_ids.push(id.to_owned());
        match state.export_result.clone() {
            Some(Ok(project)) => Ok(project),
            Some(Err(message)) => Err(ClientError::Other(message)),
            None => Err(ClientError::NotFound(id.to_owned())),
        }
    }
}
