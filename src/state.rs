use std::sync::Arc;

use crate::backend::{HttpBackend, InMemoryBackend, UserBackend};
use crate::config::{AppConfig, BackendMode};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub backend: Arc<dyn UserBackend>,
}

impl AppState {
    pub fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        let backend = match config.backend_mode {
            BackendMode::Http => {
                Arc::new(HttpBackend::new(&config.backend_url)?) as Arc<dyn UserBackend>
            }
            BackendMode::Memory => Arc::new(InMemoryBackend::new()) as Arc<dyn UserBackend>,
        };

        Ok(Self { config, backend })
    }

    pub fn from_parts(config: Arc<AppConfig>, backend: Arc<dyn UserBackend>) -> Self {
        Self { config, backend }
    }

    /// State backed by a fresh in-memory store, for tests.
    pub fn fake() -> Self {
        Self::from_parts(
            Arc::new(AppConfig::default()),
            Arc::new(InMemoryBackend::new()),
        )
    }
}
