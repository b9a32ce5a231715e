//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use rollout_core::config::AppConfig;
use rollout_core::result::AppResult;
use rollout_core::status::StatusMapping;

use crate::exception::ErrorTranslator;

/// Application state passed to handlers and middleware via `State<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Error boundary over the startup-built status table
    pub translator: ErrorTranslator,
}

impl AppState {
    /// Build the state, including the status table, from configuration.
    pub fn new(config: AppConfig) -> AppResult<Self> {
        let mapping = StatusMapping::from_config(&config.errors)?;
        Ok(Self {
            config: Arc::new(config),
            translator: ErrorTranslator::new(Arc::new(mapping)),
        })
    }
}
