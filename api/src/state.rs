use prometheus::Registry;
use shared::{african_countries, Country};
use std::sync::Arc;

use crate::config::AppConfig;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    /// Read-only for the lifetime of the process
    pub countries: &'static [Country],
    pub registry: Registry,
}

impl AppState {
    pub fn new(config: AppConfig, registry: Registry) -> Self {
        Self {
            config: Arc::new(config),
            countries: african_countries(),
            registry,
        }
    }
}
