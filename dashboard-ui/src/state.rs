//! Shared application state for the dashboard server.

use std::sync::Arc;

use anyhow::Result;
use dashboard::io::config::DashboardConfig;

use crate::render::PageRenderer;

/// Shared state accessible from all request handlers.
///
/// Both fields are built once at startup and never mutated, so handlers
/// share them without locking.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<DashboardConfig>,
    pub pages: Arc<PageRenderer>,
}

impl AppState {
    pub fn new(config: DashboardConfig) -> Result<Self> {
        Ok(Self {
            config: Arc::new(config),
            pages: Arc::new(PageRenderer::new()?),
        })
    }
}
