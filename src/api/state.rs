//! API server state and request-scoped extractors

use std::convert::Infallible;
use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::config::{AppConfig, Environment};
use crate::service::DemoService;

/// API server state
#[derive(Clone)]
pub struct AppState {
    /// Application configuration, read-only after startup
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn environment(&self) -> Environment {
        self.config.environment
    }
}

/// Builds a fresh [`DemoService`] for every request that asks for one.
#[async_trait]
impl FromRequestParts<AppState> for DemoService {
    type Rejection = Infallible;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(DemoService::new(&state.config.service))
    }
}
