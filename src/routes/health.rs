//! Health check endpoint for container orchestration.
//!
//! Provides a liveness probe that answers 200 OK with a fixed message whenever
//! the process is able to serve HTTP. There is no readiness or dependency
//! check: if the handler runs, the dashboard backend is alive.

use axum::response::{IntoResponse, Response};
use tracing::instrument;

use crate::config::HEALTH_MESSAGE;

/// Result of a liveness probe.
///
/// Built fresh for every request and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthStatus {
    message: &'static str,
}

impl HealthStatus {
    pub fn message(&self) -> &'static str {
        self.message
    }
}

/// Report that the process is alive.
///
/// Pure and infallible: every call returns the same value.
pub fn check_health() -> HealthStatus {
    HealthStatus {
        message: HEALTH_MESSAGE,
    }
}

impl IntoResponse for HealthStatus {
    fn into_response(self) -> Response {
        // &'static str renders as 200 with text/plain; charset=utf-8
        self.message.into_response()
    }
}

/// Health check handler.
///
/// Takes no extractors, so query strings and request bodies are ignored.
#[instrument(name = "health::health")]
pub async fn health() -> HealthStatus {
    tracing::debug!("Liveness probe");
    check_health()
}
