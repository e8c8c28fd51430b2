//! Dashboard liveness service.
//!
//! Serves `GET /health`, a liveness probe that answers with a fixed
//! confirmation message while the process is running.

pub mod config;
pub mod error;
pub mod http;
pub mod logging;
pub mod middleware;
pub mod routes;

pub use routes::create_router;
pub use routes::health::{check_health, HealthStatus};
