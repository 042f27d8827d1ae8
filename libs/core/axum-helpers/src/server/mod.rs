//! Server infrastructure module.
//!
//! This module provides:
//! - Router setup with OpenAPI documentation and request tracing
//! - Liveness endpoint and a helper for readiness checks
//! - Graceful shutdown with a bounded cleanup step

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{create_production_app, create_router};
pub use health::{HealthCheckFuture, HealthResponse, health_router, run_health_checks};
pub use shutdown::{ShutdownCoordinator, shutdown_signal};
