//! Application state management.
//!
//! Connections are opened once in `main` and shared by every request.

use domain_universities::NatsUniversityEventPublisher;
use mongodb::{Client, Database};
use std::sync::Arc;

/// Shared application state.
///
/// Cloning is cheap: the MongoDB client is a pooled handle and the publisher is
/// behind an `Arc`, so every clone talks to the same connections.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub mongo_client: Client,
    pub db: Database,
    /// Also held by the shutdown cleanup, which closes it once
    pub publisher: Arc<NatsUniversityEventPublisher>,
}
