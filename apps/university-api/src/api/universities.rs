//! Wires the universities domain to MongoDB and the shared NATS publisher.

use axum::Router;
use domain_universities::{MongoUniversityRepository, UniversityService, handlers};
use std::sync::Arc;

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    let repository = MongoUniversityRepository::new(state.db.clone());
    let service = UniversityService::from_shared(Arc::new(repository), state.publisher.clone());

    handlers::router(service)
}
