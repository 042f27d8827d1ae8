//! API routes module

pub mod health;
pub mod universities;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/universities", universities::router(state))
        .merge(health::router(state.clone()))
}
