//! Readiness endpoint

use axum::{Router, extract::State, response::IntoResponse, routing::get};
use axum_helpers::{HealthCheckFuture, run_health_checks};
use database::mongodb::check_health_detailed;
use messaging::nats::is_connected;

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(readiness_check))
        .with_state(state)
}

/// Ready when MongoDB answers a ping and the NATS client is connected
async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    let checks: Vec<(&str, HealthCheckFuture<'_>)> = vec![
        (
            "mongodb",
            Box::pin(async {
                let status = check_health_detailed(&state.mongo_client).await;
                tracing::debug!(response_time_ms = status.response_time_ms, "MongoDB ping");
                match status.message {
                    None if status.healthy => Ok(()),
                    message => Err(message.unwrap_or_else(|| "ping failed".to_string())),
                }
            }),
        ),
        (
            "nats",
            Box::pin(async {
                if is_connected(state.publisher.client()) {
                    Ok(())
                } else {
                    Err("not connected".to_string())
                }
            }),
        ),
    ];

    run_health_checks(checks).await
}
