use axum_helpers::server::{create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_universities::{NatsUniversityEventPublisher, UniversityEventPublisher};
use std::sync::Arc;
use tracing::{info, warn};

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!("Connecting to MongoDB at {}", config.mongodb.url());
    let mongo_client =
        database::mongodb::connect_from_config_with_retry(&config.mongodb, None).await?;
    let db = mongo_client.database(config.mongodb.database());
    info!(
        "Successfully connected to MongoDB database: {}",
        config.mongodb.database()
    );

    // On failure mongo_client is dropped with this frame
    let nats_client = messaging::nats::connect(&config.nats).await?;
    let publisher = Arc::new(NatsUniversityEventPublisher::new(
        nats_client,
        config.events_subject.clone(),
    ));
    info!(subject = %publisher.subject(), "Publishing university events");

    let state = AppState {
        config,
        mongo_client,
        db,
        publisher,
    };

    let routes = api::routes(&state).merge(health_router(state.config.app));
    let app = create_router::<openapi::ApiDoc>(routes);

    let AppState {
        config,
        mongo_client,
        publisher,
        ..
    } = state;

    info!(
        "Starting University API ({:?} shutdown timeout)",
        config.shutdown_timeout
    );

    create_production_app(app, &config.server, config.shutdown_timeout, async move {
        info!("Shutting down: closing event publisher");
        if let Err(e) = publisher.close().await {
            warn!("Failed to flush pending events: {}", e);
        }

        // MongoDB client closes automatically on drop
        drop(mongo_client);
        info!("Connections closed");
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("University API shutdown complete");
    Ok(())
}
