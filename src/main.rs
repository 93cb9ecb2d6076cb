//! Interview scheduler HTTP server entry point.

use std::sync::Arc;
use std::time::Duration;

use http::HeaderValue;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use interview_scheduler::adapters::http::{api_router, ApiState};
use interview_scheduler::adapters::http::{
    availability::AvailabilityHandlers, party::PartyHandlers, slots::SlotHandlers,
};
use interview_scheduler::adapters::postgres::{
    PostgresAvailabilityRepository, PostgresPartyRepository,
};
use interview_scheduler::application::handlers::availability::{
    DeleteAvailabilityHandler, GetAvailabilityHandler, ListAvailabilityHandler,
    SubmitAvailabilityHandler,
};
use interview_scheduler::application::handlers::party::{
    CreatePartyHandler, DeletePartyHandler, GetPartyHandler, ListPartiesHandler,
};
use interview_scheduler::application::handlers::slots::QueryCommonSlotsHandler;
use interview_scheduler::config::AppConfig;
use interview_scheduler::domain::scheduling::{AlignmentPolicy, SlotMerger};
use interview_scheduler::ports::{AvailabilityRepository, PartyRepository};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(&config.server.log_level)
        }))
        .init();

    tracing::info!(
        environment = %config.server.environment,
        "starting interview scheduler"
    );

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        tracing::info!("running database migrations");
        sqlx::migrate!("./migrations").run(&pool).await?;
    }

    let parties: Arc<dyn PartyRepository> = Arc::new(PostgresPartyRepository::new(pool.clone()));
    let availability: Arc<dyn AvailabilityRepository> =
        Arc::new(PostgresAvailabilityRepository::new(pool));

    let state = ApiState {
        parties: PartyHandlers::new(
            Arc::new(CreatePartyHandler::new(parties.clone())),
            Arc::new(GetPartyHandler::new(parties.clone())),
            Arc::new(ListPartiesHandler::new(parties.clone())),
            Arc::new(DeletePartyHandler::new(
                parties.clone(),
                availability.clone(),
            )),
        ),
        availability: AvailabilityHandlers::new(
            Arc::new(SubmitAvailabilityHandler::new(
                parties.clone(),
                availability.clone(),
                SlotMerger::new(AlignmentPolicy::HourAligned),
            )),
            Arc::new(GetAvailabilityHandler::new(
                parties.clone(),
                availability.clone(),
            )),
            Arc::new(ListAvailabilityHandler::new(
                parties.clone(),
                availability.clone(),
            )),
            Arc::new(DeleteAvailabilityHandler::new(
                parties.clone(),
                availability.clone(),
            )),
        ),
        slots: SlotHandlers::new(Arc::new(QueryCommonSlotsHandler::new(
            parties.clone(),
            availability.clone(),
        ))),
    };

    let cors = match config.server.cors_origins_list() {
        origins if origins.is_empty() => CorsLayer::permissive(),
        origins => {
            let origins = origins
                .iter()
                .map(|o| o.parse::<HeaderValue>())
                .collect::<Result<Vec<_>, _>>()?;
            CorsLayer::new().allow_origin(origins)
        }
    };

    let app = api_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(cors);

    let addr = config.server.socket_addr();
    tracing::info!(%addr, "listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
