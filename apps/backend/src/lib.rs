pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::services::game::GameService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub game: Arc<GameService>,
}

impl AppState {
    pub fn new(game: GameService) -> Self {
        Self {
            game: Arc::new(game),
        }
    }
}

/// Build the API router without transport layers.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Session routes
        .route("/api/session", get(routes::session::show))
        .route("/api/session/start", post(routes::session::start))
        .route("/api/session/guess", post(routes::session::guess))
        .route("/api/session/reset", post(routes::session::reset))
        // Catalog routes
        .route("/api/catalog", get(routes::catalog::board))
        // Notifications
        .route("/api/events", get(routes::events::stream))
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    tracing::info!("Loading country catalog...");
    let catalog = config.load_catalog()?;
    tracing::info!(
        "Loaded {} countries{}",
        catalog.len(),
        config
            .catalog_path
            .as_ref()
            .map(|p| format!(" from {}", p.display()))
            .unwrap_or_default()
    );

    let state = AppState::new(GameService::new(
        Arc::new(catalog),
        config.session_duration,
    ));

    let app = router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr = config.addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
