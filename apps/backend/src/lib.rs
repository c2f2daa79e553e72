pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::services::session::SessionService;
use crate::store::DeckStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: DeckStore,
    pub sessions: SessionService,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            store: DeckStore::new(),
            sessions: SessionService::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Deck routes
        .route("/api/decks", post(routes::decks::create))
        .route("/api/decks", get(routes::decks::list))
        .route("/api/decks/{id}/cards", get(routes::decks::cards))
        // Session routes
        .route("/api/sessions", post(routes::session::start))
        .route("/api/sessions/{id}", get(routes::session::get))
        .route("/api/sessions/{id}", delete(routes::session::abandon))
        .route("/api/sessions/{id}/answer", post(routes::session::answer))
        .route("/api/sessions/{id}/skip", post(routes::session::skip))
        .route("/api/sessions/{id}/finish", post(routes::session::finish))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
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

    let state = AppState::new();
    let app = app(state);

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("{}:{}", host, port);

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
