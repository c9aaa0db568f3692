//! Vidhigya backend
//!
//! An in-memory REST store for the legal community app, plus the resilient
//! data-access session the web client uses to fall back to offline data.

pub mod api;
pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod store;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::{Config, LogFormat};
use models::{BlogEntry, CourtHearing, JobOpening, LegalNews, Member, Post};
use store::CollectionStore;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<CollectionStore>,
    pub config: Arc<Config>,
}

/// Install the global tracing subscriber.
pub fn init_tracing(log_level: &str, format: LogFormat) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    let registry = tracing_subscriber::registry().with(env_filter);

    match format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/health", get(api::health_check))
        .route(
            "/posts",
            get(api::list_collection::<Post>).post(api::create_post),
        )
        .route("/members", get(api::list_collection::<Member>))
        .route("/jobs", get(api::list_collection::<JobOpening>))
        .route("/hearings", get(api::list_collection::<CourtHearing>))
        .route("/news", get(api::list_collection::<LegalNews>))
        .route("/blogs", get(api::list_collection::<BlogEntry>))
        .fallback(api::api_not_found);

    // Everything outside /api belongs to the single-page app
    let static_dir = &state.config.static_dir;
    let spa = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .nest("/api", api_routes)
        .fallback_service(spa)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
