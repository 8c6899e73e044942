use std::sync::Arc;

use axum::{
    routing::{delete, get},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

mod config;
mod error;
mod handlers;
mod models;
mod store;

use crate::config::Config;
use crate::store::JsonStore;

/// Shared application state — cheap to clone (all heap behind Arc).
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<JsonStore>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    // Structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,cinema_service=debug".parse().unwrap()),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    info!("Cinema Service — movies · events · users · bookings");
    info!("Backing store: {}", config.db_path.display());

    let state = AppState {
        store: Arc::new(JsonStore::new(&config.db_path)),
    };

    let app = build_router(state, config.api_bookings);

    let addr = format!("{}:{}", config.host, config.port);
    info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_router(state: AppState, api_bookings: bool) -> Router {
    Router::new()
        // ── Health ──────────────────────────────────────────────────────────
        .route("/health", get(handlers::health))

        // ── Root mount (always carries bookings) ────────────────────────────
        .merge(resource_routes(true))

        // ── /api mount (bookings behind a config switch) ────────────────────
        .nest("/api", resource_routes(api_bookings))

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// One route set serving both mounts; the two mounts differ only in whether
/// the bookings routes are wired up.
fn resource_routes(enable_bookings: bool) -> Router<AppState> {
    let mut router = Router::new()
        .route("/latest", get(handlers::movies::latest_movies))
        .route("/upcomingMovies", get(handlers::movies::list_upcoming))
        .route("/upcoming/:id", get(handlers::movies::get_upcoming))
        .route("/events", get(handlers::events::list_events))
        .route("/events/:id", get(handlers::events::get_event))
        .route(
            "/users",
            get(handlers::users::list_users).post(handlers::users::create_user),
        )
        .route("/users/:id", get(handlers::users::get_user));

    if enable_bookings {
        router = router
            .route(
                "/bookings",
                get(handlers::bookings::list_bookings).post(handlers::bookings::create_booking),
            )
            .route("/bookings/:id", delete(handlers::bookings::delete_booking));
    }

    router
}
