use axum::extract::{Path, State};
use axum::Json;
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::models::{find_by_id, Record};
use crate::AppState;

// ── Latest ────────────────────────────────────────────────────────────────────

pub async fn latest_movies(State(state): State<AppState>) -> AppResult<Json<Vec<Record>>> {
    let doc = state.store.load().await?;

    info!(count = doc.latest.len(), "Listed latest movies");
    Ok(Json(doc.latest))
}

// ── Upcoming ──────────────────────────────────────────────────────────────────

pub async fn list_upcoming(State(state): State<AppState>) -> AppResult<Json<Vec<Record>>> {
    let doc = state.store.load().await?;

    info!(count = doc.upcoming_movies.len(), "Listed upcoming movies");
    Ok(Json(doc.upcoming_movies))
}

pub async fn get_upcoming(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Record>> {
    let doc = state.store.load().await?;

    find_by_id(&doc.upcoming_movies, &id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Movie not found".to_string()))
}
