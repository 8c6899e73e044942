use axum::extract::{Path, State};
use axum::Json;
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::models::{find_by_id, Record};
use crate::AppState;

pub async fn list_events(State(state): State<AppState>) -> AppResult<Json<Vec<Record>>> {
    let doc = state.store.load().await?;

    info!(count = doc.events.len(), "Listed events");
    Ok(Json(doc.events))
}

pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Record>> {
    let doc = state.store.load().await?;

    find_by_id(&doc.events, &id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Event not found".to_string()))
}
