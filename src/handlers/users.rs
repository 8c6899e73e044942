use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};
use tracing::info;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{find_by_id, Record};
use crate::AppState;

pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<Record>>> {
    let doc = state.store.load().await?;

    info!(count = doc.users.len(), "Listed users");
    Ok(Json(doc.users))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Record>> {
    let doc = state.store.load().await?;

    find_by_id(&doc.users, &id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))
}

pub async fn create_user(
    State(state): State<AppState>,
    Json(mut payload): Json<Record>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let id = Uuid::new_v4().to_string();
    payload.insert("id".to_string(), Value::String(id.clone()));

    let user = state
        .store
        .update(move |doc| {
            doc.users.push(payload.clone());
            Ok(payload)
        })
        .await?;

    info!(%id, "Created user");

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "User added successfully", "user": user })),
    ))
}
