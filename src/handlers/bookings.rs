use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};
use tracing::info;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{BookingFilters, Record};
use crate::AppState;

pub async fn list_bookings(
    State(state): State<AppState>,
    Query(filters): Query<BookingFilters>,
) -> AppResult<Json<Vec<Record>>> {
    let doc = state.store.load().await?;

    // An empty `user=` parameter means no filter, same as leaving it off.
    let user_filter = filters.user.as_deref().filter(|u| !u.is_empty());
    let bookings = match user_filter {
        None => doc.bookings,
        Some(user) => doc
            .bookings
            .into_iter()
            .filter(|b| b.get("user").and_then(Value::as_str) == Some(user))
            .collect(),
    };

    info!(count = bookings.len(), user = user_filter, "Listed bookings");
    Ok(Json(bookings))
}

pub async fn create_booking(
    State(state): State<AppState>,
    Json(mut payload): Json<Record>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let id = Uuid::new_v4().to_string();
    payload.insert("id".to_string(), Value::String(id.clone()));

    let booking = state
        .store
        .update(move |doc| {
            doc.bookings.push(payload.clone());
            Ok(payload)
        })
        .await?;

    let user = booking.get("user").and_then(|v| v.as_str());
    info!(%id, user, "Created booking");

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Booking saved", "booking": booking })),
    ))
}

pub async fn delete_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Value>> {
    state
        .store
        .update(|doc| {
            let before = doc.bookings.len();
            doc.bookings
                .retain(|b| b.get("id").and_then(Value::as_str) != Some(id.as_str()));
            if doc.bookings.len() == before {
                return Err(AppError::NotFound("Booking not found".to_string()));
            }
            Ok(())
        })
        .await?;

    info!(%id, "Deleted booking");

    Ok(Json(json!({ "message": "Booking deleted" })))
}
