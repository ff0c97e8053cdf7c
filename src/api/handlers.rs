use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde_json::{json, Value};
use std::sync::Arc;

use super::error::ApiError;
use super::AppState;
use crate::model::{Fruit, FruitId, InvalidInput};
use crate::service::ServiceError;

/// GET /health
pub async fn health(State(state): State<Arc<AppState>>) -> Result<Json<Value>, ApiError> {
    let fruits = state
        .service
        .store()
        .len()
        .map_err(ServiceError::from)?;

    Ok(Json(json!({
        "status": "healthy",
        "service": "fruitdb",
        "fruits": fruits
    })))
}

/// GET /fruits
pub async fn list_fruits(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Fruit>>, ApiError> {
    Ok(Json(state.service.get_all_fruits()?))
}

/// GET /fruits/:id
///
/// An id that is not a positive integer in canonical decimal form can never
/// match a record, so it is reported as not found.
pub async fn get_fruit(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Fruit>, ApiError> {
    let id = parse_id(&id)
        .ok_or_else(|| ApiError::not_found(format!("fruit not found: {}", id)))?;

    Ok(Json(state.service.get_fruit_by_id(id)?))
}

/// Accept only ASCII digits without a leading zero, so every id has one
/// spelling in a path.
fn parse_id(raw: &str) -> Option<FruitId> {
    if raw.is_empty() || raw.starts_with('0') || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// POST /fruits
pub async fn create_fruit(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<(StatusCode, Json<Fruit>), ApiError> {
    let payload: Value = serde_json::from_slice(&body)
        .map_err(|e| ServiceError::from(InvalidInput::MalformedJson(e.to_string())))?;

    let fruit = state.service.create_fruit(&payload)?;
    Ok((StatusCode::CREATED, Json(fruit)))
}
