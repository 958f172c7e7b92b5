//! Request handlers.

use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::debug;

use super::error::ApiError;
use super::router::ApiState;
use crate::domain::entities::{AvatarLookup, PlayerToken};

/// Query string of the lookup endpoint.
#[derive(Debug, Deserialize)]
pub struct LookupQuery {
    /// Username or numeric RID.
    pub player: Option<String>,
}

/// `GET /api/rockstar?player=<token>`
///
/// The value is classified as given: surrounding whitespace makes it a name.
///
/// # Errors
/// Returns [`ApiError::MissingPlayer`] when `player` is missing or blank.
pub async fn lookup_avatars(
    State(state): State<ApiState>,
    Query(query): Query<LookupQuery>,
) -> Result<Json<AvatarLookup>, ApiError> {
    let token = query
        .player
        .as_deref()
        .filter(|player| !player.trim().is_empty())
        .and_then(PlayerToken::parse)
        .ok_or(ApiError::MissingPlayer)?;

    debug!(player = %token, "Lookup requested");
    Ok(Json(state.lookup.execute(&token).await))
}

/// `GET /health`
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
