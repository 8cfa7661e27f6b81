//! Model listing relay endpoint

use axum::{extract::State, Json};
use serde_json::value::RawValue;

use crate::error::RelayError;
use crate::server::state::AppState;

/// Relay the upstream model list
///
/// GET /api/list-model
pub async fn list_models(State(state): State<AppState>) -> Result<Json<Box<RawValue>>, RelayError> {
    let api_key = state.api_key()?;
    let body = state.groq.list_models(api_key).await?;

    Ok(Json(body))
}
