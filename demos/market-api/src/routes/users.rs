use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::Json;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::state::AppState;

/// GET /api/users/:clerk_id
///
/// Look up a seller's public profile by Clerk id.
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(clerk_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let profile = state.sdk.users().get(&clerk_id).await?;
    Ok(Json(json!({ "data": profile })))
}
