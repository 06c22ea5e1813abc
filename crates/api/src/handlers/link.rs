//! Handlers for the `/links` resource.

use axum::extract::{Path, State};
use axum::Json;
use pcshowdown_db::models::link::Links;
use pcshowdown_db::repositories::LinkRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/v1/links/{token}
///
/// Returns the links the token holder may share. A view token never
/// reveals the edit token.
pub async fn get_by_token(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> AppResult<Json<Links>> {
    let links = LinkRepo::link_pair(&state.pool, &token).await?;
    Ok(Json(links))
}
