//! Handlers for the `/pcs` resource.
//!
//! Builds are addressed only by link token. Edit tokens may read, replace,
//! and delete; view tokens may only read.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use pcshowdown_core::build::{validate_build_fields, validate_part_qty};
use pcshowdown_core::pagination::{clamp_after_id, clamp_page_size};
use pcshowdown_db::models::build::{BuildSummary, CreateBuild, FullBuild, UpdateBuild};
use pcshowdown_db::models::link::Links;
use pcshowdown_db::models::part::NewPart;
use pcshowdown_db::repositories::BuildRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/pcs
///
/// The body is decoded strictly; unknown fields are rejected with 400.
pub async fn create(
    State(state): State<AppState>,
    req: Result<Json<CreateBuild>, JsonRejection>,
) -> AppResult<Json<Links>> {
    let Json(input) = req?;
    validate_submission(&input.name, &input.info, &input.parts)?;

    let created = BuildRepo::create(&state.pool, &input).await?;
    tracing::info!(
        pc_id = created.pc_id,
        parts = input.parts.len(),
        images = input.images.len(),
        "Build created"
    );
    Ok(Json(created.links))
}

/// GET /api/v1/pcs/{after_id}/{page_size}
///
/// Keyset pagination: returns builds with id greater than `after_id`.
/// A page size of 0 yields an empty page; negative sizes are a 400.
pub async fn list(
    State(state): State<AppState>,
    Path((after_id, page_size)): Path<(String, String)>,
) -> AppResult<Json<Vec<BuildSummary>>> {
    let after_id = parse_path_number("after_id", &after_id)?;
    let page_size = parse_path_number("page_size", &page_size)?;

    let after_id = clamp_after_id(after_id);
    let limit = clamp_page_size(page_size, state.config.max_page_size)?;

    let page = BuildRepo::list_after(&state.pool, after_id, limit).await?;
    tracing::debug!(after_id, limit, count = page.len(), "Listed builds");
    Ok(Json(page))
}

/// GET /api/v1/pcs/{token}
pub async fn get_by_token(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> AppResult<Json<FullBuild>> {
    let build = BuildRepo::find_by_token(&state.pool, &token).await?;
    Ok(Json(build))
}

/// PUT /api/v1/pcs/{token}
///
/// Fully replaces name, info, parts, and images. Requires the edit token.
pub async fn update(
    State(state): State<AppState>,
    Path(token): Path<String>,
    req: Result<Json<UpdateBuild>, JsonRejection>,
) -> AppResult<Json<FullBuild>> {
    let Json(input) = req?;
    validate_submission(&input.name, &input.info, &input.parts)?;

    let build = BuildRepo::update(&state.pool, &token, &input).await?;
    tracing::info!(pc_id = build.pc_id, "Build replaced");
    Ok(Json(build))
}

/// DELETE /api/v1/pcs/{token}
pub async fn delete(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> AppResult<StatusCode> {
    let pc_id = BuildRepo::delete(&state.pool, &token).await?;
    tracing::info!(pc_id, "Build deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn validate_submission(name: &str, info: &str, parts: &[NewPart]) -> AppResult<()> {
    validate_build_fields(name, info)?;
    for part in parts {
        validate_part_qty(part.qty)?;
    }
    Ok(())
}

fn parse_path_number(field: &str, raw: &str) -> AppResult<i64> {
    raw.parse()
        .map_err(|_| AppError::BadRequest(format!("{field} must be an integer, got '{raw}'")))
}
