//! Route definitions for the `/pcs` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::build;
use crate::state::AppState;

/// Routes mounted at `/pcs`.
///
/// ```text
/// POST   /                          -> create
/// GET    /{after_id}/{page_size}    -> list
/// GET    /{token}                   -> get_by_token
/// PUT    /{token}                   -> update
/// DELETE /{token}                   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(build::create))
        .route("/{after_id}/{page_size}", get(build::list))
        .route(
            "/{token}",
            get(build::get_by_token)
                .put(build::update)
                .delete(build::delete),
        )
}
