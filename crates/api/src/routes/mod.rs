pub mod build;
pub mod health;
pub mod link;
pub mod pages;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /pcs                              create (POST)
/// /pcs/{after_id}/{page_size}       list (GET)
/// /pcs/{token}                      get, replace, delete
///
/// /links/{token}                    link pair visible to the token holder
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/pcs", build::router())
        .nest("/links", link::router())
}
