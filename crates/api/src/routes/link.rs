//! Route definitions for the `/links` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::link;
use crate::state::AppState;

/// Routes mounted at `/links`.
///
/// ```text
/// GET /{token}    -> get_by_token
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{token}", get(link::get_by_token))
}
