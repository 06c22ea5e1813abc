use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable. The pool is the only handle on storage; it is built
/// once in `main` and injected here.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: pcshowdown_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
