//! Front-end page routes.
//!
//! Each page is a fixed HTML file under `<static_dir>/html`. Any other
//! non-API path is left to the `ServeDir` fallback in the router.

use std::path::Path;

use axum::routing::get_service;
use axum::Router;
use tower_http::services::ServeFile;

use crate::state::AppState;

/// Page paths and their files, relative to the static directory.
const PAGES: &[(&str, &str)] = &[
    ("/", "html/index.html"),
    ("/addpc", "html/addpc.html"),
    ("/browse", "html/browsepcs.html"),
];

/// Mount the page routes (root level, GET only).
pub fn router(static_dir: &Path) -> Router<AppState> {
    PAGES.iter().fold(Router::new(), |router, (path, file)| {
        router.route(path, get_service(ServeFile::new(static_dir.join(file))))
    })
}
