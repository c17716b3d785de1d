//! Route definitions for the public HTML pages.
//!
//! Both paths keep their historical trailing-slash form; published
//! links depend on it.

use axum::routing::get;
use axum::Router;

use crate::handlers::wall;
use crate::state::AppState;

/// Routes mounted at the site root.
///
/// ```text
/// GET /            -> index (mosaic or mobile deck, by User-Agent)
/// GET /p/{slug}/   -> detail fragment for the modal
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(wall::index))
        .route("/p/{slug}/", get(wall::detail))
}
