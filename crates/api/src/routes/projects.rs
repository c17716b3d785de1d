//! Route definitions for the public projects listing.

use axum::routing::get;
use axum::Router;

use crate::handlers::projects;
use crate::state::AppState;

/// Routes mounted at `/api`.
///
/// ```text
/// GET /projects/   -> public JSON listing
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/projects/", get(projects::list))
}
