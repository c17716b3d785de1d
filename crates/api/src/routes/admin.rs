//! Route definitions for the admin surface.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/api/admin`. Every handler requires the admin
/// bearer token.
///
/// ```text
/// GET    /projects             -> list (with display widgets)
/// POST   /projects             -> create
/// GET    /projects/{id}        -> get_by_id
/// PUT    /projects/{id}        -> update
/// DELETE /projects/{id}        -> delete
/// PUT    /projects/{id}/cover  -> upload_cover (multipart)
/// DELETE /projects/{id}/cover  -> clear_cover
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/projects", get(admin::list).post(admin::create))
        .route(
            "/projects/{id}",
            get(admin::get_by_id)
                .put(admin::update)
                .delete(admin::delete),
        )
        .route(
            "/projects/{id}/cover",
            put(admin::upload_cover).delete(admin::clear_cover),
        )
}
