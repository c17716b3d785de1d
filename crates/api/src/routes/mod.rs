pub mod admin;
pub mod health;
pub mod projects;
pub mod wall;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects/                   public JSON listing
///
/// /admin/projects              list, create           (admin token)
/// /admin/projects/{id}         get, update, delete
/// /admin/projects/{id}/cover   upload, clear
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(projects::router())
        .nest("/admin", admin::router())
}
