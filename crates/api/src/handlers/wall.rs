//! Handlers for the public HTML pages.

use axum::extract::{Path, Query, State};
use axum::http::header::USER_AGENT;
use axum::http::HeaderMap;
use axum::response::Html;
use serde::Deserialize;
use wall_core::error::CoreError;
use wall_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::projects::ApiProject;
use crate::pages::{self, PageTemplate};
use crate::state::AppState;

/// Query parameters for the listing page.
#[derive(Debug, Deserialize)]
pub struct WallParams {
    /// Opaque seed forwarded to the client-side layout script.
    pub seed: Option<String>,
}

/// GET /
///
/// The wall: every project in presentation order, rendered with the
/// desktop or mobile template depending on the User-Agent. An empty
/// project set renders an empty wall, not an error.
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<WallParams>,
    headers: HeaderMap,
) -> AppResult<Html<String>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    let projects: Vec<ApiProject> = projects
        .iter()
        .map(|p| ApiProject::from_project(p, &state.config.media_url))
        .collect();

    let user_agent = headers
        .get(USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    let template = PageTemplate::select(user_agent);
    let seed = params.seed.as_deref().unwrap_or("");

    tracing::debug!(?template, projects = projects.len(), "Rendering wall");
    Ok(Html(pages::render_index(
        &state.config,
        template,
        &projects,
        seed,
    )))
}

/// GET /p/{slug}/
///
/// Detail fragment for one project, fetched into the modal by the
/// listing pages. Unknown slugs are a 404.
pub async fn detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Html<String>> {
    let project = ProjectRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Project",
                key: slug.clone(),
            })
        })?;
    Ok(Html(pages::render_detail_fragment(&state.config, &project)))
}
