//! Handlers for the public `/api/projects/` listing.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use wall_core::types::{DbId, Timestamp};
use wall_db::models::project::Project;
use wall_db::repositories::ProjectRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// Flat wire representation of a project.
///
/// Also embedded verbatim as the `window.mobileData` bootstrap of the
/// mobile listing page, so API consumers and the page scripts see one
/// shape.
#[derive(Debug, Clone, Serialize)]
pub struct ApiProject {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub description: String,
    /// Word-boundary excerpt of the description.
    pub excerpt: String,
    pub accent_color: String,
    pub priority: i32,
    /// Public URL under the media prefix, or `null` without a cover.
    pub cover_url: Option<String>,
    pub created_at: Timestamp,
}

impl ApiProject {
    /// Build the wire representation, deriving the excerpt and cover URL.
    pub fn from_project(project: &Project, media_url: &str) -> Self {
        ApiProject {
            id: project.id,
            title: project.title.clone(),
            slug: project.slug.clone(),
            description: project.description.clone(),
            excerpt: project.excerpt(),
            accent_color: project.accent_color.clone(),
            priority: project.priority,
            cover_url: project.cover_url(media_url),
            created_at: project.created_at,
        }
    }
}

/// Response payload for the public projects listing.
#[derive(Debug, Serialize)]
pub struct ProjectsResponse {
    pub projects: Vec<ApiProject>,
}

/// GET /api/projects/
///
/// All projects in presentation order as flat JSON records.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<ProjectsResponse>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    let projects = projects
        .iter()
        .map(|p| ApiProject::from_project(p, &state.config.media_url))
        .collect();
    Ok(Json(ProjectsResponse { projects }))
}
