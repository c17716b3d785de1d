//! Handlers for the admin surface (`/api/admin`).
//!
//! The admin console is an external client; these endpoints give it
//! full CRUD over projects plus cover upload, all guarded by
//! [`AdminToken`]. Listing rows carry the two display widgets the
//! console shows inline (color swatch, cover thumbnail) as ready-made
//! HTML snippets.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use wall_core::cover::cover_extension;
use wall_core::error::CoreError;
use wall_core::html::escape;
use wall_core::project::{
    validate_accent_color, validate_description, validate_slug, validate_title,
};
use wall_core::types::{DbId, Timestamp};
use wall_db::models::project::{CreateProject, Project, UpdateProject};
use wall_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminToken;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Listing rows with display widgets
// ---------------------------------------------------------------------------

/// An admin listing row: the full project plus display widgets.
#[derive(Debug, Serialize)]
pub struct AdminProjectRow {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub cover: Option<String>,
    pub cover_url: Option<String>,
    pub accent_color: String,
    pub priority: i32,
    pub created_at: Timestamp,
    /// Public detail-page link for the console's view-on-site action.
    pub canonical_url: String,
    /// Inline color swatch snippet shown next to the stored value.
    pub accent_color_display: String,
    /// 50x50 thumbnail snippet, or a textual placeholder without a cover.
    pub cover_preview: String,
}

impl AdminProjectRow {
    fn from_project(project: &Project, media_url: &str) -> Self {
        let cover_url = project.cover_url(media_url);
        AdminProjectRow {
            id: project.id,
            title: project.title.clone(),
            slug: project.slug.clone(),
            description: project.description.clone(),
            cover: project.cover.clone(),
            accent_color: project.accent_color.clone(),
            priority: project.priority,
            created_at: project.created_at,
            canonical_url: project.canonical_url(),
            accent_color_display: accent_color_display(&project.accent_color),
            cover_preview: cover_preview(cover_url.as_deref()),
            cover_url,
        }
    }
}

/// Swatch snippet rendered next to the stored accent color value.
fn accent_color_display(accent_color: &str) -> String {
    let color = escape(accent_color);
    format!(
        "<span style=\"display: inline-block; width: 20px; height: 20px; \
         background-color: {color}; border: 1px solid #ccc; \
         vertical-align: middle;\"></span> {color}"
    )
}

/// Thumbnail snippet for the cover column.
fn cover_preview(cover_url: Option<&str>) -> String {
    match cover_url {
        Some(url) => format!(
            "<img src=\"{}\" style=\"width: 50px; height: 50px; \
             object-fit: cover; border-radius: 4px;\" />",
            escape(url)
        ),
        None => "No cover".to_string(),
    }
}

fn project_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Project",
        key: id.to_string(),
    })
}

// ---------------------------------------------------------------------------
// CRUD endpoints
// ---------------------------------------------------------------------------

/// GET /api/admin/projects
///
/// All projects in presentation order, with display widgets.
pub async fn list(
    _admin: AdminToken,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<AdminProjectRow>>>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    let rows = projects
        .iter()
        .map(|p| AdminProjectRow::from_project(p, &state.config.media_url))
        .collect();
    Ok(Json(DataResponse { data: rows }))
}

/// POST /api/admin/projects
///
/// Create a project. A missing or blank slug is derived from the title;
/// an explicit slug must already be in canonical form. A title that
/// derives an empty slug is rejected before it can hit the schema
/// constraint.
pub async fn create(
    _admin: AdminToken,
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<DataResponse<Project>>)> {
    validate_title(&input.title)?;
    validate_description(&input.description)?;
    if let Some(accent) = input.accent_color.as_deref() {
        validate_accent_color(accent)?;
    }
    if let Some(slug) = input.explicit_slug() {
        validate_slug(slug)?;
    }
    if input.resolved_slug().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "title does not produce a usable slug; supply one explicitly".into(),
        )));
    }

    let project = ProjectRepo::create(&state.pool, &input).await?;

    tracing::info!(project_id = project.id, slug = %project.slug, "Project created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: project })))
}

/// GET /api/admin/projects/{id}
pub async fn get_by_id(
    _admin: AdminToken,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Project>>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| project_not_found(id))?;
    Ok(Json(DataResponse { data: project }))
}

/// PUT /api/admin/projects/{id}
///
/// Partial update; the slug and creation time never change.
pub async fn update(
    _admin: AdminToken,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<DataResponse<Project>>> {
    if let Some(title) = input.title.as_deref() {
        validate_title(title)?;
    }
    if let Some(description) = input.description.as_deref() {
        validate_description(description)?;
    }
    if let Some(accent) = input.accent_color.as_deref() {
        validate_accent_color(accent)?;
    }

    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| project_not_found(id))?;

    tracing::info!(project_id = id, "Project updated");
    Ok(Json(DataResponse { data: project }))
}

/// DELETE /api/admin/projects/{id}
pub async fn delete(
    _admin: AdminToken,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ProjectRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(project_not_found(id));
    }

    tracing::info!(project_id = id, "Project deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Cover upload
// ---------------------------------------------------------------------------

/// PUT /api/admin/projects/{id}/cover
///
/// Accepts a multipart form with a required `cover` field. The image
/// format is sniffed from the bytes, the file is stored under
/// `MEDIA_ROOT/covers/` with a generated name, and the project row is
/// pointed at it. A previous cover file is left in place; only the
/// reference moves.
pub async fn upload_cover(
    _admin: AdminToken,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    mut multipart: Multipart,
) -> AppResult<Json<DataResponse<Project>>> {
    // 404 before reading the body for unknown projects.
    if ProjectRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Err(project_not_found(id));
    }

    let mut cover_bytes: Option<Vec<u8>> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "cover" => {
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                cover_bytes = Some(data.to_vec());
            }
            _ => {} // ignore unknown fields
        }
    }

    let bytes =
        cover_bytes.ok_or_else(|| AppError::BadRequest("Missing required 'cover' field".into()))?;
    let ext = cover_extension(&bytes)?;

    let covers_dir = state.config.media_root.join("covers");
    tokio::fs::create_dir_all(&covers_dir)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    let stored_name = format!("{}.{ext}", uuid::Uuid::now_v7());
    tokio::fs::write(covers_dir.join(&stored_name), &bytes)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    let cover_path = format!("covers/{stored_name}");
    let project = ProjectRepo::set_cover(&state.pool, id, Some(&cover_path))
        .await?
        .ok_or_else(|| project_not_found(id))?;

    tracing::info!(project_id = id, cover = %cover_path, "Cover stored");
    Ok(Json(DataResponse { data: project }))
}

/// DELETE /api/admin/projects/{id}/cover
///
/// Clear the cover reference. The stored file is not removed; orphaned
/// media is reclaimed out of band.
pub async fn clear_cover(
    _admin: AdminToken,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Project>>> {
    let project = ProjectRepo::set_cover(&state.pool, id, None)
        .await?
        .ok_or_else(|| project_not_found(id))?;

    tracing::info!(project_id = id, "Cover cleared");
    Ok(Json(DataResponse { data: project }))
}
