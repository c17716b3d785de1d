//! Repository for the `projects` table.

use sqlx::PgPool;
use wall_core::project::DEFAULT_ACCENT_COLOR;
use wall_core::types::DbId;

use crate::models::project::{CreateProject, Project, UpdateProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, slug, description, cover, accent_color, priority, created_at";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    ///
    /// The slug comes from [`CreateProject::resolved_slug`]; a duplicate
    /// fails `uq_projects_slug` and an empty one fails
    /// `ck_projects_slug_not_empty`.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (title, slug, description, accent_color, priority)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.title)
            .bind(input.resolved_slug())
            .bind(&input.description)
            .bind(input.accent_color.as_deref().unwrap_or(DEFAULT_ACCENT_COLOR))
            .bind(input.priority.unwrap_or(0))
            .fetch_one(pool)
            .await
    }

    /// List all projects in presentation order: highest priority first,
    /// newest first within equal priority.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM projects ORDER BY priority DESC, created_at DESC");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// Fetch a project by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch a project by slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE slug = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Update a project. Only fields set in `input` are applied; the
    /// slug and creation time are never touched. Returns `None` when no
    /// such project exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                accent_color = COALESCE($4, accent_color),
                priority = COALESCE($5, priority)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.accent_color)
            .bind(input.priority)
            .fetch_optional(pool)
            .await
    }

    /// Set or clear the stored cover path. Returns `None` when no such
    /// project exists.
    pub async fn set_cover(
        pool: &PgPool,
        id: DbId,
        cover: Option<&str>,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("UPDATE projects SET cover = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(cover)
            .fetch_optional(pool)
            .await
    }

    /// Delete a project. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
