//! Project entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use wall_core::excerpt::{excerpt, DEFAULT_EXCERPT_CHARS};
use wall_core::slug::slugify;
use wall_core::types::{DbId, Timestamp};

/// A row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub title: String,
    /// URL-safe identifier, unique and non-empty.
    pub slug: String,
    pub description: String,
    /// Media-relative path of the cover image (`covers/<name>.<ext>`),
    /// if one has been uploaded.
    pub cover: Option<String>,
    /// CSS color token themed onto tiles and the detail modal.
    pub accent_color: String,
    /// Higher sorts earlier on the wall and renders larger.
    pub priority: i32,
    pub created_at: Timestamp,
}

impl Project {
    /// Word-boundary excerpt of the description at the default length.
    pub fn excerpt(&self) -> String {
        self.excerpt_with(DEFAULT_EXCERPT_CHARS)
    }

    /// Word-boundary excerpt of the description at `max_chars`.
    pub fn excerpt_with(&self, max_chars: usize) -> String {
        excerpt(&self.description, max_chars)
    }

    /// Site-relative URL of the detail page.
    pub fn canonical_url(&self) -> String {
        format!("/p/{}/", self.slug)
    }

    /// Public URL of the cover image, if one is set.
    ///
    /// `media_url` is the configured media prefix and ends with `/`.
    pub fn cover_url(&self, media_url: &str) -> Option<String> {
        self.cover
            .as_deref()
            .map(|path| format!("{media_url}{path}"))
    }
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub title: String,
    /// Derived from `title` when omitted or blank.
    pub slug: Option<String>,
    pub description: String,
    /// Defaults to the fixed dark accent when omitted.
    pub accent_color: Option<String>,
    /// Defaults to 0.
    pub priority: Option<i32>,
}

impl CreateProject {
    /// The explicit slug as it would persist: trimmed, or `None` when
    /// the field is absent or blank. Explicit values are never
    /// rewritten; the create path rejects non-canonical ones with
    /// `wall_core::project::validate_slug` before they reach the table.
    pub fn explicit_slug(&self) -> Option<&str> {
        self.slug.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    /// The slug this input will persist under: the explicit slug when
    /// present and non-blank, otherwise derived from the title.
    pub fn resolved_slug(&self) -> String {
        match self.explicit_slug() {
            Some(s) => s.to_string(),
            None => slugify(&self.title),
        }
    }
}

/// DTO for updating an existing project. All fields are optional.
///
/// `slug` is deliberately absent: it is fixed at creation time so
/// published URLs keep working, and `created_at` is server-assigned.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProject {
    pub title: Option<String>,
    pub description: Option<String>,
    pub accent_color: Option<String>,
    pub priority: Option<i32>,
}
