//! Server-rendered pages for the public wall.
//!
//! Rendering is plain string building returned as
//! [`axum::response::Html`]. The markup is a contract with the
//! client-side scripts served from `STATIC_URL`: `wall/layout.js` packs
//! the `.tile` elements inside `#wall-container` into a mosaic, and
//! `wall/mobile.js` drives the `.mobile-slide` deck from the
//! `window.mobileData` bootstrap. Class names and data attributes must
//! stay in sync with those scripts.

use serde::Serialize;
use wall_core::device::is_mobile_device;
use wall_core::html::{escape, linebreaksbr};
use wall_db::models::project::Project;

use crate::config::ServerConfig;
use crate::handlers::projects::ApiProject;

/// The two page templates the listing endpoint can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageTemplate {
    /// Full mosaic wall with client-side layout randomization.
    Desktop,
    /// Swipeable one-project-per-slide deck.
    Mobile,
}

impl PageTemplate {
    /// Select the template for a request's User-Agent.
    pub fn select(user_agent: &str) -> Self {
        if is_mobile_device(user_agent) {
            PageTemplate::Mobile
        } else {
            PageTemplate::Desktop
        }
    }
}

/// Render the listing page with the given template.
///
/// `seed` is the opaque value from the `?seed=` query parameter, passed
/// through for the layout script; an absent parameter arrives as `""`.
pub fn render_index(
    config: &ServerConfig,
    template: PageTemplate,
    projects: &[ApiProject],
    seed: &str,
) -> String {
    match template {
        PageTemplate::Desktop => render_desktop(config, projects, seed),
        PageTemplate::Mobile => render_mobile(config, projects),
    }
}

fn render_desktop(config: &ServerConfig, projects: &[ApiProject], seed: &str) -> String {
    let mut body = String::with_capacity(projects.len() * 256 + 512);
    body.push_str(&format!(
        "<main id=\"wall-container\" class=\"wall\" data-seed=\"{}\">\n",
        escape(seed)
    ));
    for project in projects {
        body.push_str(&format!(
            concat!(
                "<article class=\"tile\" data-slug=\"{slug}\" data-priority=\"{priority}\" ",
                "data-accent-color=\"{accent}\">\n",
                "<div class=\"tile-content\">\n",
                "<h2 class=\"tile-title\">{title}</h2>\n",
                "<p class=\"tile-excerpt\">{excerpt}</p>\n",
                "</div>\n",
                "</article>\n",
            ),
            slug = escape(&project.slug),
            priority = project.priority,
            accent = escape(&project.accent_color),
            title = escape(&project.title),
            excerpt = escape(&project.excerpt),
        ));
    }
    body.push_str("</main>\n");
    body.push_str("<button id=\"shuffle-btn\" class=\"shuffle-btn\" type=\"button\">Shuffle</button>\n");
    body.push_str(MODAL_SHELL);

    page(config, "wall.css", None, &body, "layout.js")
}

fn render_mobile(config: &ServerConfig, projects: &[ApiProject]) -> String {
    let mut body = String::with_capacity(projects.len() * 320 + 512);
    body.push_str("<main id=\"mobile-carousel\" class=\"mobile-carousel\">\n");
    for project in projects {
        let cover = match &project.cover_url {
            Some(url) => format!(
                "<div class=\"mobile-slide-cover\" style=\"background-image: url('{}')\"></div>\n",
                escape(url)
            ),
            None => String::new(),
        };
        body.push_str(&format!(
            concat!(
                "<div class=\"mobile-slide\" data-project-id=\"{id}\" data-slug=\"{slug}\">\n",
                "<div class=\"mobile-slide-content\">\n",
                "{cover}",
                "<div class=\"mobile-slide-text\">\n",
                "<h2 class=\"mobile-slide-title\">{title}</h2>\n",
                "<p class=\"mobile-slide-excerpt\">{excerpt}</p>\n",
                "<button class=\"mobile-slide-btn\" data-slug=\"{slug}\" type=\"button\">More</button>\n",
                "</div>\n",
                "</div>\n",
                "</div>\n",
            ),
            id = project.id,
            slug = escape(&project.slug),
            cover = cover,
            title = escape(&project.title),
            excerpt = escape(&project.excerpt),
        ));
    }
    body.push_str("</main>\n");

    body.push_str("<div class=\"mobile-indicators\">\n");
    for index in 0..projects.len() {
        body.push_str(&format!(
            "<button class=\"mobile-indicator\" data-index=\"{index}\" type=\"button\"></button>\n"
        ));
    }
    body.push_str("</div>\n");
    body.push_str(MODAL_SHELL);

    let bootstrap = format!(
        "window.mobileData = {};",
        script_json(&MobileBootstrap { projects })
    );
    page(config, "mobile.css", Some(bootstrap), &body, "mobile.js")
}

/// Render the detail fragment the listing pages fetch into the modal.
///
/// This is a fragment, not a full document: `layout.js` injects it into
/// `.modal-body` verbatim.
pub fn render_detail_fragment(config: &ServerConfig, project: &Project) -> String {
    let cover = match project.cover_url(&config.media_url) {
        Some(url) => format!(
            "<img class=\"project-cover\" src=\"{}\" alt=\"{}\">\n",
            escape(&url),
            escape(&project.title)
        ),
        None => String::new(),
    };
    format!(
        concat!(
            "<div class=\"project-detail\" data-slug=\"{slug}\" style=\"--accent-color: {accent}\">\n",
            "<h2 class=\"project-title\">{title}</h2>\n",
            "<div class=\"project-meta\">\n",
            "<p><strong>Created:</strong> {created}</p>\n",
            "</div>\n",
            "{cover}",
            "<div class=\"project-content\">\n",
            "<p class=\"project-description\">{description}</p>\n",
            "</div>\n",
            "</div>\n",
        ),
        slug = escape(&project.slug),
        accent = escape(&project.accent_color),
        title = escape(&project.title),
        created = project.created_at.format("%Y-%m-%d"),
        cover = cover,
        description = linebreaksbr(&project.description),
    )
}

/// Modal shell both listing templates include; the scripts fill
/// `.modal-body` and toggle the `active` class.
const MODAL_SHELL: &str = concat!(
    "<div id=\"project-modal\" class=\"modal\">\n",
    "<div class=\"modal-backdrop\"></div>\n",
    "<div class=\"modal-dialog\">\n",
    "<button class=\"modal-close\" type=\"button\" aria-label=\"Close\">&times;</button>\n",
    "<div class=\"modal-body\"></div>\n",
    "</div>\n",
    "</div>\n",
);

#[derive(Serialize)]
struct MobileBootstrap<'a> {
    projects: &'a [ApiProject],
}

/// Wrap a body in the document shell shared by both listing templates.
fn page(
    config: &ServerConfig,
    stylesheet: &str,
    bootstrap: Option<String>,
    body: &str,
    script: &str,
) -> String {
    let static_url = &config.static_url;
    let mut html = String::with_capacity(body.len() + 512);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape(&config.site_title)));
    html.push_str(&format!(
        "<link rel=\"stylesheet\" href=\"{static_url}wall/{stylesheet}\">\n"
    ));
    html.push_str("</head>\n<body>\n");
    html.push_str(body);
    if let Some(bootstrap) = bootstrap {
        html.push_str(&format!("<script>{bootstrap}</script>\n"));
    }
    html.push_str(&format!(
        "<script src=\"{static_url}wall/{script}\"></script>\n"
    ));
    html.push_str("</body>\n</html>\n");
    html
}

/// Serialize a value for embedding inside a `<script>` element.
///
/// `</` is escaped so user content can never terminate the script tag
/// early.
fn script_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|_| "null".to_string())
        .replace("</", "<\\/")
}
