use std::path::PathBuf;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Directory uploaded media is written to (default: `media`).
    pub media_root: PathBuf,
    /// Public URL prefix media is served under; always ends with `/`.
    pub media_url: String,
    /// Directory static assets (stylesheets, layout scripts) are served
    /// from (default: `static`).
    pub static_root: PathBuf,
    /// Public URL prefix static assets are served under; always ends with `/`.
    pub static_url: String,
    /// Site title rendered into page heads (default: `Project Wall`).
    pub site_title: String,
    /// Bearer token guarding the admin surface. Unset disables the
    /// whole surface.
    pub admin_token: Option<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                   |
    /// |------------------------|---------------------------|
    /// | `HOST`                 | `0.0.0.0`                 |
    /// | `PORT`                 | `8000`                    |
    /// | `CORS_ORIGINS`         | (none)                    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                      |
    /// | `MEDIA_ROOT`           | `media`                   |
    /// | `MEDIA_URL`            | `/media/`                 |
    /// | `STATIC_ROOT`          | `static`                  |
    /// | `STATIC_URL`           | `/static/`                |
    /// | `SITE_TITLE`           | `Project Wall`            |
    /// | `ADMIN_TOKEN`          | (admin surface disabled)  |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let media_root =
            PathBuf::from(std::env::var("MEDIA_ROOT").unwrap_or_else(|_| "media".into()));
        let media_url = url_prefix("MEDIA_URL", "/media/");

        let static_root =
            PathBuf::from(std::env::var("STATIC_ROOT").unwrap_or_else(|_| "static".into()));
        let static_url = url_prefix("STATIC_URL", "/static/");

        let site_title = std::env::var("SITE_TITLE").unwrap_or_else(|_| "Project Wall".into());

        let admin_token = std::env::var("ADMIN_TOKEN").ok().filter(|t| !t.is_empty());

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            media_root,
            media_url,
            static_root,
            static_url,
            site_title,
            admin_token,
        }
    }
}

/// Read a URL prefix env var, normalizing to a trailing `/` so callers
/// can concatenate relative paths directly.
fn url_prefix(var: &str, default: &str) -> String {
    let mut value = std::env::var(var).unwrap_or_else(|_| default.into());
    if !value.ends_with('/') {
        value.push('/');
    }
    value
}
