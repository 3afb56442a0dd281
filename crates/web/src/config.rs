use std::path::PathBuf;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Image asset root; projects scan `<image_root>/<slug>` for their
    /// galleries and the same tree is served under `/static/img`.
    pub image_root: PathBuf,
    /// Site title shown in the page header and the `<title>` tag.
    pub site_title: String,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default        |
    /// |------------------------|----------------|
    /// | `HOST`                 | `0.0.0.0`      |
    /// | `PORT`                 | `8080`         |
    /// | `IMAGE_ROOT`           | `static/img`   |
    /// | `SITE_TITLE`           | `My Portfolio` |
    /// | `REQUEST_TIMEOUT_SECS` | `30`           |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".into())
            .parse()
            .expect("PORT must be a valid u16");

        let image_root: PathBuf = std::env::var("IMAGE_ROOT")
            .unwrap_or_else(|_| "static/img".into())
            .into();

        let site_title = std::env::var("SITE_TITLE").unwrap_or_else(|_| "My Portfolio".into());

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            image_root,
            site_title,
            request_timeout_secs,
        }
    }
}
