//! Route definitions for the site's HTML pages.

use axum::routing::get;
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

/// Routes mounted at the site root.
///
/// ```text
/// GET /                -> home
/// GET /project/{slug}  -> project
/// GET /about           -> about
/// GET /contact         -> contact
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home))
        .route("/project/{slug}", get(pages::project))
        .route("/about", get(pages::about))
        .route("/contact", get(pages::contact))
}
