//! Handlers for the site's HTML pages.

use axum::extract::{Path, State};
use axum::http::{StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use folio_core::error::CoreError;

use crate::error::{WebError, WebResult};
use crate::state::AppState;
use crate::views;

/// GET /
pub async fn home(State(state): State<AppState>) -> WebResult<Html<String>> {
    render(move || views::home_page(&state.config.site_title, state.registry.all())).await
}

/// GET /project/{slug}
///
/// An unknown slug is terminal: 404, nothing partially rendered.
pub async fn project(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> WebResult<Html<String>> {
    let project = state
        .registry
        .find(&slug)
        .cloned()
        .ok_or(CoreError::ProjectNotFound { slug })?;

    render(move || {
        let images = state.resolver.resolve(&project);
        tracing::debug!(slug = %project.slug, images = images.len(), "Resolved gallery");
        views::project_page(
            &state.config.site_title,
            state.registry.all(),
            &project,
            &images,
        )
    })
    .await
}

/// GET /about
pub async fn about(State(state): State<AppState>) -> WebResult<Html<String>> {
    render(move || views::about_page(&state.config.site_title, state.registry.all())).await
}

/// GET /contact
pub async fn contact(State(state): State<AppState>) -> WebResult<Html<String>> {
    render(move || views::contact_page(&state.config.site_title, state.registry.all())).await
}

/// Fallback for any route outside the tree above.
pub async fn not_found(uri: Uri) -> Response {
    tracing::debug!(path = %uri.path(), "No route matched");
    (
        StatusCode::NOT_FOUND,
        Html(views::error_page(
            StatusCode::NOT_FOUND,
            "There is no page at this address.",
        )),
    )
        .into_response()
}

/// Run a view render on the blocking pool.
///
/// The yew renderer is `!Send`, so pages are built inside the closure and
/// only the finished markup crosses back to the async side.
async fn render<F>(build: F) -> WebResult<Html<String>>
where
    F: FnOnce() -> String + Send + 'static,
{
    let markup = tokio::task::spawn_blocking(build)
        .await
        .map_err(|err| WebError::Internal(format!("Render task failed: {err}")))?;
    Ok(Html(markup))
}
