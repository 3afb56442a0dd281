use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use folio_core::gallery::GalleryResolver;
use folio_core::registry::ProjectRegistry;
use folio_web::config::ServerConfig;
use folio_web::router::build_app_router;
use folio_web::state::AppState;

/// Build a test `ServerConfig` rooted at the given image directory.
pub fn test_config(image_root: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        image_root: image_root.to_path_buf(),
        site_title: "Test Portfolio".to_string(),
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using the
/// built-in registry and the given image root.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (request ID, timeout, tracing, panic
/// recovery, compression) that production uses.
pub fn build_test_app(image_root: &Path) -> Router {
    let config = test_config(image_root);

    let state = AppState {
        registry: Arc::new(ProjectRegistry::builtin()),
        resolver: Arc::new(GalleryResolver::new(config.image_root.clone())),
        config: Arc::new(config.clone()),
    };

    build_app_router(state, &config)
}

/// Issue a GET request against the app and return the raw response.
pub async fn get(app: Router, path: &str) -> Response {
    app.oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Collect a response body into a string.
pub async fn body_string(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
