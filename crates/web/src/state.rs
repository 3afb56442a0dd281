use std::sync::Arc;

use folio_core::gallery::GalleryResolver;
use folio_core::registry::ProjectRegistry;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable; everything is behind `Arc` and read-only
/// after startup.
#[derive(Clone)]
pub struct AppState {
    /// The project registry, built once at startup.
    pub registry: Arc<ProjectRegistry>,
    /// Gallery resolver bound to the configured image root.
    pub resolver: Arc<GalleryResolver>,
    /// Server configuration (site title, timeouts).
    pub config: Arc<ServerConfig>,
}
