/// Domain-level error type.
///
/// The domain has exactly one failure mode: a slug that matches no
/// registered project. Gallery resolution deliberately never fails; a
/// missing or unreadable image directory degrades to an empty gallery.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("No project with slug '{slug}'")]
    ProjectNotFound { slug: String },
}
