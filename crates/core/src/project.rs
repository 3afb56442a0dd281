//! Project record types.

/// One portfolio entry.
///
/// Records are declared in [`crate::registry`] and never mutated after
/// startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    /// Unique URL-safe identifier; doubles as the name of the project's
    /// image subdirectory under the image root.
    pub slug: String,

    /// Display title.
    pub title: String,

    /// Short description shown on the home page card and the detail page.
    pub description: String,

    /// Cover image path relative to the image root. Usually inside the
    /// project's own directory, but may point at a shared top-level file.
    pub cover_image: String,

    /// Hand-authored gallery. `Some` and non-empty disables the directory
    /// scan entirely; the list is rendered verbatim, in order.
    pub images: Option<Vec<GalleryImage>>,

    /// External video identifier for an embedded player. Independent of
    /// the image gallery; a project can have both, either, or neither.
    pub video_id: Option<String>,
}

/// A single renderable gallery entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryImage {
    /// Image path relative to the image root.
    pub src: String,

    /// Human-readable caption, also used as alt text.
    pub alt: String,
}
