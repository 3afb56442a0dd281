//! Gallery resolution.
//!
//! A project's gallery comes from one of two places: an authored `images`
//! list (used verbatim) or a scan of `<image_root>/<slug>` on disk. The
//! scan is best-effort by contract: a missing directory, an unreadable
//! entry, or a bad filename means fewer images, never an error.

use std::fs;
use std::path::{Path, PathBuf};

use crate::caption;
use crate::project::{GalleryImage, Project};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// File extensions eligible for the directory scan (lowercase; matching
/// is case-insensitive).
const ALLOWED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif"];

// ---------------------------------------------------------------------------
// Resolver
// ---------------------------------------------------------------------------

/// Resolves the gallery for a project, from its authored list or from the
/// image directory on disk.
#[derive(Debug, Clone)]
pub struct GalleryResolver {
    image_root: PathBuf,
}

impl GalleryResolver {
    pub fn new(image_root: impl Into<PathBuf>) -> Self {
        Self {
            image_root: image_root.into(),
        }
    }

    /// The configured image asset root.
    pub fn image_root(&self) -> &Path {
        &self.image_root
    }

    /// Produce the ordered gallery for `project`.
    ///
    /// A non-empty authored list wins and is returned as-is, including any
    /// entry that happens to repeat the cover. Otherwise the project's
    /// directory is scanned: allowed extensions only, sorted by filename,
    /// with the cover's own file excluded so it never repeats below the
    /// hero image. Each scanned `src` is `<slug>/<filename>`, relative to
    /// the image root like everything else in a [`Project`].
    pub fn resolve(&self, project: &Project) -> Vec<GalleryImage> {
        if let Some(images) = &project.images {
            if !images.is_empty() {
                return images.clone();
            }
        }

        let dir = self.image_root.join(&project.slug);
        let names = without_cover(
            scan_image_names(&dir),
            cover_file_name(&project.cover_image),
        );

        names
            .into_iter()
            .map(|name| GalleryImage {
                src: format!("{}/{name}", project.slug),
                alt: caption::alt_text(&name),
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Scan helpers
// ---------------------------------------------------------------------------

/// List allowed image filenames in `dir`, sorted ascending by byte order.
///
/// Plain lexicographic order is the contract: the asset convention
/// zero-pads numeric prefixes (`01-`, `02-`), so natural sort would only
/// reorder names the convention already controls.
///
/// A missing or unreadable directory yields an empty list. Entries that
/// are not regular files, fail to stat, have a non-UTF-8 name, or carry a
/// disallowed extension are skipped.
fn scan_image_names(dir: &Path) -> Vec<String> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return Vec::new(),
    };

    let mut names = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!(dir = %dir.display(), error = %err, "Skipping unreadable directory entry");
                continue;
            }
        };

        match entry.file_type() {
            Ok(file_type) if file_type.is_file() => {}
            _ => continue,
        }

        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(_) => {
                tracing::warn!(dir = %dir.display(), "Skipping file with non-UTF-8 name");
                continue;
            }
        };

        if has_allowed_extension(&name) {
            names.push(name);
        }
    }

    names.sort();
    names
}

/// Case-insensitive extension check: `photo.JPG` passes, `notes.txt` and
/// extensionless names do not.
fn has_allowed_extension(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ALLOWED_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
}

/// Final filename component of a cover image path, if any
/// (`"foo/cover.png"` -> `"cover.png"`). Trailing separators are
/// ignored, so `"trailing/"` still names `"trailing"`.
fn cover_file_name(cover_path: &str) -> Option<&str> {
    Path::new(cover_path)
        .file_name()
        .and_then(|name| name.to_str())
}

/// Drop the scanned name matching the cover's filename, exact and
/// case-sensitive, so the cover never repeats inside the gallery grid.
fn without_cover(names: Vec<String>, cover: Option<&str>) -> Vec<String> {
    match cover {
        Some(cover) => names.into_iter().filter(|name| name != cover).collect(),
        None => names,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
