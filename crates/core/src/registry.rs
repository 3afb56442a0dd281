//! The project registry: the single source of truth for portfolio entries.
//!
//! Projects are declared in code, in display order; the list drives the
//! home page cards and the navigation dropdown. Adding or renaming a
//! project is an edit to [`ProjectRegistry::builtin`].

use std::collections::HashSet;

use crate::project::{GalleryImage, Project};

/// Ordered, immutable collection of portfolio projects, keyed by slug.
#[derive(Debug, Clone)]
pub struct ProjectRegistry {
    projects: Vec<Project>,
}

impl ProjectRegistry {
    /// Build a registry from an explicit project list.
    ///
    /// Panics on an empty or duplicate slug. A misdeclared registry must
    /// die at startup, not surface at request time.
    pub fn new(projects: Vec<Project>) -> Self {
        let mut seen = HashSet::new();
        for project in &projects {
            assert!(
                !project.slug.is_empty(),
                "project '{}' has an empty slug",
                project.title
            );
            assert!(
                seen.insert(project.slug.as_str()),
                "duplicate project slug '{}'",
                project.slug
            );
        }
        Self { projects }
    }

    /// The built-in portfolio entries, in display order.
    pub fn builtin() -> Self {
        Self::new(vec![
            Project {
                slug: "fidget-spinner".to_owned(),
                title: "Precision Fidget Spinner".to_owned(),
                description: "Precision bat spinner with press-fit bearings and mass symmetry."
                    .to_owned(),
                cover_image: "fidget-spinner/05-assembly.png".to_owned(),
                images: None,
                video_id: None,
            },
            Project {
                slug: "haptic-glove".to_owned(),
                title: "VR Haptic Glove".to_owned(),
                description:
                    "Lightweight glove: flex sensing + vibro feedback for convincing touch cues."
                        .to_owned(),
                cover_image: "haptic-glove/01-haptic-glove.png".to_owned(),
                // Authored captions; the filename-derived ones read poorly here.
                images: Some(vec![
                    gallery_image("haptic-glove/02-motors.png", "Motor layout"),
                    gallery_image("haptic-glove/03-vr-hand.png", "VR hand view"),
                    gallery_image("haptic-glove/04-breadboard.jpeg", "Breadboard"),
                    gallery_image("haptic-glove/05-bottom-sketch.jpeg", "Palm sketch"),
                    gallery_image("haptic-glove/06-top-sketch.jpeg", "Top sketch"),
                    gallery_image("haptic-glove/07-bom.png", "BOM"),
                ]),
                video_id: None,
            },
            Project {
                slug: "cat-speaker".to_owned(),
                title: "Bluetooth Speaker (Cat)".to_owned(),
                description: "Cat-shaped enclosure, compact layout, clear everyday sound."
                    .to_owned(),
                cover_image: "cat-speaker/speaker-enclosure.png".to_owned(),
                images: None,
                video_id: Some("wSyVJ7xkt0Q".to_owned()),
            },
            Project {
                slug: "dispensing-aid".to_owned(),
                title: "Material Dispensing Aid".to_owned(),
                description:
                    "Ergonomic tool for precise adhesive dispensing; rapid prototypes + test rigs."
                        .to_owned(),
                cover_image: "dispensing-aid/01-model.png".to_owned(),
                images: None,
                video_id: None,
            },
            Project {
                slug: "other-projects".to_owned(),
                title: "Other Projects".to_owned(),
                description: "A collection of smaller builds and experiments.".to_owned(),
                // Shared top-level collage, not inside the project directory.
                cover_image: "misc-collage.jpg".to_owned(),
                images: None,
                video_id: None,
            },
        ])
    }

    /// All projects, in declaration order.
    pub fn all(&self) -> &[Project] {
        &self.projects
    }

    /// Look up a project by slug. `None` is the only failure mode.
    pub fn find(&self, slug: &str) -> Option<&Project> {
        self.projects.iter().find(|project| project.slug == slug)
    }

    /// Number of registered projects.
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Whether the registry holds no projects.
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

/// Helper: build a [`GalleryImage`] from borrowed literals.
fn gallery_image(src: &str, alt: &str) -> GalleryImage {
    GalleryImage {
        src: src.to_owned(),
        alt: alt.to_owned(),
    }
}
