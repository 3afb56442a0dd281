//! Project detail page: cover, description, optional video embed, gallery.

use folio_core::project::{GalleryImage, Project};
use yew::{html, Html};

use crate::views::layout::{page, Layout};
use crate::views::render_document;

/// Render a project detail page document.
///
/// `images` is the already-resolved gallery; an empty slice simply omits
/// the gallery grid. The video embed and the gallery are independent.
pub fn project_page(
    site_title: &str,
    nav_projects: &[Project],
    project: &Project,
    images: &[GalleryImage],
) -> String {
    let body = html! {
        <>
            <h1>{project.title.clone()}</h1>
            <p class="project_description">{project.description.clone()}</p>
            <img
                class="project_cover"
                src={format!("/static/img/{}", project.cover_image)}
                alt={project.title.clone()}
            />
            if let Some(video_id) = project.video_id.clone() {
                <div class="video_frame">
                    <iframe
                        src={format!("https://www.youtube.com/embed/{video_id}")}
                        title={format!("{} video", project.title)}
                        allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                        allowfullscreen=true
                    ></iframe>
                </div>
            }
            if !images.is_empty() {
                <div id="gallery">
                    {images.iter().map(|image| html! {
                        <figure class="gallery_item">
                            <img
                                class="gallery_image"
                                src={format!("/static/img/{}", image.src)}
                                alt={image.alt.clone()}
                                loading="lazy"
                            />
                            <figcaption class="gallery_caption">{image.alt.clone()}</figcaption>
                        </figure>
                    }).collect::<Html>()}
                </div>
            }
        </>
    };

    render_document(page(Layout {
        site_title,
        page_title: Some(project.title.clone()),
        nav_projects,
        body,
    }))
}
