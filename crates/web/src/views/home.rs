//! Home page: one card per project, in registry order.

use folio_core::project::Project;
use yew::{html, Html};

use crate::views::layout::{page, Layout};
use crate::views::render_document;

/// Render the home page document.
pub fn home_page(site_title: &str, projects: &[Project]) -> String {
    let cards = projects
        .iter()
        .map(|project| {
            html! {
                <a class="card" href={format!("/project/{}", project.slug)}>
                    <img
                        class="card_image"
                        src={format!("/static/img/{}", project.cover_image)}
                        alt={project.title.clone()}
                        loading="lazy"
                    />
                    <div class="card_info">
                        <h2 class="card_title">{project.title.clone()}</h2>
                        <p class="card_description">{project.description.clone()}</p>
                    </div>
                </a>
            }
        })
        .collect::<Html>();

    let body = html! {
        <>
            <h1>{"Projects"}</h1>
            <div id="cards">{cards}</div>
        </>
    };

    render_document(page(Layout {
        site_title,
        page_title: None,
        nav_projects: projects,
        body,
    }))
}
