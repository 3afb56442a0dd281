//! About and contact pages. Fixed prose, same chrome as everything else.

use folio_core::project::Project;
use yew::html;

use crate::views::layout::{page, Layout};
use crate::views::render_document;

/// Render the about page document.
pub fn about_page(site_title: &str, nav_projects: &[Project]) -> String {
    let body = html! {
        <>
            <h1>{"About"}</h1>
            <p class="project_description">
                {"I design and build physical products: consumer hardware, \
                  wearables, and the tooling needed to prototype them. The \
                  projects on this site cover the full arc from napkin sketch \
                  through CAD, test rigs, and working assemblies."}
            </p>
            <p class="project_description">
                {"Most entries include build photos straight from the bench. \
                  Nothing here is retouched; what you see is what came off \
                  the printer, the mill, or the soldering iron."}
            </p>
        </>
    };

    render_document(page(Layout {
        site_title,
        page_title: Some("About".to_owned()),
        nav_projects,
        body,
    }))
}

/// Render the contact page document.
pub fn contact_page(site_title: &str, nav_projects: &[Project]) -> String {
    let body = html! {
        <>
            <h1>{"Contact"}</h1>
            <p class="project_description">
                {"The fastest way to reach me about work, collaborations, or \
                  questions on any of these builds:"}
            </p>
            <ul>
                <li>
                    {"Email: "}
                    <a href="mailto:hello@example.com">{"hello@example.com"}</a>
                </li>
                <li>
                    {"GitHub: "}
                    <a href="https://github.com" rel="noopener">{"my repositories"}</a>
                </li>
            </ul>
        </>
    };

    render_document(page(Layout {
        site_title,
        page_title: Some("Contact".to_owned()),
        nav_projects,
        body,
    }))
}
