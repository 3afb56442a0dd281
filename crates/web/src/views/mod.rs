//! Server-side HTML views.
//!
//! Pages are built as [`Html`] trees with the `html!` macro and rendered
//! to strings through [`render_document`]. The renderer is synchronous
//! CPU work and not `Send`, so handlers run it on the blocking pool.

mod home;
mod layout;
mod project;
mod static_pages;

pub use home::home_page;
pub use project::project_page;
pub use static_pages::{about_page, contact_page};

use axum::http::StatusCode;
use yew::{function_component, Html, LocalServerRenderer, Properties};

#[derive(Properties, PartialEq)]
struct DocumentProps {
    html: Html,
}

#[function_component(Document)]
fn document(props: &DocumentProps) -> Html {
    props.html.clone()
}

/// Render a built [`Html`] tree into a complete HTML document string.
pub(crate) fn render_document(html: Html) -> String {
    let renderer =
        LocalServerRenderer::<Document>::with_props(DocumentProps { html }).hydratable(false);
    let mut markup = futures::executor::block_on(renderer.render());
    markup.insert_str(0, "<!DOCTYPE html>\n");
    markup
}

/// Minimal standalone error page.
///
/// Built with `format!` rather than the yew renderer so it can be produced
/// from the synchronous `IntoResponse` path. Never interpolates request
/// data into markup; callers pass fixed strings.
pub fn error_page(status: StatusCode, detail: &str) -> String {
    let code = status.as_u16();
    let reason = status.canonical_reason().unwrap_or("Error");
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\
         <head><meta charset=\"utf-8\"/><title>{code} {reason}</title></head>\
         <body style=\"font-family: sans-serif; text-align: center; margin-top: 4rem;\">\
         <h1>{code} {reason}</h1>\
         <p>{detail}</p>\
         <p><a href=\"/\">Back to the home page</a></p>\
         </body></html>\n"
    )
}
