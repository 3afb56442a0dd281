//! Shared page chrome: head, header with navigation, footer.

use folio_core::project::Project;
use yew::{html, Html};

/// Everything a page needs besides its own body.
pub struct Layout<'a> {
    /// Site title from configuration; shown as the header brand and used
    /// in the `<title>` tag.
    pub site_title: &'a str,
    /// Page-specific title, `None` on the home page.
    pub page_title: Option<String>,
    /// Registry entries for the "Projects" navigation dropdown, in
    /// display order. Every page gets the full list.
    pub nav_projects: &'a [Project],
    /// The page body, mounted inside `<main>`.
    pub body: Html,
}

/// Wrap a page body in the full document: head with inline stylesheet,
/// header with brand and navigation, footer.
pub fn page(layout: Layout<'_>) -> Html {
    let Layout {
        site_title,
        page_title,
        nav_projects,
        body,
    } = layout;

    let style = Html::from_html_unchecked(STYLESHEET.into());

    let document_title = match page_title {
        Some(page_title) => format!("{page_title} | {site_title}"),
        None => site_title.to_owned(),
    };

    html! {
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>{document_title}</title>
                <style>{style}</style>
            </head>
            <body>
                <div id="page">
                    <header id="header">
                        <a id="brand" href="/">{site_title.to_owned()}</a>
                        <nav id="nav">
                            <a class="nav_link" href="/">{"Home"}</a>
                            <div class="dropdown">
                                <span class="dropdown_label">{"Projects"}</span>
                                <ul class="dropdown_menu">
                                    {nav_projects.iter().map(|project| html! {
                                        <li class="dropdown_item">
                                            <a
                                                class="dropdown_link"
                                                href={format!("/project/{}", project.slug)}
                                            >{project.title.clone()}</a>
                                        </li>
                                    }).collect::<Html>()}
                                </ul>
                            </div>
                            <a class="nav_link" href="/about">{"About"}</a>
                            <a class="nav_link" href="/contact">{"Contact"}</a>
                        </nav>
                    </header>
                    <main id="main">
                        {body}
                    </main>
                    <footer id="footer">
                        {format!("© {site_title}")}
                    </footer>
                </div>
            </body>
        </html>
    }
}

const STYLESHEET: &str = r#"
    html {
        font-size: calc(10px + 0.4vw);
    }

    body {
        background-color: #222222;
        margin: 2rem;
        font-family: "Helvetica Neue", "Lucida Grande", Arial, Helvetica, sans-serif;
        color: #2a2a2a;
    }

    h1, h2, h3 {
        font-family: Times, "Times New Roman", Georgia, serif;
    }

    a {
        text-decoration: none;
        color: #4d5a41;
    }

    #page {
        background-color: white;
        max-width: 60rem;
        margin: 0 auto;
        display: flex;
        flex-direction: column;
        border-radius: 0.5rem;
        overflow: hidden;
    }

    @media (max-width: 600px) {
        body {
            margin: 0;
        }

        #page {
            border-radius: 0;
            max-width: initial;
        }
    }

    #header {
        background-color: #dadfbb;
        display: flex;
        flex-direction: row;
        align-items: center;
        gap: 1.5rem;
        padding: 1.5rem 2rem;
    }

    #brand {
        font-size: 1.4rem;
        letter-spacing: 0.1rem;
        flex-grow: 1;
        color: #2a2a2a;
    }

    #nav {
        display: flex;
        flex-direction: row;
        align-items: center;
        gap: 1rem;
    }

    .dropdown {
        position: relative;
    }

    .dropdown_label {
        cursor: default;
        color: #4d5a41;
    }

    .dropdown_menu {
        display: none;
        position: absolute;
        top: 100%;
        left: 0;
        margin: 0;
        padding: 0.5rem 0;
        list-style: none;
        background-color: white;
        border: 1px solid #dadfbb;
        border-radius: 0.25rem;
        min-width: 14rem;
        z-index: 1;
    }

    .dropdown:hover .dropdown_menu {
        display: block;
    }

    .dropdown_link {
        display: block;
        padding: 0.35rem 1rem;
        white-space: nowrap;
    }

    .dropdown_link:hover {
        background-color: #f2f4e4;
    }

    #main {
        padding: 2rem;
    }

    #footer {
        background-color: #dadfbb;
        padding: 1rem 2rem;
        font-size: 0.85rem;
    }

    #cards {
        display: grid;
        grid-template-columns: repeat(auto-fill, minmax(16rem, 1fr));
        gap: 1.5rem;
    }

    .card {
        display: flex;
        flex-direction: column;
        border: 1px solid #e4e4e4;
        border-radius: 0.5rem;
        overflow: hidden;
    }

    .card:hover {
        border-color: #4d5a41;
    }

    .card_image {
        width: 100%;
        aspect-ratio: 4 / 3;
        object-fit: cover;
    }

    .card_info {
        padding: 0.75rem 1rem 1rem;
    }

    .card_title {
        margin: 0 0 0.5rem;
        font-size: 1.1rem;
    }

    .card_description {
        margin: 0;
        color: #555555;
        font-size: 0.9rem;
    }

    .project_description {
        max-width: 40rem;
        color: #555555;
    }

    .project_cover {
        max-width: 100%;
        border-radius: 0.5rem;
    }

    .video_frame {
        position: relative;
        aspect-ratio: 16 / 9;
        margin: 1.5rem 0;
    }

    .video_frame iframe {
        position: absolute;
        width: 100%;
        height: 100%;
        border: 0;
    }

    #gallery {
        display: grid;
        grid-template-columns: repeat(auto-fill, minmax(14rem, 1fr));
        gap: 1.5rem;
        margin-top: 1.5rem;
    }

    .gallery_item {
        margin: 0;
    }

    .gallery_image {
        width: 100%;
        border-radius: 0.25rem;
    }

    .gallery_caption {
        margin-top: 0.35rem;
        font-size: 0.85rem;
        color: #555555;
    }
"#;
