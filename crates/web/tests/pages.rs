//! Integration tests for the rendered HTML pages.
//!
//! Requests go through the full middleware stack via `tower::oneshot`; no
//! TCP listener involved. Tests that need gallery files create them under
//! a temp image root.

mod common;

use axum::http::StatusCode;
use common::{body_string, build_test_app, get};

// ---------------------------------------------------------------------------
// Test: home page lists every project, in registry order
// ---------------------------------------------------------------------------

#[tokio::test]
async fn home_lists_all_projects_in_order() {
    let image_root = tempfile::tempdir().unwrap();
    let app = build_test_app(image_root.path());

    let response = get(app, "/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.starts_with("<!DOCTYPE html>"));

    let titles = [
        "Precision Fidget Spinner",
        "VR Haptic Glove",
        "Bluetooth Speaker (Cat)",
        "Material Dispensing Aid",
        "Other Projects",
    ];
    let mut last = 0;
    for title in titles {
        let pos = body.find(title).unwrap_or_else(|| panic!("home page missing '{title}'"));
        assert!(pos > last, "'{title}' out of display order");
        last = pos;
    }
}

// ---------------------------------------------------------------------------
// Test: home page cards link to the detail pages and show covers
// ---------------------------------------------------------------------------

#[tokio::test]
async fn home_cards_link_to_detail_pages() {
    let image_root = tempfile::tempdir().unwrap();
    let app = build_test_app(image_root.path());

    let body = body_string(get(app, "/").await).await;

    assert!(body.contains("href=\"/project/fidget-spinner\""));
    assert!(body.contains("href=\"/project/other-projects\""));
    // Cover srcs are rooted under the static mount, including the shared
    // top-level collage.
    assert!(body.contains("src=\"/static/img/fidget-spinner/05-assembly.png\""));
    assert!(body.contains("src=\"/static/img/misc-collage.jpg\""));
}

// ---------------------------------------------------------------------------
// Test: detail page renders even when the image directory is missing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn project_page_renders_without_image_directory() {
    let image_root = tempfile::tempdir().unwrap();
    let app = build_test_app(image_root.path());

    let response = get(app, "/project/fidget-spinner").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("Precision Fidget Spinner"));
    assert!(body.contains("press-fit bearings"));
    assert!(body.contains("src=\"/static/img/fidget-spinner/05-assembly.png\""));
    // No files on disk, so no gallery grid at all.
    assert!(!body.contains("id=\"gallery\""));
}

// ---------------------------------------------------------------------------
// Test: scanned gallery is in filename order with the cover excluded
// ---------------------------------------------------------------------------

#[tokio::test]
async fn scanned_gallery_in_filename_order_excluding_cover() {
    let image_root = tempfile::tempdir().unwrap();
    let dir = image_root.path().join("dispensing-aid");
    std::fs::create_dir(&dir).unwrap();
    for name in ["03-handle.jpeg", "01-model.png", "02-nozzle.png", "notes.txt"] {
        std::fs::write(dir.join(name), b"img").unwrap();
    }
    let app = build_test_app(image_root.path());

    let body = body_string(get(app, "/project/dispensing-aid").await).await;

    // 01-model.png is the cover: shown once up top, not again in the grid.
    assert_eq!(body.matches("dispensing-aid/01-model.png").count(), 1);

    let nozzle = body.find("dispensing-aid/02-nozzle.png").expect("02-nozzle missing");
    let handle = body.find("dispensing-aid/03-handle.jpeg").expect("03-handle missing");
    assert!(nozzle < handle, "gallery out of filename order");

    // Derived captions from filenames.
    assert!(body.contains("02 Nozzle"));
    assert!(body.contains("03 Handle"));

    // Non-image files never reach the page.
    assert!(!body.contains("notes.txt"));
}

// ---------------------------------------------------------------------------
// Test: explicit gallery list is rendered verbatim, no scan
// ---------------------------------------------------------------------------

#[tokio::test]
async fn explicit_gallery_is_rendered_verbatim() {
    // Files on disk that a scan would pick up; the authored list must win.
    let image_root = tempfile::tempdir().unwrap();
    let dir = image_root.path().join("haptic-glove");
    std::fs::create_dir(&dir).unwrap();
    std::fs::write(dir.join("99-should-not-appear.png"), b"img").unwrap();
    let app = build_test_app(image_root.path());

    let body = body_string(get(app, "/project/haptic-glove").await).await;

    // Authored captions, not the filename-derived ones.
    assert!(body.contains("Motor layout"));
    assert!(body.contains("BOM"));
    assert!(!body.contains("02 Motors"));

    assert!(body.contains("src=\"/static/img/haptic-glove/02-motors.png\""));
    assert!(!body.contains("99-should-not-appear.png"));
}

// ---------------------------------------------------------------------------
// Test: video embed appears only for projects with a video id
// ---------------------------------------------------------------------------

#[tokio::test]
async fn video_embed_only_for_video_projects() {
    let image_root = tempfile::tempdir().unwrap();
    let app = build_test_app(image_root.path());

    let speaker = body_string(get(app.clone(), "/project/cat-speaker").await).await;
    assert!(speaker.contains("https://www.youtube.com/embed/wSyVJ7xkt0Q"));
    assert!(speaker.contains("class=\"video_frame\""));
    assert!(speaker.contains("allowfullscreen"));

    let spinner = body_string(get(app, "/project/fidget-spinner").await).await;
    assert!(!spinner.contains("youtube.com/embed"));
}

// ---------------------------------------------------------------------------
// Test: unknown slug returns the 404 page
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_slug_returns_404_page() {
    let image_root = tempfile::tempdir().unwrap();
    let app = build_test_app(image_root.path());

    let response = get(app, "/project/not-a-project").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_string(response).await;
    assert!(body.contains("404 Not Found"));
    assert!(body.contains("href=\"/\""));
}

// ---------------------------------------------------------------------------
// Test: slug lookup is exact, no case folding
// ---------------------------------------------------------------------------

#[tokio::test]
async fn slug_lookup_is_case_sensitive() {
    let image_root = tempfile::tempdir().unwrap();
    let app = build_test_app(image_root.path());

    let response = get(app, "/project/Cat-Speaker").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: about and contact pages render with the shared chrome
// ---------------------------------------------------------------------------

#[tokio::test]
async fn about_and_contact_pages_render() {
    let image_root = tempfile::tempdir().unwrap();
    let app = build_test_app(image_root.path());

    let response = get(app.clone(), "/about").await;
    assert_eq!(response.status(), StatusCode::OK);
    let about = body_string(response).await;
    assert!(about.contains("<title>About | Test Portfolio</title>"));

    let response = get(app, "/contact").await;
    assert_eq!(response.status(), StatusCode::OK);
    let contact = body_string(response).await;
    assert!(contact.contains("mailto:"));
}

// ---------------------------------------------------------------------------
// Test: every page carries the full projects dropdown
// ---------------------------------------------------------------------------

#[tokio::test]
async fn nav_dropdown_lists_every_project_on_every_page() {
    let image_root = tempfile::tempdir().unwrap();
    let app = build_test_app(image_root.path());

    for path in ["/", "/about", "/contact", "/project/cat-speaker"] {
        let body = body_string(get(app.clone(), path).await).await;
        for slug in [
            "fidget-spinner",
            "haptic-glove",
            "cat-speaker",
            "dispensing-aid",
            "other-projects",
        ] {
            assert!(
                body.contains(&format!("href=\"/project/{slug}\"")),
                "{path} is missing nav link for {slug}"
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Test: trailing slashes are not redirected
// ---------------------------------------------------------------------------

#[tokio::test]
async fn trailing_slash_is_a_404() {
    let image_root = tempfile::tempdir().unwrap();
    let app = build_test_app(image_root.path());

    let response = get(app, "/about/").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: pages are served as HTML
// ---------------------------------------------------------------------------

#[tokio::test]
async fn pages_have_html_content_type() {
    let image_root = tempfile::tempdir().unwrap();
    let app = build_test_app(image_root.path());

    let response = get(app, "/").await;
    let content_type = response
        .headers()
        .get("content-type")
        .expect("Missing content-type header")
        .to_str()
        .unwrap();
    assert!(content_type.starts_with("text/html"));
}
