mod common;

use axum::http::{header, StatusCode};
use tower::ServiceExt;

use common::{app, body_text, get};

async fn page(uri: &str) -> String {
    let app = app("http://127.0.0.1:9/grade".to_string());
    let resp = app.oneshot(get(uri)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK, "GET {uri}");
    body_text(resp).await
}

#[tokio::test]
async fn navbar_off_home_navigates_home_first() {
    let html = page("/autograder").await;

    assert!(html.contains(r#"href="/?section=contact""#));
    assert!(html.contains(r#"data-nav-section="contact""#));
    assert!(html.contains(r#"data-nav-action="navigate""#));
    assert!(!html.contains(r#"data-nav-action="scroll""#));
}

#[tokio::test]
async fn navbar_on_home_scrolls_in_place() {
    let html = page("/").await;

    assert!(html.contains(r#"data-nav-action="scroll""#));
    assert!(!html.contains(r#"data-nav-action="navigate""#));
    assert!(html.contains(r#"data-offset="70""#));
}

#[tokio::test]
async fn home_with_section_arms_scroll_on_ready() {
    let html = page("/?section=how-it-works").await;

    assert!(html.contains(r#"data-scroll-target="how-it-works""#));
    assert!(html.contains(r#"id="how-it-works""#));
}

#[tokio::test]
async fn unknown_section_is_ignored() {
    let html = page("/?section=pricing").await;

    assert!(!html.contains("data-scroll-target"));
}

#[tokio::test]
async fn static_script_is_served() {
    let app = app("http://127.0.0.1:9/grade".to_string());
    let resp = app.oneshot(get("/static/app.js")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()[header::CONTENT_TYPE], "text/javascript");
    assert!(body_text(resp).await.contains("scrollToSection"));
}

#[tokio::test]
async fn japanese_locale_from_accept_language() {
    let app = app("http://127.0.0.1:9/grade".to_string());
    let req = axum::http::Request::builder()
        .uri("/autograder")
        .header(header::ACCEPT_LANGUAGE, "ja-JP,ja;q=0.9")
        .body(axum::body::Body::empty())
        .unwrap();
    let html = body_text(app.oneshot(req).await.unwrap()).await;

    assert!(html.contains("採点ガイドラインの作成と送信"));
}
