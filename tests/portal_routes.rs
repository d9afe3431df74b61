use std::sync::Arc;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use axum_test::TestServer;
use opengov_portal::AppState;
use opengov_portal::config::AppConfig;
use opengov_portal::navigation;
use opengov_portal::server::{router, with_request_timeout};
use std::time::Duration;
use tower::ServiceExt;

fn app() -> axum::Router {
    router(AppState::new(Arc::new(AppConfig::default())))
}

async fn get_html(path: &str, cookie: Option<&str>) -> (StatusCode, String) {
    let mut request = Request::builder().uri(path);
    if let Some(cookie) = cookie {
        request = request.header(header::COOKIE, cookie);
    }
    let response = app()
        .oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn login_renders_inside_auth_shell() -> anyhow::Result<()> {
    let server = TestServer::new(app())?;

    let response = server.get("/login").await;
    response.assert_status_ok();

    let html = response.text();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(r#"data-pane="artwork""#));
    assert_eq!(html.matches(r#"type="email""#).count(), 1);
    assert_eq!(html.matches(r#"type="password""#).count(), 1);
    assert_eq!(html.matches(r#"type="checkbox""#).count(), 1);
    assert_eq!(html.matches(r#"data-variant="primary""#).count(), 1);
    assert!(!html.contains("sidebar-wrapper"));
    Ok(())
}

#[tokio::test]
async fn register_renders_inside_auth_shell() -> anyhow::Result<()> {
    let server = TestServer::new(app())?;

    let response = server.get("/register").await;
    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains(r#"data-pane="content""#));
    assert!(html.contains(r#"href="/login""#));
    Ok(())
}

#[tokio::test]
async fn root_redirects_to_dashboard() -> anyhow::Result<()> {
    let server = TestServer::new(app())?;

    let response = server.get("/").await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/dashboard");
    Ok(())
}

#[tokio::test]
async fn unknown_path_is_not_found() -> anyhow::Result<()> {
    let server = TestServer::new(app())?;

    let response = server.get("/no-such-page").await;
    response.assert_status_not_found();
    assert!(response.text().contains("Page not found"));
    Ok(())
}

#[tokio::test]
async fn static_assets_are_served() -> anyhow::Result<()> {
    let server = TestServer::new(app())?;

    let response = server.get("/static/app.css").await;
    response.assert_status_ok();
    assert!(response.header("content-type").to_str()?.starts_with("text/css"));

    server.get("/static/missing.css").await.assert_status_not_found();
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn slow_request_times_out() {
    let stalled: axum::Router = axum::Router::new().route(
        "/slow",
        axum::routing::get(|| async {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            "done"
        }),
    );
    let app = with_request_timeout(stalled, Duration::from_secs(30));

    let response = app
        .oneshot(Request::builder().uri("/slow").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
}

#[tokio::test]
async fn sidebar_closed_without_cookie() {
    let (status, html) = get_html("/report-issue", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(r#"data-state="collapsed""#));
    assert!(html.contains(r#"name="issue""#));
}

#[tokio::test]
async fn sidebar_open_with_true_cookie() {
    let (status, html) = get_html("/report-issue", Some("sidebar:state=true")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(r#"data-state="expanded""#));
}

#[tokio::test]
async fn sidebar_closed_for_other_cookie_values() {
    for cookie in ["sidebar:state=false", "sidebar:state=TRUE", "sidebar:state=", "other=true"] {
        let (_, html) = get_html("/dashboard", Some(cookie)).await;
        assert!(html.contains(r#"data-state="collapsed""#), "{cookie}");
    }
}

#[tokio::test]
async fn every_registry_route_resolves() {
    for route in navigation::routes() {
        let (status, html) = get_html(route, None).await;
        assert_eq!(status, StatusCode::OK, "{route}");
        assert!(html.contains("sidebar-wrapper"), "{route}");
    }
}

#[tokio::test]
async fn placeholder_names_its_entry() {
    let (_, html) = get_html("/faq-help", None).await;
    assert!(html.contains(r#"data-route="/faq-help""#));
    assert!(html.contains("<title>FAQ/Help - OpenGov</title>"));
}

#[tokio::test]
async fn sidebar_lists_both_sections_in_order() {
    let (_, html) = get_html("/news", None).await;
    let application = html.find(r#"data-section="Application""#).unwrap();
    let consultation = html.find(r#"data-section="Consultation""#).unwrap();
    assert!(application < consultation);
    assert_eq!(html[application..consultation].matches("sidebar-menu-item").count(), 6);
    assert_eq!(html[consultation..].matches("sidebar-menu-item").count(), 4);
}
