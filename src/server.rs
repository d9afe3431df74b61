use axum::{
    Router,
    extract::{Request, State},
    http::{StatusCode, Uri},
    middleware::Next,
    response::{Html, IntoResponse, Redirect},
    routing::get,
};
use axum_extra::extract::CookieJar;
use leptos::prelude::*;
use std::sync::Arc;
use std::time::Duration;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::AppState;
use crate::config::AppConfig;
use crate::navigation::{self, Entry, Section};
use crate::ui::document::{html_shell, render};
use crate::ui::layout::AuthShell;
use crate::ui::pages::{LoginPage, NotFoundPage, PlaceholderPage, RegisterPage, ReportIssuePage};

/// Registry routes served by a dedicated page rather than a placeholder.
const DEDICATED_ROUTES: &[&str] = &["/report-issue"];

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    let addr = config.server.address();
    let app = router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        name: "server.started",
        address = %addr,
        "Server started"
    );

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

/// Build the portal router.
///
/// Every routable navigation entry gets a page; entries without a dedicated
/// page render a placeholder inside the protected shell.
pub fn router(state: AppState) -> Router {
    let timeout = state.config.server.request_timeout();
    let static_dir = ServeDir::new(&state.config.server.static_dir);

    let mut app = Router::new()
        .route("/", get(|| async { Redirect::to("/dashboard") }))
        .route("/login", get(login))
        .route("/register", get(register))
        .route("/report-issue", get(report_issue));

    let mut mounted: Vec<&str> = DEDICATED_ROUTES.to_vec();
    for entry in navigation::sections().iter().flat_map(Section::routable) {
        if mounted.contains(&entry.route) {
            continue;
        }
        mounted.push(entry.route);
        debug!(route = entry.route, label = entry.label, "Mounting placeholder page");
        app = app.route(
            entry.route,
            get(move |state: State<AppState>, jar: CookieJar| section_page(state, jar, entry)),
        );
    }

    let app = app.nest_service("/static", static_dir).fallback(not_found);

    with_request_timeout(app, timeout)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Answer 408 for any request still running after `timeout`.
pub fn with_request_timeout<S>(app: Router<S>, timeout: Duration) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    app.layer(axum::middleware::from_fn(
        move |req: Request, next: Next| async move {
            match tokio::time::timeout(timeout, next.run(req)).await {
                Ok(res) => res,
                Err(_) => (StatusCode::REQUEST_TIMEOUT, "Request timed out").into_response(),
            }
        },
    ))
}

// ─────────────────────────────────────────────────────────────────────────────
// HTML Page Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// GET /login
async fn login() -> Html<String> {
    Html(AuthShell.render("Sign in", view! { <LoginPage /> }))
}

/// GET /register
async fn register() -> Html<String> {
    Html(AuthShell.render("Register", view! { <RegisterPage /> }))
}

/// GET /report-issue
async fn report_issue(State(state): State<AppState>, jar: CookieJar) -> Html<String> {
    let shell = state.protected_shell(jar);
    Html(
        shell
            .render("Report an issue", || view! { <ReportIssuePage /> })
            .await,
    )
}

/// GET on a registry route without a dedicated page.
async fn section_page(
    State(state): State<AppState>,
    jar: CookieJar,
    entry: &'static Entry,
) -> Html<String> {
    let shell = state.protected_shell(jar);
    Html(
        shell
            .render(entry.label, || view! { <PlaceholderPage entry=entry /> })
            .await,
    )
}

async fn not_found(uri: Uri) -> impl IntoResponse {
    debug!(%uri, "No page for path");
    let body = render(view! { <NotFoundPage /> });
    (StatusCode::NOT_FOUND, Html(html_shell("Page not found", &body)))
}
