//! HTTP route handlers for pages and the JSON API.

use std::path::Path;

use axum::Router;
use axum::extract::{Path as UrlPath, Query, State};
use axum::http::{StatusCode, Uri};
use axum::response::{Html, Json};
use axum::routing::get;
use dashboard::nav::{CUSTOMERS_PATH, HOME_PATH, INVOICES_PATH};
use serde::Deserialize;
use tower_http::services::ServeDir;
use tracing::{info, warn};

use crate::render::{BadgeView, DashboardPage, NavLinkView, badge, nav_links};
use crate::state::AppState;

pub const ANIMATIONS_PATH: &str = "/dashboard/animations";
pub const INVOICE_DEMO_PATH: &str = "/invoice-demo";

/// Build the full application router.
///
/// Static files under `public_dir` are served for any path no page claims.
pub fn app_router(state: AppState, public_dir: Option<&Path>) -> Router {
    let router = Router::new()
        .route("/", get(landing))
        .route(HOME_PATH, get(overview))
        .route(INVOICES_PATH, get(invoices))
        .route(CUSTOMERS_PATH, get(customers))
        .route(ANIMATIONS_PATH, get(animations))
        .route(INVOICE_DEMO_PATH, get(invoice_demo))
        .nest("/api", api_router());

    let router = match public_dir {
        Some(dir) if dir.exists() => {
            info!(public_dir = %dir.display(), "serving static files");
            router.fallback_service(ServeDir::new(dir))
        }
        Some(dir) => {
            info!(public_dir = %dir.display(), "public directory not found, pages only");
            router.fallback(not_found)
        }
        None => router.fallback(not_found),
    };

    router.with_state(state)
}

/// Build the API router.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/navigation", get(get_navigation))
        .route("/status/{value}", get(get_status))
}

async fn health() -> &'static str {
    "ok"
}

async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

async fn landing(State(state): State<AppState>, uri: Uri) -> Result<Html<String>, StatusCode> {
    page_response(state.pages.render_landing(&state.config, uri.path()))
}

async fn overview(State(state): State<AppState>, uri: Uri) -> Result<Html<String>, StatusCode> {
    dashboard_page(&state, &uri, DashboardPage::Overview)
}

async fn invoices(State(state): State<AppState>, uri: Uri) -> Result<Html<String>, StatusCode> {
    dashboard_page(&state, &uri, DashboardPage::Invoices)
}

async fn customers(State(state): State<AppState>, uri: Uri) -> Result<Html<String>, StatusCode> {
    dashboard_page(&state, &uri, DashboardPage::Customers)
}

async fn animations(State(state): State<AppState>, uri: Uri) -> Result<Html<String>, StatusCode> {
    dashboard_page(&state, &uri, DashboardPage::Animations)
}

async fn invoice_demo(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    page_response(state.pages.render_invoice_demo(&state.config))
}

fn dashboard_page(
    state: &AppState,
    uri: &Uri,
    page: DashboardPage,
) -> Result<Html<String>, StatusCode> {
    page_response(state.pages.render_dashboard(&state.config, uri.path(), page))
}

fn page_response(rendered: anyhow::Result<String>) -> Result<Html<String>, StatusCode> {
    rendered.map(Html).map_err(|err| {
        warn!(error = %format!("{:#}", err), "page render failed");
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

#[derive(Deserialize)]
struct NavigationQuery {
    path: String,
}

/// GET /api/navigation?path=... - navigation entries resolved for `path`.
async fn get_navigation(
    State(state): State<AppState>,
    Query(query): Query<NavigationQuery>,
) -> Json<Vec<NavLinkView>> {
    Json(nav_links(&state.config, &query.path))
}

/// GET /api/status/:value - badge presentation for a status value.
async fn get_status(
    State(state): State<AppState>,
    UrlPath(value): UrlPath<String>,
) -> Json<BadgeView> {
    Json(badge(&state.config, &value))
}
