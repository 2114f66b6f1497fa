// Web server — Axum JSON API over the analysis pipeline and the store.
//
// Two routes mirror the CLI: /word_frequency runs an analysis (and
// persists it), /history pages through stored results. Query parameters
// are taken as raw strings so bad values surface as 400 {"error": …}
// payloads instead of axum's default rejections.

use std::sync::Arc;

use anyhow::Result;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::db::traits::ResultStore;
use crate::wiki::traits::ArticleFetcher;

pub mod handlers;

/// Shared application state threaded through all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ResultStore>,
    pub fetcher: Arc<dyn ArticleFetcher>,
}

/// Start the web server and block until it exits.
pub async fn run_server(
    store: Arc<dyn ResultStore>,
    fetcher: Arc<dyn ArticleFetcher>,
    port: u16,
    bind: &str,
) -> Result<()> {
    let state = AppState { store, fetcher };
    let app = build_router(state);

    let addr = format!("{bind}:{port}");
    info!("wordfreq API listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

/// Build the router. Separate from `run_server` so tests can drive it
/// with `tower::ServiceExt::oneshot`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/word_frequency", get(handlers::frequency::word_frequency))
        .route("/history", get(handlers::history::list_history))
        .route("/health", get(health))
        .layer(
            CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods([axum::http::Method::GET, axum::http::Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check — always returns 200 OK.
async fn health() -> impl IntoResponse {
    axum::Json(serde_json::json!({ "status": "ok" }))
}

/// Typed JSON error response helper.
pub fn api_error(status: StatusCode, message: &str) -> Response {
    (status, axum::Json(serde_json::json!({ "error": message }))).into_response()
}
