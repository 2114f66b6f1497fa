// History endpoint.
//
// GET /history?page=…&page_size=… — stored analyses, newest first.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::db::pagination::PageMeta;
use crate::web::{api_error, AppState};

const DEFAULT_PAGE_SIZE: u32 = 10;

#[derive(Deserialize, Default)]
pub struct HistoryQuery {
    /// Page number (1-based)
    pub page: Option<String>,
    /// Results per page (default 10)
    pub page_size: Option<String>,
}

/// GET /history — paginated analysis history.
pub async fn list_history(
    State(state): State<AppState>,
    Query(params): Query<HistoryQuery>,
) -> Response {
    let page = match parse_param(params.page.as_deref(), "page", 1) {
        Ok(v) => v,
        Err(msg) => return api_error(StatusCode::BAD_REQUEST, &msg),
    };
    let page_size = match parse_param(params.page_size.as_deref(), "page_size", DEFAULT_PAGE_SIZE) {
        Ok(v) => v,
        Err(msg) => return api_error(StatusCode::BAD_REQUEST, &msg),
    };

    let total = match state.store.result_count().await {
        Ok(t) => t as u64,
        Err(e) => {
            tracing::error!(error = %e, "DB error counting results");
            return api_error(StatusCode::INTERNAL_SERVER_ERROR, "Database error");
        }
    };

    let meta = PageMeta::compute(total, page, page_size);

    let results = match state.store.results_page(page_size, meta.offset()).await {
        Ok(r) => r,
        Err(e) => {
            tracing::error!(error = %e, "DB error loading history page");
            return api_error(StatusCode::INTERNAL_SERVER_ERROR, "Database error");
        }
    };

    Json(serde_json::json!({
        "results": results,
        "page": meta.page,
        "page_size": meta.page_size,
        "total": meta.total,
        "total_pages": meta.total_pages,
        "next_page": meta.next_page,
        "previous_page": meta.previous_page,
    }))
    .into_response()
}

fn parse_param(raw: Option<&str>, name: &str, default: u32) -> Result<u32, String> {
    match raw {
        None => Ok(default),
        Some(s) => match s.parse::<u32>() {
            Ok(v) if v >= 1 => Ok(v),
            _ => Err(format!("{name} must be a positive integer, got '{s}'")),
        },
    }
}
