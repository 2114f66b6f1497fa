// Analysis endpoint.
//
// GET /word_frequency?topic=…&n=…&skip_common_words=…&skip_numbers=…
//
// Runs the full pipeline (fetch → sanitize → analyze) and appends the
// result to the history store. Persistence failures are logged inside
// the pipeline and never fail the response.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::analysis::frequency::AnalyzerConfig;
use crate::analysis::pipeline::AnalysisPipeline;
use crate::error::AnalysisError;
use crate::web::{api_error, AppState};

#[derive(Deserialize, Default)]
pub struct FrequencyQuery {
    pub topic: Option<String>,
    /// How many top words to return (default 10)
    pub n: Option<String>,
    /// "true" or "1" to drop common words
    pub skip_common_words: Option<String>,
    /// "true" or "1" to drop all-digit tokens
    pub skip_numbers: Option<String>,
}

/// GET /word_frequency — analyze a topic and persist the result.
pub async fn word_frequency(
    State(state): State<AppState>,
    Query(params): Query<FrequencyQuery>,
) -> Response {
    let topic = match params.topic.as_deref() {
        Some(t) if !t.trim().is_empty() => t,
        _ => return api_error(StatusCode::BAD_REQUEST, "Topic is required"),
    };

    let top_word_count = match parse_count(params.n.as_deref()) {
        Ok(n) => n,
        Err(msg) => return api_error(StatusCode::BAD_REQUEST, &msg),
    };

    let config = AnalyzerConfig {
        top_word_count,
        skip_common_words: parse_flag(params.skip_common_words.as_deref()),
        skip_numbers: parse_flag(params.skip_numbers.as_deref()),
    };

    let pipeline = AnalysisPipeline::new(state.fetcher.clone(), config);
    match pipeline.process(topic, state.store.as_ref()).await {
        Ok(result) => Json(result).into_response(),
        Err(e @ (AnalysisError::InvalidInput(_) | AnalysisError::NotFound(_))) => {
            api_error(StatusCode::BAD_REQUEST, &e.to_string())
        }
        Err(e @ AnalysisError::Fetch(_)) => {
            tracing::error!(error = %e, "Upstream fetch failed");
            api_error(StatusCode::BAD_GATEWAY, &e.to_string())
        }
    }
}

fn parse_count(raw: Option<&str>) -> Result<usize, String> {
    match raw {
        None => Ok(10),
        Some(s) => match s.parse::<usize>() {
            Ok(n) if n >= 1 => Ok(n),
            _ => Err(format!("n must be a positive integer, got '{s}'")),
        },
    }
}

/// Accept "true"/"1" as set; anything else (or absence) is unset.
fn parse_flag(raw: Option<&str>) -> bool {
    matches!(raw, Some("true") | Some("1"))
}
