// Core error taxonomy for the analysis pipeline.
//
// These are the failures that cross API boundaries and map to HTTP
// statuses in the web layer. Infrastructure failures (database opens,
// migrations) stay anyhow::Error at the call site, and persistence
// failures during `process` are logged and swallowed rather than raised.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The caller supplied something unusable — empty topic, bad count,
    /// non-numeric pagination parameters.
    #[error("{0}")]
    InvalidInput(String),

    /// No article (or no extract) exists for the topic, or the filtered
    /// analysis came back empty.
    #[error("{0}")]
    NotFound(String),

    /// The upstream MediaWiki request failed or returned a malformed
    /// payload. Never retried here.
    #[error("wikipedia fetch failed: {0}")]
    Fetch(String),
}
