// Fetcher seam — the pipeline depends on this trait, not on reqwest,
// so tests can run against a canned article source.

use async_trait::async_trait;

use crate::error::AnalysisError;

/// Anything that can produce raw article markup for a normalized topic.
#[async_trait]
pub trait ArticleFetcher: Send + Sync {
    /// Fetch the raw (HTML) intro extract for a topic.
    ///
    /// NotFound when no article or extract exists; Fetch for transport
    /// or payload failures.
    async fn fetch_extract(&self, topic: &str) -> Result<String, AnalysisError>;
}
