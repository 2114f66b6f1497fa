// Store seam — the pipeline and web layer depend on this trait, not on
// rusqlite, so tests can swap in mocks or in-memory databases.

use anyhow::Result;
use async_trait::async_trait;

use super::models::StoredResult;

/// Append-only store of analysis results with paginated retrieval.
#[async_trait]
pub trait ResultStore: Send + Sync {
    /// Number of tables (init confirmation).
    async fn table_count(&self) -> Result<i64>;

    /// Append one analysis. `word_frequency_json` is the serialized
    /// ranking; the store assigns the creation timestamp.
    async fn insert_result(&self, topic: &str, word_frequency_json: &str) -> Result<i64>;

    /// Total stored analyses.
    async fn result_count(&self) -> Result<i64>;

    /// One page of stored analyses, newest first.
    async fn results_page(&self, limit: u32, offset: u64) -> Result<Vec<StoredResult>>;

    /// Timestamp of the most recent analysis, if any.
    async fn latest_created_at(&self) -> Result<Option<String>>;
}
