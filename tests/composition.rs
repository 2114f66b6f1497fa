// Composition tests — the full pipeline against mock collaborators.
//
// No network calls: the article source is a canned fetcher, and the store
// is either in-memory SQLite or a mock that always fails (to verify that
// persistence failures never fail the analysis).

use std::sync::Arc;

use async_trait::async_trait;
use rusqlite::Connection;

use wordfreq::analysis::frequency::AnalyzerConfig;
use wordfreq::analysis::pipeline::AnalysisPipeline;
use wordfreq::db::models::StoredResult;
use wordfreq::db::schema::create_tables;
use wordfreq::db::sqlite::SqliteStore;
use wordfreq::db::traits::ResultStore;
use wordfreq::error::AnalysisError;
use wordfreq::wiki::traits::ArticleFetcher;

/// Serves one canned extract for one known topic.
struct CannedFetcher {
    topic: &'static str,
    extract: &'static str,
}

#[async_trait]
impl ArticleFetcher for CannedFetcher {
    async fn fetch_extract(&self, topic: &str) -> Result<String, AnalysisError> {
        if topic == self.topic {
            Ok(self.extract.to_string())
        } else {
            Err(AnalysisError::NotFound(format!(
                "no article found for '{topic}'"
            )))
        }
    }
}

/// A store whose writes always fail.
struct BrokenStore;

#[async_trait]
impl ResultStore for BrokenStore {
    async fn table_count(&self) -> anyhow::Result<i64> {
        anyhow::bail!("store is broken")
    }
    async fn insert_result(&self, _topic: &str, _json: &str) -> anyhow::Result<i64> {
        anyhow::bail!("store is broken")
    }
    async fn result_count(&self) -> anyhow::Result<i64> {
        anyhow::bail!("store is broken")
    }
    async fn results_page(&self, _limit: u32, _offset: u64) -> anyhow::Result<Vec<StoredResult>> {
        anyhow::bail!("store is broken")
    }
    async fn latest_created_at(&self) -> anyhow::Result<Option<String>> {
        anyhow::bail!("store is broken")
    }
}

fn test_pipeline(config: AnalyzerConfig) -> AnalysisPipeline {
    AnalysisPipeline::new(
        Arc::new(CannedFetcher {
            topic: "rust",
            extract: "<p>Rust is a <b>systems</b> language. Rust compiles fast.</p>",
        }),
        config,
    )
}

fn test_store() -> SqliteStore {
    let conn = Connection::open_in_memory().unwrap();
    create_tables(&conn).unwrap();
    SqliteStore::new(conn)
}

#[tokio::test]
async fn run_fetches_strips_and_ranks() {
    let pipeline = test_pipeline(AnalyzerConfig::default());
    let result = pipeline.run("  RUST ").await.unwrap();

    assert_eq!(result.topic, "rust");
    assert_eq!(result.word_frequency[0].word, "rust");
    assert_eq!(result.word_frequency[0].count, 2);
    // Markup never shows up as a token
    assert!(result.word_frequency.iter().all(|e| e.word != "p" && e.word != "b"));
}

#[tokio::test]
async fn run_unknown_topic_is_not_found() {
    let pipeline = test_pipeline(AnalyzerConfig::default());
    let err = pipeline.run("nonexistent").await.unwrap_err();
    assert!(matches!(err, AnalysisError::NotFound(_)));
}

#[tokio::test]
async fn run_empty_topic_is_invalid_input() {
    let pipeline = test_pipeline(AnalyzerConfig::default());
    let err = pipeline.run("   ").await.unwrap_err();
    assert!(matches!(err, AnalysisError::InvalidInput(_)));
}

#[tokio::test]
async fn run_fully_filtered_text_is_not_found() {
    let pipeline = AnalysisPipeline::new(
        Arc::new(CannedFetcher {
            topic: "stopwords",
            extract: "The is in at which on a this",
        }),
        AnalyzerConfig {
            skip_common_words: true,
            ..Default::default()
        },
    );
    let err = pipeline.run("stopwords").await.unwrap_err();
    assert!(matches!(err, AnalysisError::NotFound(_)));
}

#[tokio::test]
async fn process_appends_to_the_store() {
    let pipeline = test_pipeline(AnalyzerConfig::default());
    let store = test_store();

    let result = pipeline.process("rust", &store).await.unwrap();
    assert_eq!(result.topic, "rust");

    assert_eq!(store.result_count().await.unwrap(), 1);
    let page = store.results_page(10, 0).await.unwrap();
    assert_eq!(page[0].topic, "rust");
    assert_eq!(page[0].word_frequency, result.word_frequency);
}

#[tokio::test]
async fn process_survives_a_broken_store() {
    let pipeline = test_pipeline(AnalyzerConfig::default());

    // The write fails; the analysis is still returned
    let result = pipeline.process("rust", &BrokenStore).await.unwrap();
    assert_eq!(result.topic, "rust");
    assert!(!result.word_frequency.is_empty());
}

#[tokio::test]
async fn result_serializes_with_word_count_pairs() {
    let pipeline = test_pipeline(AnalyzerConfig::default());
    let result = pipeline.run("rust").await.unwrap();

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["topic"], "rust");
    assert_eq!(json["word_frequency"][0]["word"], "rust");
    assert_eq!(json["word_frequency"][0]["count"], 2);
}
