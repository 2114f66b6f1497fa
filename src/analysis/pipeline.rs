// Pipeline orchestration: validate → fetch → sanitize → analyze → persist.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::db::traits::ResultStore;
use crate::error::AnalysisError;
use crate::wiki::traits::ArticleFetcher;

use super::frequency::{AnalyzerConfig, FrequencyAnalyzer, WordFrequency};
use super::sanitize::TagStripper;
use super::topic::normalize_topic;

/// The outcome of one analysis run. Not mutated after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub topic: String,
    pub word_frequency: Vec<WordFrequency>,
}

pub struct AnalysisPipeline {
    fetcher: Arc<dyn ArticleFetcher>,
    analyzer: FrequencyAnalyzer,
    stripper: TagStripper,
}

impl AnalysisPipeline {
    pub fn new(fetcher: Arc<dyn ArticleFetcher>, config: AnalyzerConfig) -> Self {
        Self {
            fetcher,
            analyzer: FrequencyAnalyzer::new(config),
            stripper: TagStripper::default(),
        }
    }

    /// Fetch, sanitize and analyze a topic without persisting anything.
    ///
    /// Fails with NotFound if Wikipedia has no extract for the topic or
    /// the filtered analysis comes back empty.
    pub async fn run(&self, topic: &str) -> Result<AnalysisResult, AnalysisError> {
        let topic = normalize_topic(topic)?;

        let extract = self.fetcher.fetch_extract(&topic).await?;
        let text = self.stripper.strip_tags(&extract);
        let word_frequency = self.analyzer.analyze(&text);

        if word_frequency.is_empty() {
            return Err(AnalysisError::NotFound(format!(
                "no analyzable text found for '{topic}'"
            )));
        }

        info!(topic = %topic, entries = word_frequency.len(), "Analysis complete");

        Ok(AnalysisResult {
            topic,
            word_frequency,
        })
    }

    /// Like `run`, but also appends the result to the store.
    ///
    /// A persistence failure is logged and swallowed — the computed result
    /// is still valid and returned to the caller.
    pub async fn process(
        &self,
        topic: &str,
        store: &dyn ResultStore,
    ) -> Result<AnalysisResult, AnalysisError> {
        let result = self.run(topic).await?;

        match serde_json::to_string(&result.word_frequency) {
            Ok(json) => {
                if let Err(e) = store.insert_result(&result.topic, &json).await {
                    warn!(topic = %result.topic, error = %e, "Failed to persist analysis result");
                }
            }
            Err(e) => {
                warn!(topic = %result.topic, error = %e, "Failed to serialize word frequencies");
            }
        }

        Ok(result)
    }
}
