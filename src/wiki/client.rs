// HTTP client for the MediaWiki extracts API.
//
// Queries action=query&prop=extracts&exintro for the intro section of the
// article whose title matches the topic. The response keys pages by an
// opaque page id; the first entry carrying an extract wins. Missing
// articles come back as a page with no extract field.

use std::collections::HashMap;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::error::AnalysisError;

use super::traits::ArticleFetcher;

/// Default MediaWiki API endpoint (English Wikipedia).
pub const DEFAULT_WIKI_API_URL: &str = "https://en.wikipedia.org/w/api.php";

/// Thin reqwest wrapper over the MediaWiki extracts API.
pub struct WikiClient {
    client: reqwest::Client,
    api_url: String,
}

impl WikiClient {
    /// Create a client pointing at the given MediaWiki API endpoint.
    ///
    /// Defaults to the English Wikipedia — pass a different URL for
    /// testing or other wikis.
    pub fn new(api_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("wordfreq/0.1 (word-frequency analysis)")
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl ArticleFetcher for WikiClient {
    async fn fetch_extract(&self, topic: &str) -> Result<String, AnalysisError> {
        debug!(topic = topic, "MediaWiki extracts request");

        let response = self
            .client
            .get(&self.api_url)
            .query(&[
                ("action", "query"),
                ("prop", "extracts"),
                ("format", "json"),
                ("exintro", ""),
                ("titles", topic),
            ])
            .send()
            .await
            .map_err(|e| AnalysisError::Fetch(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AnalysisError::Fetch(format!(
                "MediaWiki API returned {}",
                response.status()
            )));
        }

        let payload: QueryResponse = response
            .json()
            .await
            .map_err(|e| AnalysisError::Fetch(format!("malformed MediaWiki payload: {e}")))?;

        payload
            .query
            .and_then(|q| q.pages.into_values().find_map(|page| page.extract))
            .ok_or_else(|| AnalysisError::NotFound(format!("no article found for '{topic}'")))
    }
}

// -- Serde types for the extracts response --

#[derive(Debug, Deserialize)]
struct QueryResponse {
    query: Option<Query>,
}

#[derive(Debug, Deserialize)]
struct Query {
    pages: HashMap<String, Page>,
}

#[derive(Debug, Deserialize)]
struct Page {
    extract: Option<String>,
}
