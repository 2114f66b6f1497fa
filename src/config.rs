use std::env;

use anyhow::Result;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Every
/// setting has a default, so the service runs with no configuration at all.
pub struct Config {
    /// SQLite database path (WORDFREQ_DB_PATH, defaults to ./wordfreq.db)
    pub db_path: String,
    /// MediaWiki API endpoint (WIKI_API_URL, defaults to English Wikipedia)
    pub wiki_api_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        Ok(Self {
            db_path: env::var("WORDFREQ_DB_PATH").unwrap_or_else(|_| "./wordfreq.db".to_string()),
            wiki_api_url: env::var("WIKI_API_URL")
                .unwrap_or_else(|_| crate::wiki::client::DEFAULT_WIKI_API_URL.to_string()),
        })
    }
}
