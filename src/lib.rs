// Wordfreq: word-frequency analysis of Wikipedia articles.
//
// This is the library root. Each module corresponds to a major subsystem:
// text analysis, the MediaWiki client, SQLite persistence, terminal
// output, and the web API.

pub mod analysis;
pub mod config;
pub mod db;
pub mod error;
pub mod output;
pub mod web;
pub mod wiki;
