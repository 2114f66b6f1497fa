// MediaWiki client — fetches article intro extracts for analysis.

pub mod client;
pub mod traits;

pub use client::WikiClient;
