// Data models — Rust structs that map to database rows.
//
// Separate from the queries so other modules can use them without
// depending on rusqlite directly.

use serde::{Deserialize, Serialize};

use crate::analysis::frequency::WordFrequency;

/// A stored analysis, as returned by the history listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredResult {
    pub id: i64,
    pub topic: String,
    /// The ranked frequencies (JSON-encoded in the DB)
    pub word_frequency: Vec<WordFrequency>,
    /// Server-assigned creation timestamp
    pub created_at: String,
}
