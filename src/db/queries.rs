// Database queries — all SQL lives here.
//
// Every database interaction goes through this module, giving the rest
// of the app clean Rust interfaces.

use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};

use crate::analysis::frequency::WordFrequency;

use super::models::StoredResult;

/// Append one analysis result. Returns the new row id.
/// created_at is assigned by SQLite.
pub fn insert_result(conn: &Connection, topic: &str, word_frequency_json: &str) -> Result<i64> {
    conn.execute(
        "INSERT INTO search_results (topic, word_frequency) VALUES (?1, ?2)",
        params![topic, word_frequency_json],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Total number of stored analyses.
pub fn result_count(conn: &Connection) -> Result<i64> {
    let count: i64 =
        conn.query_row("SELECT COUNT(*) FROM search_results", [], |row| row.get(0))?;
    Ok(count)
}

/// One page of stored analyses, newest first. The id tiebreak keeps
/// ordering deterministic when several rows share a timestamp.
pub fn results_page(conn: &Connection, limit: u32, offset: u64) -> Result<Vec<StoredResult>> {
    // rusqlite has no ToSql for u64; SQLite's OFFSET is an i64 anyway, and
    // the store can never hold more rows than that.
    let offset = i64::try_from(offset).unwrap_or(i64::MAX);
    let mut stmt = conn.prepare(
        "SELECT id, topic, word_frequency, created_at
         FROM search_results
         ORDER BY created_at DESC, id DESC
         LIMIT ?1 OFFSET ?2",
    )?;

    let rows = stmt.query_map(params![limit, offset], |row| {
        let id: i64 = row.get(0)?;
        let frequency_json: String = row.get(2)?;
        // A corrupt blob degrades to an empty list instead of failing the
        // whole page
        let word_frequency: Vec<WordFrequency> = serde_json::from_str(&frequency_json)
            .unwrap_or_else(|e| {
                tracing::warn!(id = id, error = %e, "Corrupt word_frequency in stored result");
                Vec::new()
            });
        Ok(StoredResult {
            id,
            topic: row.get(1)?,
            word_frequency,
            created_at: row.get(3)?,
        })
    })?;

    let mut results = Vec::new();
    for row in rows {
        results.push(row?);
    }
    Ok(results)
}

/// Timestamp of the most recent analysis, if any.
pub fn latest_created_at(conn: &Connection) -> Result<Option<String>> {
    let mut stmt = conn.prepare(
        "SELECT created_at FROM search_results ORDER BY created_at DESC, id DESC LIMIT 1",
    )?;
    let result = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(result)
}
