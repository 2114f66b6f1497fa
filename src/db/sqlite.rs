// SqliteStore — rusqlite backend implementing the ResultStore trait.
//
// The Connection is wrapped in tokio::sync::Mutex because Connection is
// !Send. Trait methods lock the mutex, do synchronous rusqlite work, and
// return. The lock is never held across .await points — Rust enforces
// this because MutexGuard is !Send.

use anyhow::Result;
use async_trait::async_trait;
use rusqlite::Connection;
use tokio::sync::Mutex;

use super::models::StoredResult;
use super::traits::ResultStore;

pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Wrap an already-opened rusqlite Connection.
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }
}

#[async_trait]
impl ResultStore for SqliteStore {
    async fn table_count(&self) -> Result<i64> {
        let conn = self.conn.lock().await;
        super::schema::table_count(&conn)
    }

    async fn insert_result(&self, topic: &str, word_frequency_json: &str) -> Result<i64> {
        let conn = self.conn.lock().await;
        super::queries::insert_result(&conn, topic, word_frequency_json)
    }

    async fn result_count(&self) -> Result<i64> {
        let conn = self.conn.lock().await;
        super::queries::result_count(&conn)
    }

    async fn results_page(&self, limit: u32, offset: u64) -> Result<Vec<StoredResult>> {
        let conn = self.conn.lock().await;
        super::queries::results_page(&conn, limit, offset)
    }

    async fn latest_created_at(&self) -> Result<Option<String>> {
        let conn = self.conn.lock().await;
        super::queries::latest_created_at(&conn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::schema::create_tables;

    async fn test_store() -> SqliteStore {
        let conn = Connection::open_in_memory().unwrap();
        create_tables(&conn).unwrap();
        SqliteStore::new(conn)
    }

    #[tokio::test]
    async fn test_insert_and_count() {
        let store = test_store().await;
        assert_eq!(store.result_count().await.unwrap(), 0);
        let id = store
            .insert_result("rust", r#"[{"word":"rust","count":3}]"#)
            .await
            .unwrap();
        assert!(id > 0);
        assert_eq!(store.result_count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_results_page_newest_first() {
        let store = test_store().await;
        store.insert_result("first", "[]").await.unwrap();
        store.insert_result("second", "[]").await.unwrap();
        store.insert_result("third", "[]").await.unwrap();

        let page = store.results_page(2, 0).await.unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].topic, "third");
        assert_eq!(page[1].topic, "second");

        let rest = store.results_page(2, 2).await.unwrap();
        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0].topic, "first");
    }

    #[tokio::test]
    async fn test_stored_frequencies_roundtrip() {
        let store = test_store().await;
        store
            .insert_result("rust", r#"[{"word":"rust","count":3},{"word":"crate","count":1}]"#)
            .await
            .unwrap();
        let page = store.results_page(10, 0).await.unwrap();
        assert_eq!(page[0].word_frequency.len(), 2);
        assert_eq!(page[0].word_frequency[0].word, "rust");
        assert_eq!(page[0].word_frequency[0].count, 3);
        assert!(!page[0].created_at.is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_frequency_blob_degrades_to_empty_list() {
        let store = test_store().await;
        store.insert_result("mangled", "not json at all").await.unwrap();
        let page = store.results_page(10, 0).await.unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].topic, "mangled");
        assert!(page[0].word_frequency.is_empty());
    }

    #[tokio::test]
    async fn test_latest_created_at() {
        let store = test_store().await;
        assert!(store.latest_created_at().await.unwrap().is_none());
        store.insert_result("rust", "[]").await.unwrap();
        assert!(store.latest_created_at().await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_table_count() {
        let store = test_store().await;
        assert_eq!(store.table_count().await.unwrap(), 2);
    }
}
