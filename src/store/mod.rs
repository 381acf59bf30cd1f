// Document store adapter - collection-level CRUD over SQLite
// A single `documents` table holds every collection; payloads are JSON text
// and filters are evaluated over the decoded payloads, which keeps the store
// schemaless. No business logic lives here.

pub mod filter;

pub use filter::Filter;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::Row;
use std::str::FromStr;
use uuid::Uuid;

/// Collection names used by the application.
pub mod collections {
    pub const VENUES: &str = "venues";
    pub const EVENTS: &str = "events";
    pub const RSVPS: &str = "rsvps";
    pub const REVIEWS: &str = "reviews";
    pub const BOOKINGS: &str = "bookings";
    pub const POSTS: &str = "posts";
    pub const COMMENTS: &str = "comments";
    pub const REACTIONS: &str = "reactions";
    pub const CATEGORIES: &str = "categories";
    pub const SETTINGS: &str = "settings";
}

/// A stored document: opaque store-assigned key plus JSON payload.
#[derive(Debug, Clone)]
pub struct Document {
    pub id: String,
    pub data: Value,
}

impl Document {
    /// Public representation: the payload with the internal key surfaced as
    /// `id`. Applied uniformly to single-entity and list responses.
    pub fn into_value(self) -> Value {
        let mut data = self.data;
        if let Value::Object(map) = &mut data {
            map.insert("id".to_string(), Value::String(self.id));
        }
        data
    }

    pub fn decode<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_value(self.data.clone()).context("failed to decode document")
    }
}

pub struct DocumentStore {
    pool: SqlitePool,
}

impl DocumentStore {
    /// Open (creating if missing) the database at `url`. One store instance
    /// is constructed at startup and closed on shutdown.
    pub async fn connect(url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)
            .with_context(|| format!("invalid database url: {}", url))?
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .context("failed to connect to document store")?;
        Ok(Self { pool })
    }

    /// In-memory store for tests. A single connection, so every query sees
    /// the same database.
    pub async fn in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;
        let store = Self { pool };
        store.init().await?;
        Ok(store)
    }

    pub async fn init(&self) -> Result<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS documents (
                id TEXT PRIMARY KEY,
                collection TEXT NOT NULL,
                data TEXT NOT NULL,
                created INTEGER NOT NULL,
                updated INTEGER NOT NULL
            )",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_documents_collection ON documents(collection)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }

    pub async fn insert<T: Serialize>(&self, collection: &str, body: &T) -> Result<Document> {
        let data = serde_json::to_value(body).context("failed to serialize document")?;
        let id = Uuid::new_v4().to_string();
        let now = Utc::now().timestamp();

        sqlx::query(
            "INSERT INTO documents (id, collection, data, created, updated) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(collection)
        .bind(data.to_string())
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(Document { id, data })
    }

    pub async fn find_by_id(&self, collection: &str, id: &str) -> Result<Option<Document>> {
        let row = sqlx::query("SELECT id, data FROM documents WHERE collection = ? AND id = ?")
            .bind(collection)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(row_to_document).transpose()
    }

    /// Matching documents in insertion order, truncated to `limit`. There is
    /// no pagination cursor; callers needing more than the page cap get a
    /// truncated result.
    pub async fn find(&self, collection: &str, filter: &Filter, limit: usize) -> Result<Vec<Document>> {
        let rows = sqlx::query("SELECT id, data FROM documents WHERE collection = ? ORDER BY rowid")
            .bind(collection)
            .fetch_all(&self.pool)
            .await?;

        let mut docs = Vec::new();
        for row in rows {
            let doc = row_to_document(row)?;
            if filter.matches(&doc.data) {
                docs.push(doc);
                if docs.len() >= limit {
                    break;
                }
            }
        }
        Ok(docs)
    }

    pub async fn find_one(&self, collection: &str, filter: &Filter) -> Result<Option<Document>> {
        Ok(self.find(collection, filter, 1).await?.pop())
    }

    /// Count of all matching documents; never truncated.
    pub async fn count(&self, collection: &str, filter: &Filter) -> Result<u64> {
        let rows = sqlx::query("SELECT data FROM documents WHERE collection = ?")
            .bind(collection)
            .fetch_all(&self.pool)
            .await?;

        let mut count = 0u64;
        for row in rows {
            let raw: String = row.get("data");
            let data: Value = serde_json::from_str(&raw).context("stored document is not valid JSON")?;
            if filter.matches(&data) {
                count += 1;
            }
        }
        Ok(count)
    }

    /// Merge `patch`'s top-level fields into the stored payload. Returns
    /// false when no document matched.
    pub async fn update_fields(&self, collection: &str, id: &str, patch: Value) -> Result<bool> {
        let Some(doc) = self.find_by_id(collection, id).await? else {
            return Ok(false);
        };

        let mut data = doc.data;
        if let (Value::Object(map), Value::Object(fields)) = (&mut data, patch) {
            for (key, value) in fields {
                map.insert(key, value);
            }
        }

        let now = Utc::now().timestamp();
        let result =
            sqlx::query("UPDATE documents SET data = ?, updated = ? WHERE collection = ? AND id = ?")
                .bind(data.to_string())
                .bind(now)
                .bind(collection)
                .bind(id)
                .execute(&self.pool)
                .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Hard delete. Returns false when no document matched.
    pub async fn delete(&self, collection: &str, id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM documents WHERE collection = ? AND id = ?")
            .bind(collection)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn row_to_document(row: SqliteRow) -> Result<Document> {
    let id: String = row.get("id");
    let raw: String = row.get("data");
    let data = serde_json::from_str(&raw).context("stored document is not valid JSON")?;
    Ok(Document { id, data })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn insert_find_update_delete_round_trip() -> Result<()> {
        let store = DocumentStore::in_memory().await?;

        let doc = store
            .insert(collections::VENUES, &json!({"name": "Play Centre", "rating": 0.0}))
            .await?;
        assert!(!doc.id.is_empty());

        let found = store.find_by_id(collections::VENUES, &doc.id).await?;
        assert_eq!(found.as_ref().map(|d| &d.data["name"]), Some(&json!("Play Centre")));

        let updated = store
            .update_fields(collections::VENUES, &doc.id, json!({"rating": 4.5}))
            .await?;
        assert!(updated);
        let found = store.find_by_id(collections::VENUES, &doc.id).await?;
        assert_eq!(found.map(|d| d.data["rating"].clone()), Some(json!(4.5)));

        assert!(store.delete(collections::VENUES, &doc.id).await?);
        assert!(store.find_by_id(collections::VENUES, &doc.id).await?.is_none());
        assert!(!store.delete(collections::VENUES, &doc.id).await?);
        Ok(())
    }

    #[tokio::test]
    async fn find_filters_and_respects_page_limit() -> Result<()> {
        let store = DocumentStore::in_memory().await?;
        for i in 0..5 {
            store
                .insert(collections::EVENTS, &json!({"host_id": "h1", "n": i}))
                .await?;
        }
        store
            .insert(collections::EVENTS, &json!({"host_id": "h2", "n": 99}))
            .await?;

        let all = store
            .find(collections::EVENTS, &Filter::new().eq("host_id", "h1"), 100)
            .await?;
        assert_eq!(all.len(), 5);

        let capped = store
            .find(collections::EVENTS, &Filter::new().eq("host_id", "h1"), 3)
            .await?;
        assert_eq!(capped.len(), 3);
        // insertion order
        assert_eq!(capped[0].data["n"], json!(0));

        assert_eq!(store.count(collections::EVENTS, &Filter::new()).await?, 6);
        Ok(())
    }

    #[tokio::test]
    async fn collections_are_disjoint() -> Result<()> {
        let store = DocumentStore::in_memory().await?;
        store.insert(collections::VENUES, &json!({"name": "v"})).await?;
        store.insert(collections::EVENTS, &json!({"title": "e"})).await?;

        assert_eq!(store.find(collections::VENUES, &Filter::new(), 100).await?.len(), 1);
        assert_eq!(store.count(collections::EVENTS, &Filter::new()).await?, 1);
        Ok(())
    }

    #[tokio::test]
    async fn into_value_surfaces_public_id() -> Result<()> {
        let store = DocumentStore::in_memory().await?;
        let doc = store.insert(collections::POSTS, &json!({"content": "hi"})).await?;
        let id = doc.id.clone();

        let public = doc.into_value();
        assert_eq!(public["id"], json!(id));
        assert_eq!(public["content"], json!("hi"));
        Ok(())
    }

    #[tokio::test]
    async fn file_backed_store_survives_reopen() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let url = format!("sqlite:{}", dir.path().join("famigo.db").display());

        let store = DocumentStore::connect(&url).await?;
        store.init().await?;
        let doc = store
            .insert(collections::BOOKINGS, &json!({"user_id": "u1"}))
            .await?;
        store.close().await;

        let reopened = DocumentStore::connect(&url).await?;
        reopened.init().await?;
        let found = reopened.find_by_id(collections::BOOKINGS, &doc.id).await?;
        assert!(found.is_some());
        reopened.close().await;
        Ok(())
    }
}
