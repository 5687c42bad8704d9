use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqlitePool};

use crate::core::{StoreError, TodoDocument, TodoId};
use crate::storage::TodoStore;

/// SQLite-backed todo collection. One table, ids stored in their hex
/// encoding, timestamps as RFC 3339 text; rowid preserves insertion order.
pub struct SqliteTodoStore {
    pool: SqlitePool,
}

impl SqliteTodoStore {
    /// Connects once and bootstraps the schema. Callers treat a failure here
    /// as fatal; there is no retry.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let pool = SqlitePoolOptions::new().max_connections(5).connect(url).await?;
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS todos (
                id TEXT PRIMARY KEY,
                title TEXT NOT NULL,
                completed INTEGER NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL)",
        )
        .execute(&pool)
        .await?;
        Ok(Self { pool })
    }
}

fn decode_row(row: &SqliteRow) -> Result<TodoDocument, StoreError> {
    let id: String = row.get("id");
    let created_at: String = row.get("created_at");
    let id =
        TodoId::parse(&id).map_err(|_| StoreError::Corrupt(format!("unreadable id {id:?}")))?;
    let created_at = DateTime::parse_from_rfc3339(&created_at)
        .map_err(|e| StoreError::Corrupt(format!("unreadable created_at: {e}")))?
        .with_timezone(&Utc);
    Ok(TodoDocument {
        id,
        title: row.get("title"),
        completed: row.get("completed"),
        created_at,
    })
}

#[async_trait]
impl TodoStore for SqliteTodoStore {
    async fn list_all(&self) -> Result<Vec<TodoDocument>, StoreError> {
        let rows = sqlx::query("SELECT id, title, completed, created_at FROM todos ORDER BY rowid")
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(decode_row).collect()
    }

    async fn insert(&self, doc: &TodoDocument) -> Result<(), StoreError> {
        sqlx::query("INSERT INTO todos (id, title, completed, created_at) VALUES (?, ?, ?, ?)")
            .bind(doc.id.to_string())
            .bind(&doc.title)
            .bind(doc.completed)
            .bind(doc.created_at.to_rfc3339())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn update_by_id(
        &self,
        id: TodoId,
        title: &str,
        completed: bool,
    ) -> Result<(), StoreError> {
        // rows_affected of zero is deliberately ignored; updating a missing
        // document is a no-op success.
        sqlx::query("UPDATE todos SET title = ?, completed = ? WHERE id = ?")
            .bind(title)
            .bind(completed)
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete_by_id(&self, id: TodoId) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
