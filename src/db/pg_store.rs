// src/db/pg_store.rs
// DOCUMENTATION: PostgreSQL-backed document store
// PURPOSE: Persist every collection as JSONB rows in the shared documents table

use super::document_store::{Document, DocumentStore, JsonObject};
use crate::errors::AdminError;
use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

/// Internal struct for mapping database rows to Document
#[derive(Debug, FromRow)]
struct DocumentRow {
    id: String,
    data: Json<JsonObject>,
}

impl DocumentRow {
    fn into_document(self) -> Document {
        Document {
            id: self.id,
            data: self.data.0,
        }
    }
}

pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn db_error(action: &str, collection: &str, e: sqlx::Error) -> AdminError {
    log::error!("Failed to {} in {}: {}", action, collection, e);
    AdminError::DatabaseError(e.to_string())
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn list(
        &self,
        collection: &str,
        order_by: Option<&str>,
    ) -> Result<Vec<Document>, AdminError> {
        let rows = match order_by {
            Some(field) => {
                sqlx::query_as::<_, DocumentRow>(
                    r#"
                    SELECT id, data
                    FROM documents
                    WHERE collection = $1
                    ORDER BY (data->>$2) DESC NULLS LAST, created_at ASC
                    "#,
                )
                .bind(collection)
                .bind(field)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, DocumentRow>(
                    "SELECT id, data FROM documents WHERE collection = $1 ORDER BY created_at ASC",
                )
                .bind(collection)
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(|e| db_error("list documents", collection, e))?;

        log::debug!("Listed {} documents from {}", rows.len(), collection);
        Ok(rows.into_iter().map(DocumentRow::into_document).collect())
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, AdminError> {
        let row = sqlx::query_as::<_, DocumentRow>(
            "SELECT id, data FROM documents WHERE collection = $1 AND id = $2",
        )
        .bind(collection)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("get document", collection, e))?;

        Ok(row.map(DocumentRow::into_document))
    }

    async fn insert(&self, collection: &str, data: JsonObject) -> Result<Document, AdminError> {
        let id = Uuid::new_v4().to_string();

        let row = sqlx::query_as::<_, DocumentRow>(
            r#"
            INSERT INTO documents (collection, id, data, created_at, updated_at)
            VALUES ($1, $2, $3, NOW(), NOW())
            RETURNING id, data
            "#,
        )
        .bind(collection)
        .bind(&id)
        .bind(Json(&data))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("insert document", collection, e))?;

        Ok(row.into_document())
    }

    async fn update(
        &self,
        collection: &str,
        id: &str,
        patch: JsonObject,
    ) -> Result<Option<Document>, AdminError> {
        // jsonb || jsonb replaces top-level keys, matching the shallow merge contract
        let row = sqlx::query_as::<_, DocumentRow>(
            r#"
            UPDATE documents
            SET data = data || $3,
                updated_at = NOW()
            WHERE collection = $1 AND id = $2
            RETURNING id, data
            "#,
        )
        .bind(collection)
        .bind(id)
        .bind(Json(&patch))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("update document", collection, e))?;

        Ok(row.map(DocumentRow::into_document))
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<bool, AdminError> {
        let rows = sqlx::query("DELETE FROM documents WHERE collection = $1 AND id = $2")
            .bind(collection)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("delete document", collection, e))?
            .rows_affected();

        Ok(rows > 0)
    }

    async fn count(&self, collection: &str) -> Result<i64, AdminError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM documents WHERE collection = $1")
            .bind(collection)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error("count documents", collection, e))?;

        Ok(count.0)
    }
}
