// src/db/memory_store.rs
// DOCUMENTATION: In-process document store
// PURPOSE: STORAGE_BACKEND=memory and the test double for every service

use super::document_store::{compare_field_desc, Document, DocumentStore, JsonObject};
use crate::errors::AdminError;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Thread-safe map of collection name to documents in insertion order
#[derive(Default)]
pub struct MemoryDocumentStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn list(
        &self,
        collection: &str,
        order_by: Option<&str>,
    ) -> Result<Vec<Document>, AdminError> {
        let store = self.collections.read().await;
        let mut docs = store.get(collection).cloned().unwrap_or_default();

        if let Some(field) = order_by {
            // sort_by is stable, so ties keep insertion order
            docs.sort_by(|a, b| compare_field_desc(a, b, field));
        }

        Ok(docs)
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, AdminError> {
        let store = self.collections.read().await;
        Ok(store
            .get(collection)
            .and_then(|docs| docs.iter().find(|d| d.id == id))
            .cloned())
    }

    async fn insert(&self, collection: &str, data: JsonObject) -> Result<Document, AdminError> {
        let document = Document {
            id: Uuid::new_v4().to_string(),
            data,
        };

        let mut store = self.collections.write().await;
        store
            .entry(collection.to_string())
            .or_default()
            .push(document.clone());

        log::debug!("Memory store insert {}/{}", collection, document.id);
        Ok(document)
    }

    async fn update(
        &self,
        collection: &str,
        id: &str,
        patch: JsonObject,
    ) -> Result<Option<Document>, AdminError> {
        let mut store = self.collections.write().await;
        let Some(document) = store
            .get_mut(collection)
            .and_then(|docs| docs.iter_mut().find(|d| d.id == id))
        else {
            return Ok(None);
        };

        for (key, value) in patch {
            document.data.insert(key, value);
        }

        Ok(Some(document.clone()))
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<bool, AdminError> {
        let mut store = self.collections.write().await;
        let Some(docs) = store.get_mut(collection) else {
            return Ok(false);
        };

        let before = docs.len();
        docs.retain(|d| d.id != id);
        Ok(docs.len() < before)
    }

    async fn count(&self, collection: &str) -> Result<i64, AdminError> {
        let store = self.collections.read().await;
        Ok(store.get(collection).map(|docs| docs.len() as i64).unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: serde_json::Value) -> JsonObject {
        value.as_object().cloned().unwrap_or_default()
    }

    #[tokio::test]
    async fn test_insert_generates_distinct_ids() {
        let store = MemoryDocumentStore::new();
        let a = store.insert("sites", fields(json!({"name": "A"}))).await.unwrap();
        let b = store.insert("sites", fields(json!({"name": "B"}))).await.unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(store.count("sites").await.unwrap(), 2);
        assert_eq!(store.count("guides").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_update_merges_top_level_fields() {
        let store = MemoryDocumentStore::new();
        let doc = store
            .insert("sites", fields(json!({"name": "A", "rating": 3})))
            .await
            .unwrap();

        let updated = store
            .update("sites", &doc.id, fields(json!({"rating": 5})))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.data["name"], "A");
        assert_eq!(updated.data["rating"], 5);
    }

    #[tokio::test]
    async fn test_update_unknown_id_returns_none() {
        let store = MemoryDocumentStore::new();
        let result = store
            .update("sites", "missing", fields(json!({"name": "x"})))
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_is_hard_and_reports_removal() {
        let store = MemoryDocumentStore::new();
        let doc = store.insert("guides", fields(json!({"name": "G"}))).await.unwrap();

        assert!(store.delete("guides", &doc.id).await.unwrap());
        assert!(!store.delete("guides", &doc.id).await.unwrap());
        assert!(store.get("guides", &doc.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_orders_by_field_desc() {
        let store = MemoryDocumentStore::new();
        store
            .insert("sites", fields(json!({"name": "old", "createdAt": "2024-01-01T00:00:00Z"})))
            .await
            .unwrap();
        store
            .insert("sites", fields(json!({"name": "new", "createdAt": "2024-06-01T00:00:00Z"})))
            .await
            .unwrap();

        let docs = store.list("sites", Some("createdAt")).await.unwrap();
        assert_eq!(docs[0].data["name"], "new");
        assert_eq!(docs[1].data["name"], "old");
    }
}
