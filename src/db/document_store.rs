// src/db/document_store.rs
// DOCUMENTATION: Persistence boundary for named document collections
// PURPOSE: Generic list/get/add/update/delete primitives over JSON documents

use crate::errors::AdminError;
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::cmp::Ordering;

/// Top-level fields of a stored document
pub type JsonObject = Map<String, Value>;

/// A stored document: store-generated id plus its fields
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub data: JsonObject,
}

/// DocumentStore: the only contract the rest of the service depends on
/// DOCUMENTATION: Implemented by PgDocumentStore and MemoryDocumentStore.
/// Handlers receive it as `web::Data<dyn DocumentStore>`.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// All documents of a collection, sorted by `order_by` descending when given.
    /// Documents missing the field come last; ties keep insertion order.
    async fn list(
        &self,
        collection: &str,
        order_by: Option<&str>,
    ) -> Result<Vec<Document>, AdminError>;

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, AdminError>;

    /// Insert with a freshly generated id
    async fn insert(&self, collection: &str, data: JsonObject) -> Result<Document, AdminError>;

    /// Shallow merge of `patch` into the stored fields. `None` if the id is unknown.
    async fn update(
        &self,
        collection: &str,
        id: &str,
        patch: JsonObject,
    ) -> Result<Option<Document>, AdminError>;

    /// Hard delete. Returns whether a document was removed.
    async fn delete(&self, collection: &str, id: &str) -> Result<bool, AdminError>;

    async fn count(&self, collection: &str) -> Result<i64, AdminError>;
}

/// Descending comparison on one field, missing values last
pub fn compare_field_desc(a: &Document, b: &Document, field: &str) -> Ordering {
    match (a.data.get(field), b.data.get(field)) {
        (Some(left), Some(right)) => compare_values(right, left),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn compare_values(left: &Value, right: &Value) -> Ordering {
    match (left, right) {
        (Value::Number(l), Value::Number(r)) => {
            let l = l.as_f64().unwrap_or_default();
            let r = r.as_f64().unwrap_or_default();
            l.partial_cmp(&r).unwrap_or(Ordering::Equal)
        }
        (Value::String(l), Value::String(r)) => l.cmp(r),
        (Value::Bool(l), Value::Bool(r)) => l.cmp(r),
        _ => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(id: &str, data: Value) -> Document {
        Document {
            id: id.to_string(),
            data: data.as_object().cloned().unwrap_or_default(),
        }
    }

    #[test]
    fn test_compare_field_desc_orders_newest_first() {
        let mut docs = vec![
            doc("a", json!({"createdAt": "2024-01-01T00:00:00Z"})),
            doc("b", json!({})),
            doc("c", json!({"createdAt": "2024-03-01T00:00:00Z"})),
        ];
        docs.sort_by(|a, b| compare_field_desc(a, b, "createdAt"));

        let ids: Vec<&str> = docs.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_compare_numbers() {
        let a = doc("a", json!({"rating": 4.5}));
        let b = doc("b", json!({"rating": 3}));
        assert_eq!(compare_field_desc(&a, &b, "rating"), Ordering::Less);
    }
}
