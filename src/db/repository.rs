// src/db/repository.rs
// DOCUMENTATION: Typed access to document collections
// PURPOSE: Map documents to entity structs and stamp creation/update timestamps

use super::document_store::{DocumentStore, JsonObject};
use crate::errors::AdminError;
use chrono::{SecondsFormat, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

pub const CREATED_AT_FIELD: &str = "createdAt";
pub const UPDATED_AT_FIELD: &str = "updatedAt";

/// A record type stored in its own named collection
pub trait Entity: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Collection name in the document store
    const COLLECTION: &'static str;
}

/// Timestamp format shared by every stored record
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// EntityRepository: list/get/create/update/delete for any Entity
/// DOCUMENTATION: Any store fault surfaces as a DatabaseError; no retries.
pub struct EntityRepository;

impl EntityRepository {
    /// List all records, newest first
    pub async fn list<T: Entity>(store: &dyn DocumentStore) -> Result<Vec<T>, AdminError> {
        let docs = store.list(T::COLLECTION, Some(CREATED_AT_FIELD)).await?;
        docs.into_iter()
            .map(|doc| decode::<T>(doc.id, doc.data))
            .collect()
    }

    /// Retrieve a record by id
    pub async fn get<T: Entity>(store: &dyn DocumentStore, id: &str) -> Result<T, AdminError> {
        let doc = store.get(T::COLLECTION, id).await?.ok_or_else(|| {
            log::warn!("{} not found: {}", T::COLLECTION, id);
            AdminError::NotFound(format!("{}/{}", T::COLLECTION, id))
        })?;

        decode(doc.id, doc.data)
    }

    /// Create a record from any serializable payload
    /// Stamps createdAt and updatedAt; the id is generated by the store.
    pub async fn create<T: Entity, R: Serialize>(
        store: &dyn DocumentStore,
        payload: &R,
    ) -> Result<T, AdminError> {
        let mut data = to_object(payload)?;
        data.remove("id");

        let now = Value::String(now_timestamp());
        data.insert(CREATED_AT_FIELD.to_string(), now.clone());
        data.insert(UPDATED_AT_FIELD.to_string(), now);

        let doc = store.insert(T::COLLECTION, data).await?;
        log::info!("Created {} record with id: {}", T::COLLECTION, doc.id);
        decode(doc.id, doc.data)
    }

    /// Partial update - only the fields present in `patch` are modified
    pub async fn update<T: Entity, R: Serialize>(
        store: &dyn DocumentStore,
        id: &str,
        patch: &R,
    ) -> Result<T, AdminError> {
        let mut data = to_object(patch)?;
        data.remove("id");
        data.remove(CREATED_AT_FIELD);
        data.insert(
            UPDATED_AT_FIELD.to_string(),
            Value::String(now_timestamp()),
        );

        let doc = store
            .update(T::COLLECTION, id, data)
            .await?
            .ok_or_else(|| {
                log::warn!("Update of missing {} record: {}", T::COLLECTION, id);
                AdminError::NotFound(format!("{}/{}", T::COLLECTION, id))
            })?;

        log::info!("Updated {} record: {}", T::COLLECTION, id);
        decode(doc.id, doc.data)
    }

    /// Unconditional hard delete, no cascade
    pub async fn delete<T: Entity>(store: &dyn DocumentStore, id: &str) -> Result<(), AdminError> {
        if store.delete(T::COLLECTION, id).await? {
            log::info!("Deleted {} record: {}", T::COLLECTION, id);
        } else {
            log::debug!("Delete of absent {} record: {}", T::COLLECTION, id);
        }
        Ok(())
    }
}

fn to_object<R: Serialize>(payload: &R) -> Result<JsonObject, AdminError> {
    match serde_json::to_value(payload) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(AdminError::InvalidInput(
            "record payload must be a JSON object".to_string(),
        )),
        Err(e) => Err(AdminError::InvalidInput(e.to_string())),
    }
}

fn decode<T: Entity>(id: String, mut data: JsonObject) -> Result<T, AdminError> {
    data.insert("id".to_string(), Value::String(id.clone()));
    serde_json::from_value(Value::Object(data)).map_err(|e| {
        log::error!("Malformed {} document {}: {}", T::COLLECTION, id, e);
        AdminError::DatabaseError(format!("malformed {} document {}", T::COLLECTION, id))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryDocumentStore;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Note {
        #[serde(default)]
        id: String,
        #[serde(default)]
        title: String,
        #[serde(default)]
        created_at: Option<String>,
        #[serde(default)]
        updated_at: Option<String>,
    }

    impl Entity for Note {
        const COLLECTION: &'static str = "notes";
    }

    #[tokio::test]
    async fn test_create_then_list_includes_generated_id() {
        let store = MemoryDocumentStore::new();
        let created: Note = EntityRepository::create(&store, &json!({"title": "hello"}))
            .await
            .unwrap();

        assert!(!created.id.is_empty());
        assert!(created.created_at.is_some());
        assert_eq!(created.created_at, created.updated_at);

        let listed: Vec<Note> = EntityRepository::list(&store).await.unwrap();
        assert_eq!(listed, vec![created]);
    }

    #[tokio::test]
    async fn test_update_keeps_created_at_and_stamps_updated_at() {
        let store = MemoryDocumentStore::new();
        let created: Note = EntityRepository::create(&store, &json!({"title": "a"}))
            .await
            .unwrap();

        let updated: Note = EntityRepository::update(
            &store,
            &created.id,
            &json!({"title": "b", "createdAt": "1970-01-01T00:00:00Z"}),
        )
        .await
        .unwrap();

        assert_eq!(updated.title, "b");
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn test_get_and_update_missing_are_not_found() {
        let store = MemoryDocumentStore::new();
        let get = EntityRepository::get::<Note>(&store, "nope").await;
        assert!(matches!(get, Err(AdminError::NotFound(_))));

        let update = EntityRepository::update::<Note, _>(&store, "nope", &json!({"title": "x"})).await;
        assert!(matches!(update, Err(AdminError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_then_list_excludes_id() {
        let store = MemoryDocumentStore::new();
        let keep: Note = EntityRepository::create(&store, &json!({"title": "keep"}))
            .await
            .unwrap();
        let gone: Note = EntityRepository::create(&store, &json!({"title": "gone"}))
            .await
            .unwrap();

        EntityRepository::delete::<Note>(&store, &gone.id).await.unwrap();
        // deleting again is not an error
        EntityRepository::delete::<Note>(&store, &gone.id).await.unwrap();

        let listed: Vec<Note> = EntityRepository::list(&store).await.unwrap();
        assert!(listed.iter().all(|n| n.id != gone.id));
        assert!(listed.iter().any(|n| n.id == keep.id));
    }
}
