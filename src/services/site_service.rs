// src/services/site_service.rs
// DOCUMENTATION: Business logic for tourist sites
// PURPOSE: Intermediary between handlers and the repository

use crate::db::{DocumentStore, EntityRepository};
use crate::errors::AdminError;
use crate::models::{CreateSiteRequest, ListQuery, ListResponse, Site, UpdateSiteRequest};
use crate::services::search::filter_records;

pub struct SiteService;

impl SiteService {
    /// Full collection load, then in-memory search and pagination
    pub async fn list_sites(
        store: &dyn DocumentStore,
        query: &ListQuery,
    ) -> Result<ListResponse<Site>, AdminError> {
        let sites: Vec<Site> = EntityRepository::list(store).await?;
        let matches = filter_records(sites, query.search_term());
        Ok(ListResponse::paginate(matches, query))
    }

    pub async fn get_site(store: &dyn DocumentStore, id: &str) -> Result<Site, AdminError> {
        EntityRepository::get(store, id).await
    }

    pub async fn create_site(
        store: &dyn DocumentStore,
        req: &CreateSiteRequest,
    ) -> Result<Site, AdminError> {
        EntityRepository::create(store, req).await
    }

    pub async fn update_site(
        store: &dyn DocumentStore,
        id: &str,
        req: &UpdateSiteRequest,
    ) -> Result<Site, AdminError> {
        EntityRepository::update(store, id, req).await
    }

    pub async fn delete_site(store: &dyn DocumentStore, id: &str) -> Result<(), AdminError> {
        EntityRepository::delete::<Site>(store, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryDocumentStore;

    fn create_request(name: &str, location: &str) -> CreateSiteRequest {
        serde_json::from_value(serde_json::json!({
            "name": name,
            "location": location,
            "rating": 4.5,
            "services": ["Guide", "Parking"]
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_created_site_is_listed_with_id() {
        let store = MemoryDocumentStore::new();
        let site = SiteService::create_site(&store, &create_request("Chutes de Kinkon", "Pita"))
            .await
            .unwrap();

        assert!(!site.id.is_empty());
        assert_eq!(site.difficulty_level, 1);

        let listed = SiteService::list_sites(&store, &ListQuery::default()).await.unwrap();
        assert_eq!(listed.total_count, 1);
        assert_eq!(listed.data[0].id, site.id);
        assert_eq!(listed.data[0].services, vec!["Guide", "Parking"]);
    }

    #[tokio::test]
    async fn test_list_filters_by_query() {
        let store = MemoryDocumentStore::new();
        SiteService::create_site(&store, &create_request("Chutes de Kinkon", "Pita"))
            .await
            .unwrap();
        SiteService::create_site(&store, &create_request("Mont Nimba", "Lola"))
            .await
            .unwrap();

        let query = ListQuery {
            q: Some("kinkon".into()),
            ..ListQuery::default()
        };
        let listed = SiteService::list_sites(&store, &query).await.unwrap();
        assert_eq!(listed.total_count, 1);
        assert_eq!(listed.data[0].name, "Chutes de Kinkon");
    }

    #[tokio::test]
    async fn test_update_changes_only_given_fields() {
        let store = MemoryDocumentStore::new();
        let site = SiteService::create_site(&store, &create_request("Mont Nimba", "Lola"))
            .await
            .unwrap();

        let patch = UpdateSiteRequest {
            rating: Some(5.0),
            category: Some("Montagne".into()),
            ..UpdateSiteRequest::default()
        };
        let updated = SiteService::update_site(&store, &site.id, &patch).await.unwrap();

        assert_eq!(updated.name, "Mont Nimba");
        assert_eq!(updated.rating, 5.0);
        assert_eq!(updated.category.as_deref(), Some("Montagne"));
        assert_eq!(updated.created_at, site.created_at);
    }

    #[tokio::test]
    async fn test_deleted_site_is_gone() {
        let store = MemoryDocumentStore::new();
        let site = SiteService::create_site(&store, &create_request("Mont Nimba", "Lola"))
            .await
            .unwrap();

        SiteService::delete_site(&store, &site.id).await.unwrap();

        let listed = SiteService::list_sites(&store, &ListQuery::default()).await.unwrap();
        assert!(listed.data.iter().all(|s| s.id != site.id));
        assert!(matches!(
            SiteService::get_site(&store, &site.id).await,
            Err(AdminError::NotFound(_))
        ));
    }
}
