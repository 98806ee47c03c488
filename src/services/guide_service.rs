// src/services/guide_service.rs
// DOCUMENTATION: Business logic for tour guides

use crate::db::{DocumentStore, EntityRepository};
use crate::errors::AdminError;
use crate::models::{
    ActivityStatus, CreateGuideRequest, Guide, ListQuery, ListResponse, UpdateGuideRequest,
    GUIDE_AVATAR_PLACEHOLDER,
};
use crate::services::search::filter_records;
use serde::Serialize;

/// Stored shape of a freshly created guide
#[derive(Serialize)]
struct NewGuide<'a> {
    #[serde(flatten)]
    request: &'a CreateGuideRequest,
    rating: f64,
    reviews: u32,
    avatar: &'static str,
    status: ActivityStatus,
}

pub struct GuideService;

impl GuideService {
    pub async fn list_guides(
        store: &dyn DocumentStore,
        query: &ListQuery,
    ) -> Result<ListResponse<Guide>, AdminError> {
        let guides: Vec<Guide> = EntityRepository::list(store).await?;
        Ok(ListResponse::paginate(
            filter_records(guides, query.search_term()),
            query,
        ))
    }

    /// Public listing only shows guides currently active
    pub async fn list_active_guides(
        store: &dyn DocumentStore,
        query: &ListQuery,
    ) -> Result<ListResponse<Guide>, AdminError> {
        let guides: Vec<Guide> = EntityRepository::list(store).await?;
        let active = guides
            .into_iter()
            .filter(|g| g.status == ActivityStatus::Active)
            .collect();
        Ok(ListResponse::paginate(
            filter_records(active, query.search_term()),
            query,
        ))
    }

    pub async fn get_guide(store: &dyn DocumentStore, id: &str) -> Result<Guide, AdminError> {
        EntityRepository::get(store, id).await
    }

    /// New guides start unrated, active, with the placeholder avatar
    pub async fn create_guide(
        store: &dyn DocumentStore,
        req: &CreateGuideRequest,
    ) -> Result<Guide, AdminError> {
        let record = NewGuide {
            request: req,
            rating: 0.0,
            reviews: 0,
            avatar: GUIDE_AVATAR_PLACEHOLDER,
            status: ActivityStatus::Active,
        };
        EntityRepository::create(store, &record).await
    }

    pub async fn update_guide(
        store: &dyn DocumentStore,
        id: &str,
        req: &UpdateGuideRequest,
    ) -> Result<Guide, AdminError> {
        EntityRepository::update(store, id, req).await
    }

    pub async fn delete_guide(store: &dyn DocumentStore, id: &str) -> Result<(), AdminError> {
        EntityRepository::delete::<Guide>(store, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryDocumentStore;

    fn request(name: &str, email: &str, specialty: &str) -> CreateGuideRequest {
        serde_json::from_value(serde_json::json!({
            "name": name,
            "email": email,
            "specialty": specialty,
            "experience": 8,
            "languages": ["Français", "Peul"],
            "price": 75000
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_create_applies_defaults() {
        let store = MemoryDocumentStore::new();
        let guide = GuideService::create_guide(
            &store,
            &request("Mamadou Diallo", "mamadou.diallo@guide.gn", "Fouta Djallon"),
        )
        .await
        .unwrap();

        assert_eq!(guide.rating, 0.0);
        assert_eq!(guide.reviews, 0);
        assert_eq!(guide.avatar, GUIDE_AVATAR_PLACEHOLDER);
        assert_eq!(guide.status, ActivityStatus::Active);
        assert_eq!(guide.experience, 8);
        assert_eq!(guide.languages, vec!["Français", "Peul"]);
    }

    #[tokio::test]
    async fn test_public_listing_hides_inactive_guides() {
        let store = MemoryDocumentStore::new();
        let active = GuideService::create_guide(
            &store,
            &request("Fatoumata Camara", "f.camara@guide.gn", "Conakry & Îles de Loos"),
        )
        .await
        .unwrap();
        let retired = GuideService::create_guide(
            &store,
            &request("Ibrahima Sow", "i.sow@guide.gn", "Guinée Forestière"),
        )
        .await
        .unwrap();

        let patch = UpdateGuideRequest {
            status: Some(ActivityStatus::Inactive),
            ..UpdateGuideRequest::default()
        };
        GuideService::update_guide(&store, &retired.id, &patch)
            .await
            .unwrap();

        let public = GuideService::list_active_guides(&store, &ListQuery::default())
            .await
            .unwrap();
        assert_eq!(public.total_count, 1);
        assert_eq!(public.data[0].id, active.id);

        let admin = GuideService::list_guides(&store, &ListQuery::default())
            .await
            .unwrap();
        assert_eq!(admin.total_count, 2);
    }

    #[tokio::test]
    async fn test_search_by_specialty() {
        let store = MemoryDocumentStore::new();
        GuideService::create_guide(&store, &request("A", "a@guide.gn", "Haute Guinée"))
            .await
            .unwrap();
        GuideService::create_guide(&store, &request("B", "b@guide.gn", "Écotourisme"))
            .await
            .unwrap();

        let query = ListQuery {
            q: Some("haute".into()),
            ..ListQuery::default()
        };
        let listed = GuideService::list_guides(&store, &query).await.unwrap();
        assert_eq!(listed.total_count, 1);
        assert_eq!(listed.data[0].name, "A");
    }
}
