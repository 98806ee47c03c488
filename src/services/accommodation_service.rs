// src/services/accommodation_service.rs
// DOCUMENTATION: Business logic for accommodations
// PURPOSE: Defaults on creation and the availability toggle

use crate::db::{DocumentStore, EntityRepository};
use crate::errors::AdminError;
use crate::models::{
    Accommodation, CreateAccommodationRequest, ListQuery, ListResponse,
    UpdateAccommodationRequest, ACCOMMODATION_IMAGE_PLACEHOLDER,
};
use crate::services::search::filter_records;
use chrono::Utc;
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NewAccommodation<'a> {
    #[serde(flatten)]
    request: &'a CreateAccommodationRequest,
    rating: f64,
    images: Vec<&'static str>,
    availability: bool,
    created_date: String,
}

pub struct AccommodationService;

impl AccommodationService {
    pub async fn list_accommodations(
        store: &dyn DocumentStore,
        query: &ListQuery,
    ) -> Result<ListResponse<Accommodation>, AdminError> {
        let items: Vec<Accommodation> = EntityRepository::list(store).await?;
        Ok(ListResponse::paginate(
            filter_records(items, query.search_term()),
            query,
        ))
    }

    pub async fn get_accommodation(
        store: &dyn DocumentStore,
        id: &str,
    ) -> Result<Accommodation, AdminError> {
        EntityRepository::get(store, id).await
    }

    /// New lodgings are unrated, available, dated today
    pub async fn create_accommodation(
        store: &dyn DocumentStore,
        req: &CreateAccommodationRequest,
    ) -> Result<Accommodation, AdminError> {
        let record = NewAccommodation {
            request: req,
            rating: 0.0,
            images: vec![ACCOMMODATION_IMAGE_PLACEHOLDER],
            availability: true,
            created_date: Utc::now().format("%Y-%m-%d").to_string(),
        };
        EntityRepository::create(store, &record).await
    }

    pub async fn update_accommodation(
        store: &dyn DocumentStore,
        id: &str,
        req: &UpdateAccommodationRequest,
    ) -> Result<Accommodation, AdminError> {
        EntityRepository::update(store, id, req).await
    }

    /// Flip availability. Read-then-write, so concurrent toggles may both apply.
    pub async fn toggle_availability(
        store: &dyn DocumentStore,
        id: &str,
    ) -> Result<Accommodation, AdminError> {
        let current: Accommodation = EntityRepository::get(store, id).await?;
        let patch = UpdateAccommodationRequest {
            availability: Some(!current.availability),
            ..UpdateAccommodationRequest::default()
        };
        EntityRepository::update(store, id, &patch).await
    }

    pub async fn delete_accommodation(
        store: &dyn DocumentStore,
        id: &str,
    ) -> Result<(), AdminError> {
        EntityRepository::delete::<Accommodation>(store, id).await
    }
}
