// src/services/user_service.rs
// DOCUMENTATION: Business logic for platform users
// PURPOSE: Registration defaults, status toggle and role changes

use crate::db::{now_timestamp, DocumentStore, EntityRepository};
use crate::errors::AdminError;
use crate::models::{
    ActivityStatus, CreateUserRequest, ListQuery, ListResponse, RoleDescriptor, UpdateUserRequest,
    User, UserRole,
};
use crate::services::search::filter_records;
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NewUser<'a> {
    #[serde(flatten)]
    request: &'a CreateUserRequest,
    registration_date: String,
    status: ActivityStatus,
}

pub struct UserService;

impl UserService {
    pub async fn list_users(
        store: &dyn DocumentStore,
        query: &ListQuery,
    ) -> Result<ListResponse<User>, AdminError> {
        let users: Vec<User> = EntityRepository::list(store).await?;
        Ok(ListResponse::paginate(
            filter_records(users, query.search_term()),
            query,
        ))
    }

    pub async fn get_user(store: &dyn DocumentStore, id: &str) -> Result<User, AdminError> {
        EntityRepository::get(store, id).await
    }

    pub async fn create_user(
        store: &dyn DocumentStore,
        req: &CreateUserRequest,
    ) -> Result<User, AdminError> {
        let record = NewUser {
            request: req,
            registration_date: now_timestamp(),
            status: ActivityStatus::Active,
        };
        EntityRepository::create(store, &record).await
    }

    pub async fn update_user(
        store: &dyn DocumentStore,
        id: &str,
        req: &UpdateUserRequest,
    ) -> Result<User, AdminError> {
        EntityRepository::update(store, id, req).await
    }

    pub async fn toggle_status(store: &dyn DocumentStore, id: &str) -> Result<User, AdminError> {
        let current: User = EntityRepository::get(store, id).await?;
        let patch = UpdateUserRequest {
            status: Some(current.status.toggled()),
            ..UpdateUserRequest::default()
        };
        EntityRepository::update(store, id, &patch).await
    }

    pub async fn change_role(
        store: &dyn DocumentStore,
        id: &str,
        role: UserRole,
    ) -> Result<User, AdminError> {
        let patch = UpdateUserRequest {
            role: Some(role),
            ..UpdateUserRequest::default()
        };
        let user: User = EntityRepository::update(store, id, &patch).await?;
        log::info!("User {} role set to {}", id, role.as_str());
        Ok(user)
    }

    pub async fn delete_user(store: &dyn DocumentStore, id: &str) -> Result<(), AdminError> {
        EntityRepository::delete::<User>(store, id).await
    }

    pub fn roles() -> Vec<RoleDescriptor> {
        UserRole::ALL.into_iter().map(RoleDescriptor::from).collect()
    }
}
