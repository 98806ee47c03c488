// src/handlers/users.rs
// DOCUMENTATION: Admin handlers for platform users
// PURPOSE: CRUD, status toggle and role changes

use crate::db::DocumentStore;
use crate::errors::AdminError;
use crate::handlers::auth::{admin_body, require_admin, AdminJson};
use crate::models::{ChangeRoleRequest, CreateUserRequest, ListQuery, UpdateUserRequest};
use crate::services::{AuthService, UserService};
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use validator::Validate;

pub async fn list_users(
    store: web::Data<dyn DocumentStore>,
    auth: web::Data<AuthService>,
    req: HttpRequest,
    query: web::Query<ListQuery>,
) -> Result<impl Responder, AdminError> {
    require_admin(&req, &auth).await?;
    let result = UserService::list_users(store.get_ref(), &query).await?;
    Ok(HttpResponse::Ok().json(result))
}

pub async fn get_user(
    store: web::Data<dyn DocumentStore>,
    auth: web::Data<AuthService>,
    req: HttpRequest,
    path: web::Path<String>,
) -> Result<impl Responder, AdminError> {
    require_admin(&req, &auth).await?;
    let user = UserService::get_user(store.get_ref(), &path).await?;
    Ok(HttpResponse::Ok().json(user))
}

pub async fn create_user(
    store: web::Data<dyn DocumentStore>,
    auth: web::Data<AuthService>,
    req: HttpRequest,
    body: AdminJson<CreateUserRequest>,
) -> Result<impl Responder, AdminError> {
    require_admin(&req, &auth).await?;
    let body = admin_body(body)?;
    body.validate()?;

    let user = UserService::create_user(store.get_ref(), &body).await?;
    Ok(HttpResponse::Created().json(user))
}

pub async fn update_user(
    store: web::Data<dyn DocumentStore>,
    auth: web::Data<AuthService>,
    req: HttpRequest,
    path: web::Path<String>,
    body: AdminJson<UpdateUserRequest>,
) -> Result<impl Responder, AdminError> {
    require_admin(&req, &auth).await?;
    let body = admin_body(body)?;
    body.validate()?;

    let user = UserService::update_user(store.get_ref(), &path, &body).await?;
    Ok(HttpResponse::Ok().json(user))
}

/// POST /admin/users/{id}/status
/// Toggle between active and inactive
pub async fn toggle_status(
    store: web::Data<dyn DocumentStore>,
    auth: web::Data<AuthService>,
    req: HttpRequest,
    path: web::Path<String>,
) -> Result<impl Responder, AdminError> {
    require_admin(&req, &auth).await?;
    let user = UserService::toggle_status(store.get_ref(), &path).await?;
    Ok(HttpResponse::Ok().json(user))
}

/// PUT /admin/users/{id}/role
pub async fn change_role(
    store: web::Data<dyn DocumentStore>,
    auth: web::Data<AuthService>,
    req: HttpRequest,
    path: web::Path<String>,
    body: AdminJson<ChangeRoleRequest>,
) -> Result<impl Responder, AdminError> {
    require_admin(&req, &auth).await?;
    let body = admin_body(body)?;
    let user = UserService::change_role(store.get_ref(), &path, body.role).await?;
    Ok(HttpResponse::Ok().json(user))
}

pub async fn delete_user(
    store: web::Data<dyn DocumentStore>,
    auth: web::Data<AuthService>,
    req: HttpRequest,
    path: web::Path<String>,
) -> Result<impl Responder, AdminError> {
    require_admin(&req, &auth).await?;
    UserService::delete_user(store.get_ref(), &path).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// GET /admin/roles
/// Role catalogue with display names and privileges
pub async fn list_roles(
    auth: web::Data<AuthService>,
    req: HttpRequest,
) -> Result<impl Responder, AdminError> {
    require_admin(&req, &auth).await?;
    Ok(HttpResponse::Ok().json(UserService::roles()))
}

/// Configuration for user routes (mounted under /admin)
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/roles", web::get().to(list_roles)).service(
        web::scope("/users")
            .route("", web::get().to(list_users))
            .route("", web::post().to(create_user))
            .route("/{id}", web::get().to(get_user))
            .route("/{id}", web::put().to(update_user))
            .route("/{id}", web::delete().to(delete_user))
            .route("/{id}/status", web::post().to(toggle_status))
            .route("/{id}/role", web::put().to(change_role)),
    );
}
