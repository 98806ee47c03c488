// src/handlers/accommodations.rs
// DOCUMENTATION: Admin handlers for accommodations
// PURPOSE: CRUD plus the availability toggle

use crate::db::DocumentStore;
use crate::errors::AdminError;
use crate::handlers::auth::{admin_body, require_admin, AdminJson};
use crate::models::{CreateAccommodationRequest, ListQuery, UpdateAccommodationRequest};
use crate::services::{AccommodationService, AuthService};
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use validator::Validate;

pub async fn list_accommodations(
    store: web::Data<dyn DocumentStore>,
    auth: web::Data<AuthService>,
    req: HttpRequest,
    query: web::Query<ListQuery>,
) -> Result<impl Responder, AdminError> {
    require_admin(&req, &auth).await?;
    let result = AccommodationService::list_accommodations(store.get_ref(), &query).await?;
    Ok(HttpResponse::Ok().json(result))
}

pub async fn get_accommodation(
    store: web::Data<dyn DocumentStore>,
    auth: web::Data<AuthService>,
    req: HttpRequest,
    path: web::Path<String>,
) -> Result<impl Responder, AdminError> {
    require_admin(&req, &auth).await?;
    let accommodation = AccommodationService::get_accommodation(store.get_ref(), &path).await?;
    Ok(HttpResponse::Ok().json(accommodation))
}

pub async fn create_accommodation(
    store: web::Data<dyn DocumentStore>,
    auth: web::Data<AuthService>,
    req: HttpRequest,
    body: AdminJson<CreateAccommodationRequest>,
) -> Result<impl Responder, AdminError> {
    require_admin(&req, &auth).await?;
    let body = admin_body(body)?;
    body.validate()?;

    let accommodation = AccommodationService::create_accommodation(store.get_ref(), &body).await?;
    Ok(HttpResponse::Created().json(accommodation))
}

pub async fn update_accommodation(
    store: web::Data<dyn DocumentStore>,
    auth: web::Data<AuthService>,
    req: HttpRequest,
    path: web::Path<String>,
    body: AdminJson<UpdateAccommodationRequest>,
) -> Result<impl Responder, AdminError> {
    require_admin(&req, &auth).await?;
    let body = admin_body(body)?;
    body.validate()?;

    let accommodation =
        AccommodationService::update_accommodation(store.get_ref(), &path, &body).await?;
    Ok(HttpResponse::Ok().json(accommodation))
}

/// POST /admin/accommodations/{id}/availability
/// Flip the availability flag and return the updated record
pub async fn toggle_availability(
    store: web::Data<dyn DocumentStore>,
    auth: web::Data<AuthService>,
    req: HttpRequest,
    path: web::Path<String>,
) -> Result<impl Responder, AdminError> {
    require_admin(&req, &auth).await?;
    let accommodation = AccommodationService::toggle_availability(store.get_ref(), &path).await?;
    Ok(HttpResponse::Ok().json(accommodation))
}

pub async fn delete_accommodation(
    store: web::Data<dyn DocumentStore>,
    auth: web::Data<AuthService>,
    req: HttpRequest,
    path: web::Path<String>,
) -> Result<impl Responder, AdminError> {
    require_admin(&req, &auth).await?;
    AccommodationService::delete_accommodation(store.get_ref(), &path).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Configuration for accommodation routes (mounted under /admin)
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/accommodations")
            .route("", web::get().to(list_accommodations))
            .route("", web::post().to(create_accommodation))
            .route("/{id}", web::get().to(get_accommodation))
            .route("/{id}", web::put().to(update_accommodation))
            .route("/{id}", web::delete().to(delete_accommodation))
            .route("/{id}/availability", web::post().to(toggle_availability)),
    );
}
