// src/handlers/guides.rs
// DOCUMENTATION: Admin handlers for tour guides
// PURPOSE: Parse requests, call GuideService, return responses

use crate::db::DocumentStore;
use crate::errors::AdminError;
use crate::handlers::auth::{admin_body, require_admin, AdminJson};
use crate::models::{CreateGuideRequest, ListQuery, UpdateGuideRequest};
use crate::services::{AuthService, GuideService};
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use validator::Validate;

/// GET /admin/guides
/// All guides, active or not
pub async fn list_guides(
    store: web::Data<dyn DocumentStore>,
    auth: web::Data<AuthService>,
    req: HttpRequest,
    query: web::Query<ListQuery>,
) -> Result<impl Responder, AdminError> {
    require_admin(&req, &auth).await?;
    let result = GuideService::list_guides(store.get_ref(), &query).await?;
    Ok(HttpResponse::Ok().json(result))
}

pub async fn get_guide(
    store: web::Data<dyn DocumentStore>,
    auth: web::Data<AuthService>,
    req: HttpRequest,
    path: web::Path<String>,
) -> Result<impl Responder, AdminError> {
    require_admin(&req, &auth).await?;
    let guide = GuideService::get_guide(store.get_ref(), &path).await?;
    Ok(HttpResponse::Ok().json(guide))
}

/// POST /admin/guides
pub async fn create_guide(
    store: web::Data<dyn DocumentStore>,
    auth: web::Data<AuthService>,
    req: HttpRequest,
    body: AdminJson<CreateGuideRequest>,
) -> Result<impl Responder, AdminError> {
    require_admin(&req, &auth).await?;
    let body = admin_body(body)?;
    body.validate()?;

    let guide = GuideService::create_guide(store.get_ref(), &body).await?;
    Ok(HttpResponse::Created().json(guide))
}

pub async fn update_guide(
    store: web::Data<dyn DocumentStore>,
    auth: web::Data<AuthService>,
    req: HttpRequest,
    path: web::Path<String>,
    body: AdminJson<UpdateGuideRequest>,
) -> Result<impl Responder, AdminError> {
    require_admin(&req, &auth).await?;
    let body = admin_body(body)?;
    body.validate()?;

    let guide = GuideService::update_guide(store.get_ref(), &path, &body).await?;
    Ok(HttpResponse::Ok().json(guide))
}

pub async fn delete_guide(
    store: web::Data<dyn DocumentStore>,
    auth: web::Data<AuthService>,
    req: HttpRequest,
    path: web::Path<String>,
) -> Result<impl Responder, AdminError> {
    require_admin(&req, &auth).await?;
    GuideService::delete_guide(store.get_ref(), &path).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Configuration for guide routes (mounted under /admin)
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/guides")
            .route("", web::get().to(list_guides))
            .route("", web::post().to(create_guide))
            .route("/{id}", web::get().to(get_guide))
            .route("/{id}", web::put().to(update_guide))
            .route("/{id}", web::delete().to(delete_guide)),
    );
}
