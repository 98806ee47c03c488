// src/handlers/sites.rs
// DOCUMENTATION: Admin handlers for tourist sites
// PURPOSE: Parse requests, call SiteService, return responses

use crate::db::DocumentStore;
use crate::errors::AdminError;
use crate::handlers::auth::{admin_body, require_admin, AdminJson};
use crate::models::{CreateSiteRequest, ListQuery, UpdateSiteRequest};
use crate::services::{AuthService, SiteService};
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use validator::Validate;

/// GET /admin/sites
pub async fn list_sites(
    store: web::Data<dyn DocumentStore>,
    auth: web::Data<AuthService>,
    req: HttpRequest,
    query: web::Query<ListQuery>,
) -> Result<impl Responder, AdminError> {
    require_admin(&req, &auth).await?;
    let result = SiteService::list_sites(store.get_ref(), &query).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// GET /admin/sites/{id}
pub async fn get_site(
    store: web::Data<dyn DocumentStore>,
    auth: web::Data<AuthService>,
    req: HttpRequest,
    path: web::Path<String>,
) -> Result<impl Responder, AdminError> {
    require_admin(&req, &auth).await?;
    let site = SiteService::get_site(store.get_ref(), &path).await?;
    Ok(HttpResponse::Ok().json(site))
}

/// POST /admin/sites
pub async fn create_site(
    store: web::Data<dyn DocumentStore>,
    auth: web::Data<AuthService>,
    req: HttpRequest,
    body: AdminJson<CreateSiteRequest>,
) -> Result<impl Responder, AdminError> {
    require_admin(&req, &auth).await?;
    let body = admin_body(body)?;
    body.validate()?;

    let site = SiteService::create_site(store.get_ref(), &body).await?;
    Ok(HttpResponse::Created().json(site))
}

/// PUT /admin/sites/{id}
pub async fn update_site(
    store: web::Data<dyn DocumentStore>,
    auth: web::Data<AuthService>,
    req: HttpRequest,
    path: web::Path<String>,
    body: AdminJson<UpdateSiteRequest>,
) -> Result<impl Responder, AdminError> {
    require_admin(&req, &auth).await?;
    let body = admin_body(body)?;
    body.validate()?;

    let site = SiteService::update_site(store.get_ref(), &path, &body).await?;
    Ok(HttpResponse::Ok().json(site))
}

/// DELETE /admin/sites/{id}
pub async fn delete_site(
    store: web::Data<dyn DocumentStore>,
    auth: web::Data<AuthService>,
    req: HttpRequest,
    path: web::Path<String>,
) -> Result<impl Responder, AdminError> {
    require_admin(&req, &auth).await?;
    SiteService::delete_site(store.get_ref(), &path).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Configuration for site routes (mounted under /admin)
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/sites")
            .route("", web::get().to(list_sites))
            .route("", web::post().to(create_site))
            .route("/{id}", web::get().to(get_site))
            .route("/{id}", web::put().to(update_site))
            .route("/{id}", web::delete().to(delete_site)),
    );
}
