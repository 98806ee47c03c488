// src/handlers/public.rs
// DOCUMENTATION: Read-only endpoints for the public site
// PURPOSE: Destinations, active guides, the plan catalogue and map markers

use crate::db::DocumentStore;
use crate::errors::AdminError;
use crate::models::{ActivityStatus, ListQuery};
use crate::services::{GuideService, MapService, SiteService, SubscriptionService};
use actix_web::{web, HttpResponse, Responder};

/// GET /destinations
pub async fn list_destinations(
    store: web::Data<dyn DocumentStore>,
    query: web::Query<ListQuery>,
) -> Result<impl Responder, AdminError> {
    let result = SiteService::list_sites(store.get_ref(), &query).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// GET /destinations/{id}
pub async fn get_destination(
    store: web::Data<dyn DocumentStore>,
    path: web::Path<String>,
) -> Result<impl Responder, AdminError> {
    let site = SiteService::get_site(store.get_ref(), &path).await?;
    Ok(HttpResponse::Ok().json(site))
}

/// GET /guides
/// Active guides only
pub async fn list_guides(
    store: web::Data<dyn DocumentStore>,
    query: web::Query<ListQuery>,
) -> Result<impl Responder, AdminError> {
    let result = GuideService::list_active_guides(store.get_ref(), &query).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// GET /guides/{id}
/// Inactive guides are hidden from the public site
pub async fn get_guide(
    store: web::Data<dyn DocumentStore>,
    path: web::Path<String>,
) -> Result<impl Responder, AdminError> {
    let guide = GuideService::get_guide(store.get_ref(), &path).await?;
    if guide.status != ActivityStatus::Active {
        return Err(AdminError::NotFound(guide.id));
    }
    Ok(HttpResponse::Ok().json(guide))
}

/// GET /plans
pub async fn list_plans() -> impl Responder {
    HttpResponse::Ok().json(SubscriptionService::plans())
}

/// GET /map/markers
pub async fn map_markers(
    store: web::Data<dyn DocumentStore>,
) -> Result<impl Responder, AdminError> {
    let markers = MapService::markers(store.get_ref()).await?;
    Ok(HttpResponse::Ok().json(markers))
}

/// Configuration for public routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/destinations")
            .route("", web::get().to(list_destinations))
            .route("/{id}", web::get().to(get_destination)),
    )
    .service(
        web::scope("/guides")
            .route("", web::get().to(list_guides))
            .route("/{id}", web::get().to(get_guide)),
    )
    .route("/plans", web::get().to(list_plans))
    .route("/map/markers", web::get().to(map_markers));
}
