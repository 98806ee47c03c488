// src/handlers/subscriptions.rs
// DOCUMENTATION: Admin handlers for plan subscriptions
// PURPOSE: Enrollment CRUD and the per-plan statistics

use crate::db::DocumentStore;
use crate::errors::AdminError;
use crate::handlers::auth::{admin_body, require_admin, AdminJson};
use crate::models::{CreateSubscriptionRequest, ListQuery, UpdateSubscriptionRequest};
use crate::services::{AuthService, SubscriptionService};
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use validator::Validate;

pub async fn list_subscriptions(
    store: web::Data<dyn DocumentStore>,
    auth: web::Data<AuthService>,
    req: HttpRequest,
    query: web::Query<ListQuery>,
) -> Result<impl Responder, AdminError> {
    require_admin(&req, &auth).await?;
    let result = SubscriptionService::list_subscriptions(store.get_ref(), &query).await?;
    Ok(HttpResponse::Ok().json(result))
}

pub async fn get_subscription(
    store: web::Data<dyn DocumentStore>,
    auth: web::Data<AuthService>,
    req: HttpRequest,
    path: web::Path<String>,
) -> Result<impl Responder, AdminError> {
    require_admin(&req, &auth).await?;
    let subscription = SubscriptionService::get_subscription(store.get_ref(), &path).await?;
    Ok(HttpResponse::Ok().json(subscription))
}

pub async fn create_subscription(
    store: web::Data<dyn DocumentStore>,
    auth: web::Data<AuthService>,
    req: HttpRequest,
    body: AdminJson<CreateSubscriptionRequest>,
) -> Result<impl Responder, AdminError> {
    require_admin(&req, &auth).await?;
    let body = admin_body(body)?;
    body.validate()?;

    let subscription = SubscriptionService::create_subscription(store.get_ref(), &body).await?;
    Ok(HttpResponse::Created().json(subscription))
}

pub async fn update_subscription(
    store: web::Data<dyn DocumentStore>,
    auth: web::Data<AuthService>,
    req: HttpRequest,
    path: web::Path<String>,
    body: AdminJson<UpdateSubscriptionRequest>,
) -> Result<impl Responder, AdminError> {
    require_admin(&req, &auth).await?;
    let body = admin_body(body)?;
    body.validate()?;

    let subscription =
        SubscriptionService::update_subscription(store.get_ref(), &path, &body).await?;
    Ok(HttpResponse::Ok().json(subscription))
}

pub async fn delete_subscription(
    store: web::Data<dyn DocumentStore>,
    auth: web::Data<AuthService>,
    req: HttpRequest,
    path: web::Path<String>,
) -> Result<impl Responder, AdminError> {
    require_admin(&req, &auth).await?;
    SubscriptionService::delete_subscription(store.get_ref(), &path).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// GET /admin/plans/stats
/// Totals, active enrollments and monthly revenue per catalogue plan
pub async fn plan_stats(
    store: web::Data<dyn DocumentStore>,
    auth: web::Data<AuthService>,
    req: HttpRequest,
) -> Result<impl Responder, AdminError> {
    require_admin(&req, &auth).await?;
    let stats = SubscriptionService::plan_stats(store.get_ref()).await?;
    Ok(HttpResponse::Ok().json(stats))
}

/// Configuration for subscription routes (mounted under /admin)
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/plans/stats", web::get().to(plan_stats)).service(
        web::scope("/subscriptions")
            .route("", web::get().to(list_subscriptions))
            .route("", web::post().to(create_subscription))
            .route("/{id}", web::get().to(get_subscription))
            .route("/{id}", web::put().to(update_subscription))
            .route("/{id}", web::delete().to(delete_subscription)),
    );
}
