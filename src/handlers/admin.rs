// src/handlers/admin.rs
// DOCUMENTATION: Admin dashboard and route tree
// PURPOSE: Dashboard snapshot endpoint and the single /admin scope

use crate::db::DocumentStore;
use crate::errors::AdminError;
use crate::handlers::auth::require_admin;
use crate::handlers::{accommodations, guides, sites, subscriptions, users};
use crate::services::{AuthService, DashboardService};
use actix_web::{web, HttpRequest, HttpResponse, Responder};

/// GET /admin/stats
/// Recompute the dashboard snapshot
///
/// DOCUMENTATION: Returns totals, the site category tally and weekly activity.
/// When refreshes overlap, the response is the newest committed snapshot.
pub async fn dashboard_stats(
    store: web::Data<dyn DocumentStore>,
    auth: web::Data<AuthService>,
    dashboard: web::Data<DashboardService>,
    req: HttpRequest,
) -> Result<impl Responder, AdminError> {
    require_admin(&req, &auth).await?;

    let snapshot = dashboard.refresh(store.get_ref()).await?;
    Ok(HttpResponse::Ok().json(snapshot))
}

/// Configuration for admin routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .route("/stats", web::get().to(dashboard_stats))
            .configure(sites::config)
            .configure(guides::config)
            .configure(accommodations::config)
            .configure(users::config)
            .configure(subscriptions::config),
    );
}
