// src/handlers/auth.rs
// DOCUMENTATION: Sign-in, sign-out and session inspection
// PURPOSE: Bearer-token sessions for allow-listed administrators

use crate::errors::AdminError;
use crate::models::UserRole;
use crate::services::{AuthService, Session};
use actix_web::{http::header, web, HttpRequest, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

/// Body of POST /auth/login
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Public part of a session
#[derive(Debug, Serialize)]
pub struct SessionUser {
    pub email: String,
    pub name: String,
    pub role: UserRole,
}

impl From<&Session> for SessionUser {
    fn from(session: &Session) -> Self {
        Self {
            email: session.email.clone(),
            name: session.name.clone(),
            role: session.role,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub expires_in: u64,
    pub user: SessionUser,
}

/// Extract the token from `Authorization: Bearer <token>`
fn bearer_token(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Helper function to verify admin authentication
/// DOCUMENTATION: Resolves the bearer token to a live session, then checks
/// the session still belongs to an allow-listed administrator
pub async fn require_admin(req: &HttpRequest, auth: &AuthService) -> Result<Session, AdminError> {
    let token = bearer_token(req).ok_or_else(|| {
        log::warn!("Admin request without token");
        AdminError::Unauthorized
    })?;

    let session = auth.session(token).await.ok_or_else(|| {
        log::warn!("Admin request with unknown or expired token");
        AdminError::Unauthorized
    })?;

    if session.role != UserRole::Admin || !auth.is_admin_email(&session.email) {
        log::warn!("Admin request from non-administrator {}", session.email);
        return Err(AdminError::Forbidden);
    }

    Ok(session)
}

/// JSON body of an admin mutation. Decoding errors are held back so that
/// `require_admin` always answers first.
pub type AdminJson<T> = Result<web::Json<T>, actix_web::Error>;

/// Unwrap an [`AdminJson`] once the caller is authenticated
pub fn admin_body<T>(body: AdminJson<T>) -> Result<T, AdminError> {
    body.map(web::Json::into_inner).map_err(|e| {
        log::warn!("Malformed admin request body: {}", e);
        AdminError::InvalidInput(e.to_string())
    })
}

/// POST /auth/login
pub async fn login(
    auth: web::Data<AuthService>,
    body: web::Json<LoginRequest>,
) -> Result<impl Responder, AdminError> {
    let session = auth.login(&body.email, &body.password).await?;

    Ok(HttpResponse::Ok().json(LoginResponse {
        expires_in: auth.sessions().ttl().as_secs(),
        user: SessionUser::from(&session),
        token: session.token,
    }))
}

/// POST /auth/logout
/// Always succeeds; an unknown token is already signed out
pub async fn logout(
    auth: web::Data<AuthService>,
    req: HttpRequest,
) -> Result<impl Responder, AdminError> {
    if let Some(token) = bearer_token(&req) {
        auth.logout(token).await;
    }
    Ok(HttpResponse::NoContent().finish())
}

/// GET /auth/me
pub async fn me(
    auth: web::Data<AuthService>,
    req: HttpRequest,
) -> Result<impl Responder, AdminError> {
    let session = require_admin(&req, &auth).await?;
    Ok(HttpResponse::Ok().json(SessionUser::from(&session)))
}

/// Configuration for auth routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .route("/login", web::post().to(login))
            .route("/logout", web::post().to(logout))
            .route("/me", web::get().to(me)),
    );
}
