// src/services/identity_client.rs
// DOCUMENTATION: External email/password sign-in
// PURPOSE: Verify credentials against the hosted identity service

use crate::errors::AdminError;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Identity confirmed by the provider
#[derive(Debug, Clone, PartialEq)]
pub struct VerifiedIdentity {
    pub email: String,
    pub uid: Option<String>,
}

/// The single "sign in with email/password" boundary
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> Result<VerifiedIdentity, AdminError>;
}

/// Identity Toolkit REST client
/// DOCUMENTATION: POST accounts:signInWithPassword with the project API key
pub struct IdentityToolkitClient {
    /// HTTP client for making requests
    client: Client,
    /// Project API key
    api_key: String,
    /// Base URL for the identity REST API
    base_url: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SignInRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignInResponse {
    local_id: Option<String>,
    email: String,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

impl IdentityToolkitClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: "https://identitytoolkit.googleapis.com/v1".to_string(),
        }
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url,
        }
    }
}

/// Map a provider error message to the service error taxonomy
fn classify_error(message: &str) -> AdminError {
    // messages look like "INVALID_PASSWORD" or "TOO_MANY_ATTEMPTS_TRY_LATER : ..."
    let code = message.split([' ', ':']).next().unwrap_or_default();
    match code {
        "EMAIL_NOT_FOUND" | "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" | "INVALID_EMAIL"
        | "USER_DISABLED" | "MISSING_PASSWORD" => AdminError::InvalidCredentials,
        "TOO_MANY_ATTEMPTS_TRY_LATER" => AdminError::RateLimitExceeded,
        _ => AdminError::ExternalApiError(message.to_string()),
    }
}

#[async_trait]
impl IdentityProvider for IdentityToolkitClient {
    async fn sign_in(&self, email: &str, password: &str) -> Result<VerifiedIdentity, AdminError> {
        let url = format!("{}/accounts:signInWithPassword", self.base_url);

        let response = self
            .client
            .post(&url)
            .query(&[("key", &self.api_key)])
            .json(&SignInRequest {
                email,
                password,
                return_secure_token: true,
            })
            .send()
            .await
            .map_err(|e| {
                log::error!("Identity provider request failed: {}", e);
                AdminError::ExternalApiError(format!("Request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorEnvelope>(&body)
                .map(|envelope| envelope.error.message)
                .unwrap_or_else(|_| format!("HTTP {}", status));
            log::warn!("Identity provider rejected sign-in ({}): {}", status, message);
            return Err(classify_error(&message));
        }

        let signed_in: SignInResponse = response.json().await.map_err(|e| {
            log::error!("Failed to parse identity provider response: {}", e);
            AdminError::ExternalApiError(format!("Parse error: {}", e))
        })?;

        Ok(VerifiedIdentity {
            email: signed_in.email,
            uid: signed_in.local_id,
        })
    }
}

/// Accepts any password. Only used when no API key is configured.
pub struct DevelopmentIdentityProvider;

#[async_trait]
impl IdentityProvider for DevelopmentIdentityProvider {
    async fn sign_in(&self, email: &str, _password: &str) -> Result<VerifiedIdentity, AdminError> {
        log::warn!("Development identity provider: password not verified for {}", email);
        Ok(VerifiedIdentity {
            email: email.to_string(),
            uid: None,
        })
    }
}
