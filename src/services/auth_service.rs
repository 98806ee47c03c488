// src/services/auth_service.rs
// DOCUMENTATION: Administrator sign-in
// PURPOSE: Allow-list, rate limit, credential check, then session issue

use crate::errors::AdminError;
use crate::models::UserRole;
use crate::services::identity_client::IdentityProvider;
use crate::services::session_store::{Session, SessionStore};
use governor::clock::DefaultClock;
use governor::state::keyed::DefaultKeyedStateStore;
use governor::{Quota, RateLimiter};
use std::num::NonZeroU32;
use std::sync::Arc;

type LoginLimiter = RateLimiter<String, DefaultKeyedStateStore<String>, DefaultClock>;

pub struct AuthService {
    provider: Arc<dyn IdentityProvider>,
    /// Lowercased administrator emails
    admin_emails: Vec<String>,
    sessions: Arc<SessionStore>,
    limiter: LoginLimiter,
}

impl AuthService {
    pub fn new(
        provider: Arc<dyn IdentityProvider>,
        admin_emails: &[String],
        sessions: Arc<SessionStore>,
        attempts_per_minute: u32,
    ) -> Self {
        let per_minute = NonZeroU32::new(attempts_per_minute).unwrap_or(NonZeroU32::MIN);

        Self {
            provider,
            admin_emails: admin_emails
                .iter()
                .map(|e| e.trim().to_lowercase())
                .collect(),
            sessions,
            limiter: RateLimiter::keyed(Quota::per_minute(per_minute)),
        }
    }

    /// Case-insensitive allow-list membership
    pub fn is_admin_email(&self, email: &str) -> bool {
        let email = email.trim().to_lowercase();
        self.admin_emails.iter().any(|allowed| *allowed == email)
    }

    /// Sign in an administrator.
    /// Emails outside the allow-list are refused before the provider is contacted.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, AdminError> {
        let email = email.trim().to_lowercase();

        if email.is_empty() || password.is_empty() {
            return Err(AdminError::InvalidInput(
                "email and password are required".to_string(),
            ));
        }

        if !self.is_admin_email(&email) {
            log::warn!("Sign-in refused for non-administrator {}", email);
            return Err(AdminError::Forbidden);
        }

        // keyed only by allow-listed emails, so the limiter stays bounded
        if self.limiter.check_key(&email).is_err() {
            log::warn!("Too many sign-in attempts for {}", email);
            return Err(AdminError::RateLimitExceeded);
        }

        let identity = self.provider.sign_in(&email, password).await?;

        // the provider may canonicalise the address
        if !self.is_admin_email(&identity.email) {
            log::warn!(
                "Provider returned non-administrator identity {}",
                identity.email
            );
            return Err(AdminError::Forbidden);
        }

        let session = self.sessions.create(&email, UserRole::Admin).await;
        log::info!("✅ Administrator signed in: {}", email);

        Ok(session)
    }

    pub async fn logout(&self, token: &str) -> bool {
        let revoked = self.sessions.revoke(token).await;
        if revoked {
            log::info!("Administrator signed out");
        }
        revoked
    }

    /// Resolve a bearer token to its live session
    pub async fn session(&self, token: &str) -> Option<Session> {
        self.sessions.get(token).await
    }

    pub fn sessions(&self) -> &Arc<SessionStore> {
        &self.sessions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::identity_client::VerifiedIdentity;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Accepts one password and counts calls
    struct FakeProvider {
        password: &'static str,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl IdentityProvider for FakeProvider {
        async fn sign_in(
            &self,
            email: &str,
            password: &str,
        ) -> Result<VerifiedIdentity, AdminError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if password == self.password {
                Ok(VerifiedIdentity {
                    email: email.to_string(),
                    uid: Some("uid-1".into()),
                })
            } else {
                Err(AdminError::InvalidCredentials)
            }
        }
    }

    fn service(attempts: u32) -> (AuthService, Arc<FakeProvider>) {
        let provider = Arc::new(FakeProvider {
            password: "secret",
            calls: AtomicUsize::new(0),
        });
        let auth = AuthService::new(
            provider.clone(),
            &["Admin@GuineeTourisme.gn".to_string()],
            Arc::new(SessionStore::new(60)),
            attempts,
        );
        (auth, provider)
    }

    #[tokio::test]
    async fn test_admin_login_issues_session() {
        let (auth, _) = service(10);

        let session = auth
            .login("admin@guineetourisme.gn", "secret")
            .await
            .unwrap();
        assert_eq!(session.role, UserRole::Admin);
        assert_eq!(auth.session(&session.token).await, Some(session));
    }

    #[tokio::test]
    async fn test_allow_list_is_case_insensitive() {
        let (auth, _) = service(10);
        assert!(auth.is_admin_email(" ADMIN@guineetourisme.GN "));
        assert!(auth.login("ADMIN@GUINEETOURISME.GN", "secret").await.is_ok());
    }

    #[tokio::test]
    async fn test_non_admin_refused_even_with_valid_password() {
        let (auth, provider) = service(10);

        let result = auth.login("guide@guineetourisme.gn", "secret").await;
        assert!(matches!(result, Err(AdminError::Forbidden)));
        // the provider is never contacted
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
        assert_eq!(auth.sessions().active_count().await, 0);
    }

    #[tokio::test]
    async fn test_wrong_password() {
        let (auth, _) = service(10);
        let result = auth.login("admin@guineetourisme.gn", "nope").await;
        assert!(matches!(result, Err(AdminError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_rate_limit() {
        let (auth, _) = service(2);

        let _ = auth.login("admin@guineetourisme.gn", "nope").await;
        let _ = auth.login("admin@guineetourisme.gn", "nope").await;
        let result = auth.login("admin@guineetourisme.gn", "secret").await;
        assert!(matches!(result, Err(AdminError::RateLimitExceeded)));
    }

    #[tokio::test]
    async fn test_refused_emails_do_not_grow_limiter() {
        let (auth, _) = service(2);

        for i in 0..50 {
            let email = format!("visitor{}@example.com", i);
            let result = auth.login(&email, "secret").await;
            assert!(matches!(result, Err(AdminError::Forbidden)));
        }
        assert_eq!(auth.limiter.len(), 0);

        // refusals never spend the administrator's quota
        for _ in 0..5 {
            let _ = auth.login("outsider@example.com", "nope").await;
        }
        assert!(auth.login("admin@guineetourisme.gn", "secret").await.is_ok());
        assert_eq!(auth.limiter.len(), 1);
    }

    #[tokio::test]
    async fn test_logout_revokes_token() {
        let (auth, _) = service(10);
        let session = auth
            .login("admin@guineetourisme.gn", "secret")
            .await
            .unwrap();

        assert!(auth.logout(&session.token).await);
        assert!(auth.session(&session.token).await.is_none());
    }
}
