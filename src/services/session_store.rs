// src/services/session_store.rs
// DOCUMENTATION: In-memory administrator sessions
// PURPOSE: Map opaque bearer tokens to signed-in identities with a TTL

use crate::models::UserRole;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use uuid::Uuid;

/// A signed-in identity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Session {
    pub token: String,
    pub email: String,
    pub role: UserRole,
    pub name: String,
    pub issued_at: DateTime<Utc>,
}

/// Session entry with expiration
#[derive(Clone, Debug)]
struct SessionEntry {
    session: Session,
    expires_at: Instant,
}

impl SessionEntry {
    fn is_expired(&self) -> bool {
        Instant::now() > self.expires_at
    }
}

/// Thread-safe token store with a fixed TTL
pub struct SessionStore {
    store: RwLock<HashMap<String, SessionEntry>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl_seconds: u64) -> Self {
        Self::with_ttl(Duration::from_secs(ttl_seconds))
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issue a fresh token for `email`
    pub async fn create(&self, email: &str, role: UserRole) -> Session {
        let session = Session {
            token: Uuid::new_v4().to_string(),
            email: email.to_string(),
            role,
            name: match role {
                UserRole::Admin => "Administrateur Principal".to_string(),
                _ => "Utilisateur".to_string(),
            },
            issued_at: Utc::now(),
        };

        let mut store = self.store.write().await;
        store.insert(
            session.token.clone(),
            SessionEntry {
                session: session.clone(),
                expires_at: Instant::now() + self.ttl,
            },
        );
        log::debug!("Session issued for {} (TTL: {}s)", email, self.ttl.as_secs());

        session
    }

    /// Live session for `token`, if any
    pub async fn get(&self, token: &str) -> Option<Session> {
        let store = self.store.read().await;
        match store.get(token) {
            Some(entry) if !entry.is_expired() => Some(entry.session.clone()),
            Some(_) => {
                log::debug!("Session expired");
                None
            }
            None => None,
        }
    }

    /// Remove a token. Returns whether it existed.
    pub async fn revoke(&self, token: &str) -> bool {
        let mut store = self.store.write().await;
        store.remove(token).is_some()
    }

    /// Clear expired entries
    pub async fn cleanup(&self) {
        let mut store = self.store.write().await;
        let before_count = store.len();
        store.retain(|_, entry| !entry.is_expired());
        let after_count = store.len();

        if before_count > after_count {
            log::info!(
                "Session cleanup: removed {} expired sessions ({} remaining)",
                before_count - after_count,
                after_count
            );
        }
    }

    pub async fn active_count(&self) -> usize {
        let store = self.store.read().await;
        store.values().filter(|e| !e.is_expired()).count()
    }
}

/// Start background cleanup task
/// DOCUMENTATION: Periodically removes expired sessions
pub fn start_cleanup_task(sessions: Arc<SessionStore>, interval_seconds: u64) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(interval_seconds));

        loop {
            interval.tick().await;
            sessions.cleanup().await;
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_get() {
        let sessions = SessionStore::new(60);
        let session = sessions.create("admin@guineetourisme.gn", UserRole::Admin).await;

        let found = sessions.get(&session.token).await;
        assert_eq!(found, Some(session.clone()));
        assert_eq!(session.name, "Administrateur Principal");
    }

    #[tokio::test]
    async fn test_expiration() {
        let sessions = SessionStore::with_ttl(Duration::from_millis(50));
        let session = sessions.create("admin@guineetourisme.gn", UserRole::Admin).await;

        assert!(sessions.get(&session.token).await.is_some());

        tokio::time::sleep(Duration::from_millis(120)).await;

        assert!(sessions.get(&session.token).await.is_none());
    }

    #[tokio::test]
    async fn test_revoke() {
        let sessions = SessionStore::new(60);
        let session = sessions.create("admin@guineetourisme.gn", UserRole::Admin).await;

        assert!(sessions.revoke(&session.token).await);
        assert!(!sessions.revoke(&session.token).await);
        assert!(sessions.get(&session.token).await.is_none());
    }

    #[tokio::test]
    async fn test_cleanup() {
        let sessions = SessionStore::with_ttl(Duration::from_millis(50));
        sessions.create("a@guineetourisme.gn", UserRole::Admin).await;
        sessions.create("b@guineetourisme.gn", UserRole::Admin).await;

        tokio::time::sleep(Duration::from_millis(120)).await;

        sessions.cleanup().await;
        assert_eq!(sessions.active_count().await, 0);
    }
}
