//! # Client session
//!
//! The backend authenticates with a session cookie; the client keeps a local record of
//! who is signed in so the UI can render before the server answers. The record lives
//! in a [`KeyValueStore`] (the browser's `sessionStorage` on the web) under three keys:
//!
//! | Key | Value |
//! |-----|-------|
//! | `session` | [`Session`] as JSON |
//! | `user` | [`User`] as JSON |
//! | `staySignedIn` | `"true"`, present only when the user asked to stay signed in |
//!
//! A stored session is only a hint. [`SessionManager::verify`] asks the server for the
//! current user; a 401/403 clears the record, other failures keep it.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use store::{keys, load_json, save_json, KeyValueStore};
use tracing::{info, warn};

use crate::error::ApiResult;
use crate::models::User;
use crate::services::SchoolMoney;
use crate::transport::Transport;

/// Lifetime of a normal session.
pub const SESSION_HOURS: i64 = 8;
/// Lifetime when "stay signed in" was ticked.
pub const STAY_SIGNED_IN_DAYS: i64 = 30;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub email: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub stay_signed_in: bool,
}

impl Session {
    pub fn issue(email: impl Into<String>, stay_signed_in: bool, now: DateTime<Utc>) -> Self {
        let lifetime = if stay_signed_in {
            Duration::days(STAY_SIGNED_IN_DAYS)
        } else {
            Duration::hours(SESSION_HOURS)
        };
        Self {
            email: email.into(),
            issued_at: now,
            expires_at: now + lifetime,
            stay_signed_in,
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Stored session plus the user it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct SignedIn {
    pub session: Session,
    pub user: User,
}

/// Reads and writes the local session record.
#[derive(Clone)]
pub struct SessionManager<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> SessionManager<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Persist a fresh session for `user`.
    pub async fn save(&self, user: &User, stay_signed_in: bool, now: DateTime<Utc>) -> SignedIn {
        let session = Session::issue(user.email.clone(), stay_signed_in, now);
        save_json(&self.store, keys::SESSION, &session).await;
        save_json(&self.store, keys::USER, user).await;
        if stay_signed_in {
            self.store
                .set(keys::STAY_SIGNED_IN, keys::STAY_SIGNED_IN_VALUE)
                .await;
        } else {
            self.store.remove(keys::STAY_SIGNED_IN).await;
        }
        SignedIn {
            session,
            user: user.clone(),
        }
    }

    /// Replace the cached user, keeping the session.
    pub async fn update_user(&self, user: &User) {
        save_json(&self.store, keys::USER, user).await;
    }

    /// The stored session, if any and not expired. An expired or partial record is
    /// removed.
    pub async fn restore(&self, now: DateTime<Utc>) -> Option<SignedIn> {
        let session: Option<Session> = load_json(&self.store, keys::SESSION).await;
        let user: Option<User> = load_json(&self.store, keys::USER).await;

        match (session, user) {
            (Some(session), Some(user)) if !session.is_expired(now) => {
                Some(SignedIn { session, user })
            }
            (None, None) => None,
            (Some(session), _) if session.is_expired(now) => {
                info!("Stored session expired at {}", session.expires_at);
                self.clear().await;
                None
            }
            _ => {
                warn!("Discarding incomplete stored session");
                self.clear().await;
                None
            }
        }
    }

    /// The cached user regardless of session state.
    pub async fn cached_user(&self) -> Option<User> {
        load_json(&self.store, keys::USER).await
    }

    pub async fn clear(&self) {
        self.store.remove(keys::SESSION).await;
        self.store.remove(keys::USER).await;
        self.store.remove(keys::STAY_SIGNED_IN).await;
    }

    /// Log in, fetch the user, then store the session, in that order.
    pub async fn sign_in<T: Transport>(
        &self,
        api: &SchoolMoney<T>,
        email: &str,
        password: &str,
        stay_signed_in: bool,
    ) -> ApiResult<SignedIn> {
        api.login(email, password, stay_signed_in).await?;
        let user = api.get_user().await?;
        info!("Signed in as {}", user.email);
        Ok(self.save(&user, stay_signed_in, Utc::now()).await)
    }

    /// Check a restored session against the server.
    ///
    /// Returns the refreshed record, `None` when the server rejected the session (the
    /// local record is cleared), or the stored record unchanged when the server could
    /// not be asked.
    pub async fn verify<T: Transport>(
        &self,
        api: &SchoolMoney<T>,
        stored: SignedIn,
    ) -> Option<SignedIn> {
        match api.get_user().await {
            Ok(user) => {
                self.update_user(&user).await;
                Some(SignedIn {
                    session: stored.session,
                    user,
                })
            }
            Err(err) if err.is_unauthorized() => {
                info!("Server rejected stored session");
                self.clear().await;
                None
            }
            Err(err) => {
                warn!("Could not verify session, keeping stored one: {err}");
                Some(stored)
            }
        }
    }

    /// Tell the server, then forget the local record even if the server call failed.
    pub async fn sign_out<T: Transport>(&self, api: &SchoolMoney<T>) -> ApiResult<()> {
        let result = api.logout().await;
        self.clear().await;
        result
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use store::MemoryStore;

    use super::*;
    use crate::config::ApiConfig;
    use crate::error::ApiError;
    use crate::mock::MockTransport;

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-09-01T08:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn backend() -> MockTransport {
        MockTransport::new(|request| match request.path.as_str() {
            "/auth/login" => Ok(json!({ "message": "Logged in" })),
            "/api/user/" => Ok(json!({ "data": { "id": 1, "email": "p@s.pl", "name": "Ana" } })),
            _ => Ok(serde_json::Value::Null),
        })
    }

    fn user() -> User {
        User {
            email: "p@s.pl".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_session_lifetime() {
        let short = Session::issue("p@s.pl", false, now());
        assert_eq!(short.expires_at - short.issued_at, Duration::hours(8));
        assert!(!short.is_expired(now() + Duration::hours(7)));
        assert!(short.is_expired(now() + Duration::hours(8)));

        let long = Session::issue("p@s.pl", true, now());
        assert_eq!(long.expires_at - long.issued_at, Duration::days(30));
    }

    #[tokio::test]
    async fn test_sign_in_without_stay_signed_in() {
        let store = MemoryStore::new();
        let sessions = SessionManager::new(store.clone());
        let api = SchoolMoney::new(backend(), ApiConfig::default());

        let signed_in = sessions.sign_in(&api, "p@s.pl", "secret", false).await.unwrap();
        assert_eq!(signed_in.user.name, "Ana");
        assert_eq!(store.keys(), vec!["session".to_string(), "user".to_string()]);
        assert_eq!(store.get(keys::STAY_SIGNED_IN).await, None);
    }

    #[tokio::test]
    async fn test_sign_in_with_stay_signed_in() {
        let store = MemoryStore::new();
        let sessions = SessionManager::new(store.clone());
        let api = SchoolMoney::new(backend(), ApiConfig::default());

        sessions.sign_in(&api, "p@s.pl", "secret", true).await.unwrap();
        assert_eq!(
            store.get(keys::STAY_SIGNED_IN).await.as_deref(),
            Some("true")
        );
    }

    #[tokio::test]
    async fn test_failed_login_stores_nothing() {
        let store = MemoryStore::new();
        let sessions = SessionManager::new(store.clone());
        let transport = MockTransport::new(|_| {
            Err(ApiError::from_response(401, br#"{"message":"Bad credentials"}"#))
        });
        let api = SchoolMoney::new(transport.clone(), ApiConfig::default());

        let err = sessions.sign_in(&api, "p@s.pl", "nope", true).await.unwrap_err();
        assert_eq!(err.to_string(), "Bad credentials");
        assert!(store.keys().is_empty());
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_restore_discards_expired() {
        let store = MemoryStore::new();
        let sessions = SessionManager::new(store.clone());
        sessions.save(&user(), false, now()).await;

        assert!(sessions.restore(now() + Duration::hours(1)).await.is_some());
        assert!(sessions.restore(now() + Duration::hours(9)).await.is_none());
        assert!(store.keys().is_empty());
    }

    #[tokio::test]
    async fn test_restore_discards_partial_record() {
        let store = MemoryStore::new();
        save_json(&store, keys::USER, &user()).await;
        let sessions = SessionManager::new(store.clone());

        assert!(sessions.restore(now()).await.is_none());
        assert!(store.keys().is_empty());
    }

    #[tokio::test]
    async fn test_verify_clears_on_unauthorized() {
        let store = MemoryStore::new();
        let sessions = SessionManager::new(store.clone());
        let stored = sessions.save(&user(), true, now()).await;
        let api = SchoolMoney::new(
            MockTransport::new(|_| Err(ApiError::from_response(401, b""))),
            ApiConfig::default(),
        );

        assert!(sessions.verify(&api, stored).await.is_none());
        assert!(store.keys().is_empty());
    }

    #[tokio::test]
    async fn test_verify_keeps_session_when_offline() {
        let store = MemoryStore::new();
        let sessions = SessionManager::new(store.clone());
        let stored = sessions.save(&user(), false, now()).await;
        let api = SchoolMoney::new(
            MockTransport::new(|_| Err(ApiError::network("connection refused"))),
            ApiConfig::default(),
        );

        let kept = sessions.verify(&api, stored.clone()).await;
        assert_eq!(kept, Some(stored));
        assert_eq!(store.keys().len(), 2);
    }

    #[tokio::test]
    async fn test_verify_refreshes_user() {
        let store = MemoryStore::new();
        let sessions = SessionManager::new(store.clone());
        let stored = sessions.save(&user(), false, now()).await;
        let api = SchoolMoney::new(backend(), ApiConfig::default());

        let refreshed = sessions.verify(&api, stored).await.unwrap();
        assert_eq!(refreshed.user.name, "Ana");
        assert_eq!(sessions.cached_user().await.unwrap().name, "Ana");
    }

    #[tokio::test]
    async fn test_sign_out_clears_even_on_failure() {
        let store = MemoryStore::new();
        let sessions = SessionManager::new(store.clone());
        sessions.save(&user(), true, now()).await;
        let transport = MockTransport::new(|_| Err(ApiError::network("offline")));
        let api = SchoolMoney::new(transport.clone(), ApiConfig::default());

        assert!(sessions.sign_out(&api).await.is_err());
        assert!(store.keys().is_empty());
        assert_eq!(transport.requests()[0].path, "/auth/logout");
    }
}
