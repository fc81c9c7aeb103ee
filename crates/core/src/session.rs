//! Explicit authentication session lifecycle.
//!
//! [`SessionContext`] replaces ambient token lookups: it is created once,
//! [`load`](SessionContext::load)ed at startup from a [`SessionStore`],
//! passed to whatever needs auth state, and cleared on
//! [`logout`](SessionContext::logout). Token validity is re-checked against
//! the remote API through a [`SessionVerifier`], e.g. when the app becomes
//! visible again.

use std::sync::Mutex;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::RemoteId;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Account role as reported by the remote API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountRole {
    Customer,
    Partner,
}

/// The signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: RemoteId,
    pub email: String,
    pub role: AccountRole,
}

/// Durable state: what survives a restart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    pub token: String,
    pub user: Option<SessionUser>,
}

// ---------------------------------------------------------------------------
// Seams
// ---------------------------------------------------------------------------

/// Durable storage for the session token.
pub trait SessionStore: Send + Sync {
    fn load(&self) -> Result<Option<StoredSession>, CoreError>;
    fn save(&self, session: &StoredSession) -> Result<(), CoreError>;
    fn clear(&self) -> Result<(), CoreError>;
}

/// Checks a token against the remote API.
///
/// `Ok(None)` means the API rejected the token. `Err` means the check
/// itself could not be completed.
#[async_trait]
pub trait SessionVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> Result<Option<SessionUser>, CoreError>;
}

/// In-memory [`SessionStore`], for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    slot: Mutex<Option<StoredSession>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an already-persisted session.
    pub fn with_session(session: StoredSession) -> Self {
        Self {
            slot: Mutex::new(Some(session)),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Option<StoredSession>>, CoreError> {
        self.slot
            .lock()
            .map_err(|_| CoreError::Internal("session store lock poisoned".into()))
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<StoredSession>, CoreError> {
        Ok(self.lock()?.clone())
    }

    fn save(&self, session: &StoredSession) -> Result<(), CoreError> {
        *self.lock()? = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), CoreError> {
        *self.lock()? = None;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// SessionContext
// ---------------------------------------------------------------------------

/// Outcome of a [`SessionContext::revalidate`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Revalidation {
    /// No token was held; nothing to check.
    Anonymous,
    /// The remote API accepted the token.
    Valid,
    /// The remote API rejected the token and the session was cleared.
    Expired,
    /// The check could not be completed; the session was kept.
    Unverified,
}

/// Authentication state with an explicit lifecycle.
pub struct SessionContext<S: SessionStore> {
    store: S,
    current: Option<StoredSession>,
}

impl<S: SessionStore> SessionContext<S> {
    /// Create an empty context. Call [`load`](Self::load) before use.
    pub fn new(store: S) -> Self {
        Self {
            store,
            current: None,
        }
    }

    /// Read the persisted session, if any, into memory.
    pub fn load(&mut self) -> Result<(), CoreError> {
        self.current = self.store.load()?;
        Ok(())
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.current.as_ref().map(|s| s.token.as_str())
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.current.as_ref().and_then(|s| s.user.as_ref())
    }

    /// Whether the signed-in user may see the partner dashboard.
    pub fn is_partner(&self) -> bool {
        self.user()
            .is_some_and(|user| user.role == AccountRole::Partner)
    }

    /// Persist a freshly issued token and make it current.
    pub fn login(&mut self, token: impl Into<String>, user: SessionUser) -> Result<(), CoreError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(CoreError::Validation(
                "Session token must not be empty".to_string(),
            ));
        }
        let session = StoredSession {
            token,
            user: Some(user),
        };
        self.store.save(&session)?;
        self.current = Some(session);
        Ok(())
    }

    /// Drop the session from memory and durable storage.
    pub fn logout(&mut self) -> Result<(), CoreError> {
        self.current = None;
        self.store.clear()
    }

    /// Re-check the current token with the remote API.
    ///
    /// A rejected token logs the user out. A failed check keeps the
    /// session so that a flaky network does not sign anyone out.
    pub async fn revalidate<V>(&mut self, verifier: &V) -> Result<Revalidation, CoreError>
    where
        V: SessionVerifier + ?Sized,
    {
        let Some(token) = self.token().map(str::to_owned) else {
            return Ok(Revalidation::Anonymous);
        };

        match verifier.verify(&token).await {
            Ok(Some(user)) => {
                let session = StoredSession {
                    token,
                    user: Some(user),
                };
                if self.current.as_ref() != Some(&session) {
                    self.store.save(&session)?;
                    self.current = Some(session);
                }
                Ok(Revalidation::Valid)
            }
            Ok(None) => {
                self.logout()?;
                Ok(Revalidation::Expired)
            }
            Err(_) => Ok(Revalidation::Unverified),
        }
    }

    /// Tear the context down, returning the underlying store.
    pub fn into_store(self) -> S {
        self.store
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
