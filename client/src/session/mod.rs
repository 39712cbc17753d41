//! # Session Context
//!
//! Explicit session state handed to the [`ApiClient`](crate::services::api::ApiClient)
//! at construction.
//!
//! ```text
//! Unauthenticated --login ok--> Authenticated --logout / account deletion / sign_out--> Unauthenticated
//! ```
//!
//! Every outgoing request is built from a [`SessionContext::snapshot`], an owned copy
//! of the session at build time. Writes to the store and to the in-memory value
//! happen under one write lock, so a logout racing another session write cannot
//! leave the store half-updated. The in-memory value only changes once the store
//! write succeeded.
//!
//! Store calls are synchronous and run while the lock is held. The stores here
//! touch a few hundred bytes at most; a slow store should be wrapped by the caller
//! in `tokio::task::spawn_blocking`.

pub mod store;

pub use store::{FileStore, MemoryStore, SessionStore};

use crate::core::error::Result;
use parking_lot::RwLock;
use shared::Session;
use std::sync::Arc;

/// Store key for the session id
pub const SESSION_ID_KEY: &str = "session_id";
/// Store key for the session token
pub const SESSION_TOKEN_KEY: &str = "session_token";
/// Store key for the logged-in user's login
pub const USER_LOGIN_KEY: &str = "user_login";

/// Current session plus the store it is persisted in.
pub struct SessionContext {
    store: Arc<dyn SessionStore>,
    current: RwLock<Option<Session>>,
}

impl SessionContext {
    /// Empty context; nothing is read from `store`.
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self {
            store,
            current: RwLock::new(None),
        }
    }

    /// Context restored from whatever `store` holds.
    ///
    /// A partial or unparseable record counts as no session.
    pub fn load(store: Arc<dyn SessionStore>) -> Result<Self> {
        let id = store.get(SESSION_ID_KEY)?;
        let token = store.get(SESSION_TOKEN_KEY)?;
        let user_login = store.get(USER_LOGIN_KEY)?;

        let restored = match (id.and_then(|id| id.parse::<i64>().ok()), token, user_login) {
            (Some(id), Some(token), Some(user_login)) => Some(Session {
                id,
                token,
                user_login,
            }),
            (None, None, None) => None,
            _ => {
                tracing::warn!("Ignoring incomplete persisted session");
                None
            }
        };

        if let Some(session) = &restored {
            tracing::debug!(user_login = %session.user_login, "Restored persisted session");
        }

        Ok(Self {
            store,
            current: RwLock::new(restored),
        })
    }

    /// Owned copy of the current session.
    pub fn snapshot(&self) -> Option<Session> {
        self.current.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.read().is_some()
    }

    /// Login of the current user.
    pub fn user_login(&self) -> Option<String> {
        self.current.read().as_ref().map(|s| s.user_login.clone())
    }

    /// Persist `session` and make it current.
    pub fn establish(&self, session: Session) -> Result<()> {
        let mut current = self.current.write();
        self.store.set(SESSION_ID_KEY, &session.id.to_string())?;
        self.store.set(SESSION_TOKEN_KEY, &session.token)?;
        self.store.set(USER_LOGIN_KEY, &session.user_login)?;
        *current = Some(session);
        Ok(())
    }

    /// Remove the session fields from the store and forget the session.
    ///
    /// The token is removed first. If the store fails, the in-memory session is
    /// kept so it keeps matching what the next [`load`](Self::load) would restore.
    pub fn clear(&self) -> Result<()> {
        let mut current = self.current.write();
        self.store.remove(SESSION_TOKEN_KEY)?;
        self.store.remove(SESSION_ID_KEY)?;
        self.store.remove(USER_LOGIN_KEY)?;
        *current = None;
        Ok(())
    }

    /// Empty the whole store and forget the session (account deletion).
    pub fn wipe(&self) -> Result<()> {
        let mut current = self.current.write();
        self.store.clear()?;
        *current = None;
        Ok(())
    }
}

impl std::fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionContext")
            .field("user_login", &self.user_login())
            .finish_non_exhaustive()
    }
}
