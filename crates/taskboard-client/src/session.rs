//! Session Store
//!
//! The token/user-id pair of the logged-in user. The browser keeps it in
//! tab-scoped storage; [`MemorySessionStore`] is the in-process equivalent.

use std::sync::{Arc, RwLock};

/// Credentials of the logged-in user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Bearer token, never empty
    pub token: String,
    /// Opaque user identifier, when the server sent one
    pub user_id: Option<String>,
}

impl Session {
    /// `None` for an empty token, which counts as logged out
    pub fn new(token: impl Into<String>, user_id: Option<String>) -> Option<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return None;
        }
        Some(Self {
            token,
            user_id: user_id.filter(|id| !id.is_empty()),
        })
    }
}

/// Where the session lives between requests
///
/// Read on every request, so clearing takes effect for every request built
/// afterwards.
pub trait SessionStore {
    /// Persist a session, replacing any previous one
    fn set(&self, token: &str, user_id: Option<&str>);

    /// Current session, `None` when logged out
    fn get(&self) -> Option<Session>;

    /// Forget the session
    fn clear(&self);

    fn token(&self) -> Option<String> {
        self.get().map(|session| session.token)
    }

    fn is_logged_in(&self) -> bool {
        self.get().is_some()
    }
}

/// In-memory store; clones share the same session
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    inner: Arc<RwLock<Option<Session>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that starts out logged in
    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        store.set(token, None);
        store
    }
}

impl SessionStore for MemorySessionStore {
    fn set(&self, token: &str, user_id: Option<&str>) {
        let session = Session::new(token, user_id.map(str::to_string));
        match self.inner.write() {
            Ok(mut guard) => *guard = session,
            Err(poisoned) => *poisoned.into_inner() = session,
        }
    }

    fn get(&self) -> Option<Session> {
        match self.inner.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn clear(&self) {
        match self.inner.write() {
            Ok(mut guard) => *guard = None,
            Err(poisoned) => *poisoned.into_inner() = None,
        }
    }
}
