//! Browser Session Storage
//!
//! Keeps the session in `window.sessionStorage`: scoped to the tab and
//! gone when it closes. `localStorage` is never consulted.

use taskboard_client::{Session, SessionStore};
use web_sys::Storage;

const TOKEN_KEY: &str = "authToken";
const USER_ID_KEY: &str = "user_id";

/// [`SessionStore`] over the tab's `sessionStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSessionStore;

fn storage() -> Option<Storage> {
    web_sys::window()?.session_storage().ok().flatten()
}

impl SessionStore for BrowserSessionStore {
    fn set(&self, token: &str, user_id: Option<&str>) {
        let Some(storage) = storage() else {
            tracing::warn!("sessionStorage unavailable, session not saved");
            return;
        };
        if let Err(err) = storage.set_item(TOKEN_KEY, token) {
            tracing::warn!("failed to store auth token: {err:?}");
        }
        let result = match user_id {
            Some(id) => storage.set_item(USER_ID_KEY, id),
            None => storage.remove_item(USER_ID_KEY),
        };
        if let Err(err) = result {
            tracing::warn!("failed to store user id: {err:?}");
        }
    }

    fn get(&self) -> Option<Session> {
        let storage = storage()?;
        let token = storage.get_item(TOKEN_KEY).ok().flatten()?;
        let user_id = storage.get_item(USER_ID_KEY).ok().flatten();
        Session::new(token, user_id)
    }

    fn clear(&self) {
        let Some(storage) = storage() else { return };
        for key in [TOKEN_KEY, USER_ID_KEY] {
            if let Err(err) = storage.remove_item(key) {
                tracing::warn!("failed to remove {key}: {err:?}");
            }
        }
    }
}
