//! Application Context
//!
//! Shared state provided via Leptos Context API: the current view and the
//! toast banner.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use taskboard_client::{ApiError, SessionStore};

use crate::api::{self, Client};
use crate::session::BrowserSessionStore;

/// Delay between a successful login/register and the switch to the list
pub const REDIRECT_DELAY_MS: u32 = 3_000;

/// How long a toast stays visible
const TOAST_MS: u32 = 4_000;

/// Views of the app, mirrored in the URL hash
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    Home,
    AddTask,
    EditTask(String),
    NotFound,
}

impl Route {
    /// Parse a hash path such as `/editTask/7`
    pub fn from_path(path: &str) -> Self {
        let path = path.trim_start_matches('#');
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] | ["register"] => Route::Register,
            ["login"] => Route::Login,
            ["home"] => Route::Home,
            ["addTask"] => Route::AddTask,
            ["editTask", id] => Route::EditTask((*id).to_string()),
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::Home => "/home".to_string(),
            Route::AddTask => "/addTask".to_string(),
            Route::EditTask(id) => format!("/editTask/{}", id),
            Route::NotFound => "/notFound".to_string(),
        }
    }

    /// Views that need a session
    pub fn requires_session(&self) -> bool {
        matches!(self, Route::Home | Route::AddTask | Route::EditTask(_))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current view
    pub route: RwSignal<Route>,
    /// Visible toast, if any
    pub toast: RwSignal<Option<Toast>>,
    toast_seq: StoredValue<u64>,
}

impl AppContext {
    pub fn new(initial: Route) -> Self {
        Self {
            route: RwSignal::new(initial),
            toast: RwSignal::new(None),
            toast_seq: StoredValue::new(0),
        }
    }

    /// Route from the current URL hash, sent to login without a session
    pub fn initial_route() -> Route {
        let hash = web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        let route = Route::from_path(&hash);
        if route.requires_session() && !BrowserSessionStore.is_logged_in() {
            Route::Login
        } else {
            route
        }
    }

    /// Switch view and record it in the URL hash
    pub fn navigate(&self, route: Route) {
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.location().set_hash(&route.path()) {
                tracing::debug!("could not update location hash: {err:?}");
            }
        }
        self.route.set(route);
    }

    /// Switch view after `delay_ms`
    pub fn navigate_after(&self, route: Route, delay_ms: u32) {
        let ctx = *self;
        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            ctx.navigate(route);
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show_toast(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show_toast(ToastKind::Error, message.into());
    }

    /// Toast for a failed task call; a rejected token (already cleared by
    /// the client) sends the user to login
    pub fn report(&self, err: &ApiError, fallback: &str) {
        tracing::error!("api call failed: {err}");
        if err.is_unauthorized() {
            self.error(err.toast_message("Your session has expired. Please log in."));
            self.navigate(Route::Login);
        } else {
            self.error(fallback);
        }
    }

    /// API client, or an error toast when the config is unusable
    pub fn client(&self) -> Option<Client> {
        match api::client() {
            Ok(client) => Some(client),
            Err(err) => {
                tracing::error!("cannot build API client: {err}");
                self.error("The API address is misconfigured.");
                None
            }
        }
    }

    fn show_toast(&self, kind: ToastKind, message: String) {
        let id = self.toast_seq.get_value() + 1;
        self.toast_seq.set_value(id);
        self.toast.set(Some(Toast { id, kind, message }));

        // Only clear the toast this call showed
        let toast = self.toast;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_MS).await;
            toast.update(|current| {
                if current.as_ref().is_some_and(|t| t.id == id) {
                    *current = None;
                }
            });
        });
    }
}
