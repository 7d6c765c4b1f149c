//! Taskboard API Client
//!
//! Everything the task manager frontend does besides rendering:
//! - client: HTTP wrapper with bearer auth from the session store
//! - session: session storage abstraction
//! - auth: login, registration and logout flows
//! - tasks: task CRUD calls and the add/edit form
//! - query: client-side search, filter and sort of the task list

mod auth;
mod client;
mod config;
mod error;
mod models;
mod query;
mod session;
mod tasks;
mod validate;

pub use auth::{LoginForm, RegisterForm, MIN_PASSWORD_LEN};
pub use client::ApiClient;
pub use config::{ApiConfig, DEFAULT_API_BASE, DEFAULT_CSRF_URL};
pub use error::{ApiError, ApiResult, FieldErrors, FormError, ServerErrorBody};
pub use models::{AuthResponse, Task, TaskStatus, UnknownStatus, User};
pub use query::{remove_task, SortOrder, TaskQuery};
pub use session::{MemorySessionStore, Session, SessionStore};
pub use tasks::{TaskForm, TaskPayload, MAX_TITLE_LEN};
pub use validate::{is_email, parse_date};
