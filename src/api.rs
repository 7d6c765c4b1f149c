//! API Client Construction
//!
//! The REST client used by every view, bound to the tab's session storage.

use taskboard_client::{ApiClient, ApiConfig, ApiResult};

use crate::session::BrowserSessionStore;

pub type Client = ApiClient<BrowserSessionStore>;

/// Client for the build-time configured API
pub fn client() -> ApiResult<Client> {
    ApiClient::new(ApiConfig::from_build_env()?, BrowserSessionStore)
}
