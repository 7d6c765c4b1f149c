//! API Configuration
//!
//! Where the REST API and the CSRF cookie endpoint live.

use url::Url;

use crate::error::ApiResult;

/// Default API origin, overridable at build time with `TASKBOARD_API_BASE`
pub const DEFAULT_API_BASE: &str = match option_env!("TASKBOARD_API_BASE") {
    Some(base) => base,
    None => "http://127.0.0.1:8000/api",
};

/// Default CSRF cookie endpoint, overridable at build time with `TASKBOARD_CSRF_URL`
pub const DEFAULT_CSRF_URL: &str = match option_env!("TASKBOARD_CSRF_URL") {
    Some(url) => url,
    None => "http://127.0.0.1:8000/sanctum/csrf-cookie",
};

/// Endpoints used by [`crate::ApiClient`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    api_base: Url,
    csrf_url: Url,
}

impl ApiConfig {
    /// Build a config from explicit URLs
    pub fn new(api_base: &str, csrf_url: &str) -> ApiResult<Self> {
        Ok(Self {
            api_base: Url::parse(api_base)?,
            csrf_url: Url::parse(csrf_url)?,
        })
    }

    /// Build a config for a server that exposes the API under `/api` and the
    /// cookie endpoint under `/sanctum/csrf-cookie`
    pub fn for_origin(origin: &str) -> ApiResult<Self> {
        let origin = origin.trim_end_matches('/');
        Self::new(
            &format!("{origin}/api"),
            &format!("{origin}/sanctum/csrf-cookie"),
        )
    }

    /// Config from the build-time defaults
    pub fn from_build_env() -> ApiResult<Self> {
        Self::new(DEFAULT_API_BASE, DEFAULT_CSRF_URL)
    }

    pub fn csrf_url(&self) -> &Url {
        &self.csrf_url
    }

    /// Full URL of an API path such as `/tasks/7`
    pub fn endpoint(&self, path: &str) -> String {
        join_url_segments(self.api_base.as_str(), path)
    }
}

/// Join a base URL and a path without doubling or dropping slashes
fn join_url_segments(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        base.to_string()
    } else {
        format!("{}/{}", base, path)
    }
}
