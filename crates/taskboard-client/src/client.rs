//! Authenticated HTTP Client
//!
//! Thin wrapper over `reqwest` bound to the API base URL. The bearer token
//! is read from the session store each time a request is built.

use reqwest::{header, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult, ServerErrorBody};
use crate::session::{Session, SessionStore};

/// REST client with bearer auth taken from a [`SessionStore`]
#[derive(Clone)]
pub struct ApiClient<S> {
    http: reqwest::Client,
    config: ApiConfig,
    session: S,
}

impl<S: SessionStore> ApiClient<S> {
    /// Build a client for `config` reading credentials from `session`
    pub fn new(config: ApiConfig, session: S) -> ApiResult<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(header::ACCEPT, header::HeaderValue::from_static("application/json"));

        let builder = reqwest::Client::builder().default_headers(headers);

        // Browsers attach cookies per request (see `authorize`)
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.cookie_store(true);

        Ok(Self {
            http: builder.build()?,
            config,
            session,
        })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    /// Stored session, or [`ApiError::MissingToken`] when logged out
    pub fn require_session(&self) -> ApiResult<Session> {
        self.session.get().ok_or(ApiError::MissingToken)
    }

    /// Clear the session when `result` is a `401`; the result passes through
    pub(crate) fn expire_on_unauthorized<T>(&self, result: ApiResult<T>) -> ApiResult<T> {
        if let Err(err) = &result {
            if err.is_unauthorized() {
                tracing::warn!("token rejected by the server, clearing session");
                self.session.clear();
            }
        }
        result
    }

    // ========================
    // Verbs
    // ========================

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let request = self.request(Method::GET, path);
        self.send(request).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.request(Method::POST, path).json(body);
        self.send(request).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.request(Method::PUT, path).json(body);
        self.send(request).await
    }

    /// DELETE; whatever the server sends back on success is discarded
    pub async fn delete(&self, path: &str) -> ApiResult<()> {
        let request = self.request(Method::DELETE, path);
        let response = request.send().await?;
        check_status(response).await.map(|_| ())
    }

    /// Fetch the CSRF cookie the server expects before state-changing
    /// unauthenticated calls such as registration
    pub async fn init_csrf(&self) -> ApiResult<()> {
        let request = self.http.get(self.config.csrf_url().clone());
        let response = with_credentials(request).send().await?;
        check_status(response).await?;
        tracing::debug!("CSRF cookie initialized");
        Ok(())
    }

    // ========================
    // Internals
    // ========================

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.config.endpoint(path);
        tracing::debug!(%method, %url, "api request");
        let request = self.http.request(method, url);
        self.authorize(request)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        let request = with_credentials(request);
        match self.session.token() {
            Some(token) => request.bearer_auth(token),
            None => {
                tracing::warn!("authorization token is missing, sending request unauthenticated");
                request
            }
        }
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<T> {
        let response = request.send().await?;
        let text = check_status(response).await?;
        decode_body(&text)
    }
}

#[cfg(target_arch = "wasm32")]
fn with_credentials(request: RequestBuilder) -> RequestBuilder {
    request.fetch_credentials_include()
}

#[cfg(not(target_arch = "wasm32"))]
fn with_credentials(request: RequestBuilder) -> RequestBuilder {
    request
}

/// Success body as text, or the server's error as [`ApiError::Status`]
async fn check_status(response: Response) -> ApiResult<String> {
    let status = response.status();
    let text = response.text().await?;
    if status.is_success() {
        return Ok(text);
    }
    tracing::debug!(status = status.as_u16(), body = %text, "api error response");
    Err(ApiError::Status {
        status: status.as_u16(),
        body: ServerErrorBody::parse(text),
    })
}

/// Empty bodies decode as JSON `null`
fn decode_body<T: DeserializeOwned>(text: &str) -> ApiResult<T> {
    let text = if text.trim().is_empty() { "null" } else { text };
    Ok(serde_json::from_str(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_empty_body_as_unit() {
        decode_body::<()>("").unwrap();
        let value: Option<u32> = decode_body("  ").unwrap();
        assert_eq!(value, None);
    }

    #[test]
    fn test_decode_reports_bad_json() {
        let result: ApiResult<Vec<u32>> = decode_body("{not json");
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }
}
