//! Error Types
//!
//! Two classes reach the user: local validation failures, rendered next to
//! the offending field, and remote failures, rendered as a toast.

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;
use thiserror::Error;

/// Result alias for API calls
pub type ApiResult<T> = Result<T, ApiError>;

/// Failure of a call against the REST API
#[derive(Error, Debug)]
pub enum ApiError {
    /// The server answered with a non-success status
    #[error("server responded with {status}: {}", body.message.as_deref().unwrap_or("no message"))]
    Status { status: u16, body: ServerErrorBody },

    /// The request never produced a response
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A success response could not be decoded
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// A configured URL is malformed
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// No token: the auth response carried none, or none is stored
    #[error("authorization token is missing")]
    MissingToken,
}

impl ApiError {
    /// HTTP status, when the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Missing or expired credentials
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Parsed error body of a non-success response
    pub fn server_body(&self) -> Option<&ServerErrorBody> {
        match self {
            ApiError::Status { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Text for a toast: the server's message if it sent one, else `fallback`
    pub fn toast_message(&self, fallback: &str) -> String {
        self.server_body()
            .and_then(|body| body.message.clone())
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| fallback.to_string())
    }
}

/// Error payload as sent by the API: `{ "message": ..., "errors": { field: [..] } }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ServerErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: BTreeMap<String, Vec<String>>,
    /// Raw response text, kept for logging
    #[serde(skip)]
    pub raw: String,
}

impl ServerErrorBody {
    /// Parse an error response; bodies that are not the expected JSON keep
    /// only their raw text
    pub fn parse(raw: String) -> Self {
        let mut body = serde_json::from_str::<ServerErrorBody>(&raw).unwrap_or_default();
        body.raw = raw;
        body
    }

    /// All field messages joined with a space, in field order
    pub fn joined_errors(&self) -> String {
        self.errors
            .values()
            .flatten()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Field errors keyed by field name, first message per field
    pub fn field_errors(&self) -> FieldErrors {
        let mut fields = FieldErrors::default();
        for (field, messages) in &self.errors {
            if let Some(first) = messages.first() {
                fields.insert(field.clone(), first.clone());
            }
        }
        fields
    }
}

/// Validation messages keyed by form field name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message; the first message for a field wins
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Drop the message of a field, e.g. once the user edits it
    pub fn remove(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `Ok(value)` when no errors were recorded
    pub fn into_result<T>(self, value: T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|(k, v)| format!("{k}: {v}")).collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for FieldErrors {}

/// Outcome of submitting a form
#[derive(Error, Debug)]
pub enum FormError {
    /// Rejected locally; nothing was sent
    #[error("invalid input: {0}")]
    Invalid(FieldErrors),

    /// Rejected by the server or the network
    #[error(transparent)]
    Remote(#[from] ApiError),
}

impl From<FieldErrors> for FormError {
    fn from(errors: FieldErrors) -> Self {
        FormError::Invalid(errors)
    }
}
