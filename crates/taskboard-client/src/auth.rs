//! Auth Flows
//!
//! Login, registration and logout. Forms are validated locally first; a
//! form that fails validation never reaches the network.

use serde::Serialize;

use crate::client::ApiClient;
use crate::error::{ApiError, ApiResult, FieldErrors, FormError};
use crate::models::AuthResponse;
use crate::session::{Session, SessionStore};
use crate::validate::Validator;

/// Minimum password length accepted at registration
pub const MIN_PASSWORD_LEN: usize = 6;

// ========================
// Forms
// ========================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut v = Validator::new();
        v.required("email", &self.email, "Email is required")
            .email("email", &self.email, "Invalid email address")
            .required("password", &self.password, "Password is required");
        v.finish().into_result(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

impl RegisterForm {
    /// Every violated rule is reported, one message per field
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut v = Validator::new();
        v.required("name", &self.name, "Name is required")
            .required("email", &self.email, "Email is required")
            .email("email", &self.email, "Invalid email")
            .required("password", &self.password, "Password is required")
            .min_chars(
                "password",
                &self.password,
                MIN_PASSWORD_LEN,
                "Password must be at least 6 characters",
            )
            .required(
                "password_confirmation",
                &self.password_confirmation,
                "Confirm Password is required",
            )
            .matches(
                "password_confirmation",
                &self.password_confirmation,
                &self.password,
                "Passwords do not match",
            );
        v.finish().into_result(())
    }
}

// ========================
// Flows
// ========================

impl<S: SessionStore> ApiClient<S> {
    /// Validate, `POST /login`, store the returned session
    pub async fn login(&self, form: &LoginForm) -> Result<Session, FormError> {
        form.validate()?;
        let response: AuthResponse = self.post("/login", form).await?;
        Ok(self.store_session(response)?)
    }

    /// Validate, fetch the CSRF cookie, `POST /register`, store the
    /// returned session
    pub async fn register(&self, form: &RegisterForm) -> Result<Session, FormError> {
        form.validate()?;
        if let Err(err) = self.init_csrf().await {
            // The server decides whether the cookie was required
            tracing::warn!("CSRF initialization failed: {err}");
        }
        let response: AuthResponse = self.post("/register", form).await?;
        Ok(self.store_session(response)?)
    }

    /// Revoke the token server-side and forget it locally
    ///
    /// Without a stored token this is a local no-op. The local session is
    /// cleared even when the server call fails; that failure is returned.
    pub async fn logout(&self) -> ApiResult<()> {
        if self.session().token().is_none() {
            tracing::debug!("logout without a session, nothing to revoke");
            self.session().clear();
            return Ok(());
        }
        let result = self
            .post::<_, serde_json::Value>("/logout", &serde_json::json!({}))
            .await
            .map(|_| ());
        self.session().clear();
        result
    }

    fn store_session(&self, response: AuthResponse) -> ApiResult<Session> {
        let token = response.token.unwrap_or_default();
        let user_id = response.user.map(|user| user.id);
        let session = Session::new(token, user_id).ok_or(ApiError::MissingToken)?;
        self.session().set(&session.token, session.user_id.as_deref());
        tracing::debug!(user_id = ?session.user_id, "session stored");
        Ok(session)
    }
}
