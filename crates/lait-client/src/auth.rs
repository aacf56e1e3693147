//! Auth endpoint clients: demo-account registration and login.
//!
//! Both endpoints take a JSON `{email, password}` body and return an
//! opaque bearer token. Registration of an existing account yields
//! 409 Conflict (surfaced as [`ApiError::Conflict`]); the fallback to
//! login is a pipeline concern, not a client one.

use serde::Deserialize;

use crate::{ApiClient, error::ApiError, http::check_response};

#[derive(Debug, Deserialize)]
struct TokenResponse {
    token: String,
}

impl ApiClient {
    /// Register the demo account via `POST /api/auth/register`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Conflict`] when the account already exists, and
    /// [`ApiError`] for transport or other API failures.
    pub async fn register(&self, email: &str, password: &str) -> Result<String, ApiError> {
        self.request_token("/api/auth/register", email, password)
            .await
    }

    /// Log into an existing account via `POST /api/auth/login`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the credentials are rejected or the request
    /// fails.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, ApiError> {
        self.request_token("/api/auth/login", email, password).await
    }

    async fn request_token(
        &self,
        path: &str,
        email: &str,
        password: &str,
    ) -> Result<String, ApiError> {
        let resp = self
            .http
            .post(self.url(path))
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;
        let resp = check_response(resp).await?;
        let body: TokenResponse = resp.json().await?;
        if body.token.is_empty() {
            return Err(ApiError::Parse("empty token in auth response".into()));
        }
        Ok(body.token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_token_response() {
        let body: TokenResponse = serde_json::from_str(r#"{"token":"tok_abc"}"#).unwrap();
        assert_eq!(body.token, "tok_abc");
    }

    #[test]
    fn tolerates_extra_fields() {
        let body: TokenResponse =
            serde_json::from_str(r#"{"token":"tok_abc","user":{"email":"demo@lait.dev"}}"#)
                .unwrap();
        assert_eq!(body.token, "tok_abc");
    }

    #[test]
    fn missing_token_fails_to_parse() {
        let parsed: Result<TokenResponse, _> = serde_json::from_str(r#"{"message":"ok"}"#);
        assert!(parsed.is_err());
    }
}
