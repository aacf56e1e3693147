//! Shared HTTP response helpers for the API client.
//!
//! Centralizes status-code checks (409 conflict, non-success →
//! [`ApiError::Api`]) so individual endpoint modules stay focused on
//! request construction and response mapping.

use crate::error::ApiError;

/// Check an HTTP response for common error conditions.
///
/// Returns the response unchanged on success. Handles:
/// - **409 Conflict** → [`ApiError::Conflict`] (the duplicate-account
///   signal during registration).
/// - **Non-success status** → [`ApiError::Api`] with status code and
///   response body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    if resp.status() == reqwest::StatusCode::CONFLICT {
        return Err(ApiError::Conflict);
    }
    if !resp.status().is_success() {
        return Err(ApiError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}
