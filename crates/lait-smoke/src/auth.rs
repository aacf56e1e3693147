//! Auth stage: establish the demo session.

use lait_client::ApiError;
use lait_core::entities::AuthSession;

use crate::api::InvoiceApi;

/// Attempt registration; on 409 Conflict (account already exists), fall
/// back to login. The conflict signal is the tested contract -- message
/// text is never inspected.
///
/// # Errors
///
/// Returns [`ApiError`] when registration fails for any non-conflict
/// reason, or when the login fallback is also rejected. Either is fatal
/// to the run.
pub async fn ensure_session<A: InvoiceApi>(
    api: &A,
    email: &str,
    password: &str,
) -> Result<AuthSession, ApiError> {
    match api.register(email, password).await {
        Ok(token) => {
            tracing::debug!(email, "registered demo account");
            Ok(AuthSession::new(email, token))
        }
        Err(ApiError::Conflict) => {
            tracing::debug!(email, "demo account already exists; logging in");
            let token = api.login(email, password).await?;
            Ok(AuthSession::new(email, token))
        }
        Err(err) => Err(err),
    }
}
