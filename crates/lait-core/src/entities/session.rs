use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An authenticated demo session. Created once per run by the auth stage and
/// passed by reference to every downstream call; never stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuthSession {
    pub email: String,
    /// Opaque bearer token returned by registration or login.
    pub token: String,
}

impl AuthSession {
    #[must_use]
    pub fn new(email: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            token: token.into(),
        }
    }

    /// Value for the `Authorization` header.
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}
