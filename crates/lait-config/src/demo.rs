//! Demo account credentials used by the seeder and smoke test.

use serde::{Deserialize, Serialize};

fn default_email() -> String {
    "demo@lait.dev".to_string()
}

fn default_password() -> String {
    "demo12345".to_string()
}

/// Fixed demo account the harness registers (or logs into) on every run.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DemoConfig {
    #[serde(default = "default_email")]
    pub email: String,

    #[serde(default = "default_password")]
    pub password: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            email: default_email(),
            password: default_password(),
        }
    }
}

impl DemoConfig {
    /// Check that both credential fields are present.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.email.is_empty() && !self.password.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_the_demo_account() {
        let config = DemoConfig::default();
        assert_eq!(config.email, "demo@lait.dev");
        assert_eq!(config.password, "demo12345");
        assert!(config.is_configured());
    }

    #[test]
    fn empty_credentials_are_not_configured() {
        let config = DemoConfig {
            email: String::new(),
            ..Default::default()
        };
        assert!(!config.is_configured());
    }
}
