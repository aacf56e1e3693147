//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use lait_config::LaitConfig;

#[test]
fn loads_server_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "lait.toml",
            r#"
[server]
base_url = "http://staging.lait.internal:8080"
timeout_secs = 30
"#,
        )?;

        let config: LaitConfig = Figment::from(Serialized::defaults(LaitConfig::default()))
            .merge(Toml::file("lait.toml"))
            .extract()?;

        assert_eq!(config.server.base_url, "http://staging.lait.internal:8080");
        assert_eq!(config.server.timeout_secs, 30);
        Ok(())
    });
}

#[test]
fn loads_demo_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "lait.toml",
            r#"
[demo]
email = "qa@lait.internal"
password = "hunter2hunter2"
"#,
        )?;

        let config: LaitConfig = Figment::from(Serialized::defaults(LaitConfig::default()))
            .merge(Toml::file("lait.toml"))
            .extract()?;

        assert_eq!(config.demo.email, "qa@lait.internal");
        assert_eq!(config.demo.password, "hunter2hunter2");
        assert!(config.demo.is_configured());
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults_for_missing_fields() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "lait.toml",
            r#"
[server]
base_url = "http://ci.lait.internal"
"#,
        )?;

        let config: LaitConfig = Figment::from(Serialized::defaults(LaitConfig::default()))
            .merge(Toml::file("lait.toml"))
            .extract()?;

        assert_eq!(config.server.base_url, "http://ci.lait.internal");
        // timeout not set in TOML -- stays at default
        assert_eq!(config.server.timeout_secs, 10);
        assert_eq!(config.demo.email, "demo@lait.dev");
        Ok(())
    });
}

#[test]
fn env_var_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.set_env("LAIT_SERVER__BASE_URL", "http://from-env:5003");

        jail.create_file(
            "lait.toml",
            r#"
[server]
base_url = "http://from-toml:5003"
timeout_secs = 20
"#,
        )?;

        let config: LaitConfig = Figment::from(Serialized::defaults(LaitConfig::default()))
            .merge(Toml::file("lait.toml"))
            .merge(Env::prefixed("LAIT_").split("__"))
            .extract()?;

        // Env should win over TOML
        assert_eq!(config.server.base_url, "http://from-env:5003");
        // TOML value not overridden by env should remain
        assert_eq!(config.server.timeout_secs, 20);
        Ok(())
    });
}

/// Documents the figment gotcha: typo'd env var keys are silently ignored.
#[test]
fn typo_env_var_silently_ignored() {
    Jail::expect_with(|jail| {
        jail.set_env("LAIT_SERVER__BASE_URLL", "http://typo:5003");

        let config: LaitConfig = Figment::from(Serialized::defaults(LaitConfig::default()))
            .merge(Env::prefixed("LAIT_").split("__"))
            .extract()?;

        assert_eq!(
            config.server.base_url, "http://localhost:5003",
            "typo'd env var should be silently ignored by figment"
        );
        Ok(())
    });
}
