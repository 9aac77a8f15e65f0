//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use mg_config::{ConfigError, MindGuardConfig};

#[test]
fn loads_gemini_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[gemini]
api_key = "toml-key"
model = "gemini-2.5-flash"
endpoint = "http://localhost:8080"
timeout_secs = 15
"#,
        )?;

        let config: MindGuardConfig = Figment::from(Serialized::defaults(MindGuardConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.gemini.api_key, "toml-key");
        assert_eq!(config.gemini.model, "gemini-2.5-flash");
        assert_eq!(config.gemini.endpoint, "http://localhost:8080");
        assert_eq!(config.gemini.timeout_secs, 15);
        assert!(config.gemini.is_configured());
        Ok(())
    });
}

#[test]
fn partial_section_keeps_other_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[ui]
tick_rate_ms = 100
"#,
        )?;

        let config: MindGuardConfig = Figment::from(Serialized::defaults(MindGuardConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.ui.tick_rate_ms, 100);
        assert_eq!(config.ui.status_interval_ms, 2500);
        assert_eq!(config.gemini.model, "gemini-3-flash-preview");
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".mindguard")?;
        jail.create_file(
            ".mindguard/config.toml",
            r#"
[general]
log_file = "mindguard.log"
"#,
        )?;

        let config = MindGuardConfig::from_figment(&MindGuardConfig::figment())
            .map_err(|e| e.to_string())?;
        assert_eq!(config.general.log_file, "mindguard.log");
        Ok(())
    });
}

#[test]
fn zero_tick_rate_in_file_is_rejected() {
    Jail::expect_with(|jail| {
        jail.create_dir(".mindguard")?;
        jail.create_file(
            ".mindguard/config.toml",
            r#"
[ui]
tick_rate_ms = 0
"#,
        )?;

        let result = MindGuardConfig::from_figment(&MindGuardConfig::figment());
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "ui.tick_rate_ms"
        ));
        Ok(())
    });
}

#[test]
fn wrong_type_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[gemini]
timeout_secs = "soon"
"#,
        )?;

        let figment = Figment::from(Serialized::defaults(MindGuardConfig::default()))
            .merge(Toml::file("config.toml"));
        let result = MindGuardConfig::from_figment(&figment);
        assert!(matches!(result, Err(ConfigError::Figment(_))));
        Ok(())
    });
}
