//! Environment variable precedence over files and between aliases.

use figment::Jail;
use mg_config::MindGuardConfig;

fn load() -> Result<MindGuardConfig, figment::Error> {
    MindGuardConfig::from_figment(&MindGuardConfig::figment())
        .map_err(|e| figment::Error::from(e.to_string()))
}

#[test]
fn prefixed_env_sets_nested_fields() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.set_env("MINDGUARD_GEMINI__API_KEY", "env-key");
        jail.set_env("MINDGUARD_GEMINI__TIMEOUT_SECS", "5");
        jail.set_env("MINDGUARD_UI__STATUS_INTERVAL_MS", "1000");

        let config = load()?;
        assert_eq!(config.gemini.api_key, "env-key");
        assert_eq!(config.gemini.timeout_secs, 5);
        assert_eq!(config.ui.status_interval_ms, 1000);
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.create_dir(".mindguard")?;
        jail.create_file(
            ".mindguard/config.toml",
            r#"
[gemini]
model = "from-file"
"#,
        )?;
        jail.set_env("MINDGUARD_GEMINI__MODEL", "from-env");

        let config = load()?;
        assert_eq!(config.gemini.model, "from-env");
        Ok(())
    });
}

#[test]
fn gemini_api_key_alias_fills_key() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.set_env("GEMINI_API_KEY", "alias-key");

        let config = load()?;
        assert_eq!(config.gemini.api_key, "alias-key");
        assert!(config.gemini.is_configured());
        Ok(())
    });
}

#[test]
fn bare_api_key_alias_is_lowest_priority() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.set_env("API_KEY", "bare");
        assert_eq!(load()?.gemini.api_key, "bare");

        jail.set_env("GEMINI_API_KEY", "gemini");
        assert_eq!(load()?.gemini.api_key, "gemini");

        jail.set_env("MINDGUARD_GEMINI__API_KEY", "prefixed");
        assert_eq!(load()?.gemini.api_key, "prefixed");
        Ok(())
    });
}

#[test]
fn alias_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.create_dir(".mindguard")?;
        jail.create_file(
            ".mindguard/config.toml",
            r#"
[gemini]
api_key = "file-key"
"#,
        )?;
        jail.set_env("GEMINI_API_KEY", "alias-key");

        assert_eq!(load()?.gemini.api_key, "alias-key");
        Ok(())
    });
}

#[test]
fn unrelated_env_is_ignored() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.set_env("MINDGUARD_LOG", "debug");
        jail.set_env("OTHER_API_KEY", "nope");

        let config = load()?;
        assert!(!config.gemini.is_configured());
        Ok(())
    });
}
