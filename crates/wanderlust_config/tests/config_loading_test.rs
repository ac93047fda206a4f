//! Tests for layered configuration loading.

use std::io::Write;
use wanderlust_config::{RetryConfig, WanderlustConfig};

#[test]
fn test_bundled_defaults() {
    let config = WanderlustConfig::from_toml_str("").unwrap();

    assert_eq!(config.provider.api_key_env, "MISTRAL_API_KEY");
    assert!(config.provider.base_url.starts_with("https://api.mistral.ai"));
    assert!(config.provider.system_prompt.contains("Churchgate"));
    assert_eq!(config.retry.max_attempts, 3);
    assert_eq!(config.retry.initial_backoff_ms, 4_000);
    assert_eq!(config.retry.max_backoff_ms, 10_000);
    assert_eq!(config.generation.location, "Churchgate, Mumbai");
    assert_eq!(config.generation.quest_max_tokens, 300);
    assert_eq!(config.session.username, "Wanderer");
}

#[test]
fn test_partial_override_keeps_other_defaults() {
    let config = WanderlustConfig::from_toml_str(
        r#"
[retry]
max_attempts = 5

[generation]
location = "Bandra, Mumbai"
"#,
    )
    .unwrap();

    assert_eq!(config.retry.max_attempts, 5);
    assert_eq!(config.retry.max_backoff_ms, 10_000);
    assert_eq!(config.generation.location, "Bandra, Mumbai");
    assert_eq!(config.generation.activity_max_tokens, 150);
    assert_eq!(config.provider.model, "mistral-small-latest");
}

#[test]
fn test_from_file_overrides_bundled() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        file,
        r#"
[provider]
model = "open-mistral-nemo"

[session]
username = "Explorer"
"#
    )
    .unwrap();

    let config = WanderlustConfig::from_file(file.path()).unwrap();
    assert_eq!(config.provider.model, "open-mistral-nemo");
    assert_eq!(config.session.username, "Explorer");
    assert_eq!(config.retry, RetryConfig::default());
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = WanderlustConfig::from_file(dir.path().join("absent.toml"));
    assert!(result.is_err());
}

#[test]
fn test_invalid_retry_bounds_rejected_on_load() {
    let result = WanderlustConfig::from_toml_str(
        r#"
[retry]
initial_backoff_ms = 30_000
max_backoff_ms = 1_000
"#,
    );
    assert!(result.is_err());
}

#[test]
fn test_config_serializes_back_to_toml() {
    let config = WanderlustConfig::from_toml_str("").unwrap();
    let rendered = toml::to_string(&config).unwrap();
    assert!(rendered.contains("[retry]"));
    assert!(rendered.contains("max_attempts = 3"));
}
