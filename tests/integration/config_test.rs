//! Configuration Integration Tests
//!
//! Round-trips the JSON configuration file and checks the mapping from
//! application settings to the provider configuration.

use pitch_writer::{AppConfig, ConfigService};

#[test]
fn test_missing_config_file_gets_defaults_written() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("config.json");

    let service = ConfigService::at_path(path.clone()).unwrap();

    assert!(path.exists());
    let config = service.get_config();
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.port, 3000);
    assert_eq!(config.model, "openai/gpt-3.5-turbo");
}

#[test]
fn test_existing_config_file_is_loaded() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("config.json");

    let mut config = AppConfig::default();
    config.port = 8080;
    config.model = "anthropic/claude-3-haiku".to_string();
    std::fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

    let service = ConfigService::at_path(path).unwrap();
    assert_eq!(service.get_config().port, 8080);
    assert_eq!(service.get_config().model, "anthropic/claude-3-haiku");
}

#[test]
fn test_settings_flow_into_provider_config() {
    let mut config = AppConfig::default();
    config.model = "openai/gpt-4o-mini".to_string();
    config.timeout_secs = 15;
    config.referer = Some("https://pitch.example".to_string());
    config.title = Some("Example Pitch".to_string());

    let provider = config.provider_config(Some("sk-or-test".to_string()));

    assert_eq!(provider.model, "openai/gpt-4o-mini");
    assert_eq!(provider.timeout_secs, 15);
    assert_eq!(provider.referer.as_deref(), Some("https://pitch.example"));
    assert_eq!(provider.title.as_deref(), Some("Example Pitch"));
    assert_eq!(provider.api_key.as_deref(), Some("sk-or-test"));
}

#[test]
fn test_credential_never_round_trips_through_the_file() {
    let config = AppConfig::default();
    let serialized = serde_json::to_string_pretty(&config).unwrap();
    assert!(!serialized.contains("api_key"));

    let provider = config.provider_config(Some("sk-or-secret".to_string()));
    let serialized = serde_json::to_string(&provider).unwrap();
    assert!(!serialized.contains("sk-or-secret"));
}
