//! Tests for configuration system

use std::time::Duration;

use vitrine::Config;

#[test]
fn test_config_loads_from_default_toml() {
    let config = Config::load(None).expect("Failed to load config");

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.site.default_language, "pt");
    assert_eq!(config.contact.email, "contato@vitrine.dev");
    assert_eq!(config.contact.simulated_latency(), Duration::from_millis(1500));
    assert_eq!(config.contact.status_reset(), Duration::from_secs(5));
}

#[test]
fn test_config_defaults_validate() {
    let config = Config::load(None).expect("Failed to load config");

    assert!(config.validate().is_ok());
}

#[test]
fn test_config_missing_file_uses_defaults() {
    let config =
        Config::load(Some("config/missing.toml".to_owned())).expect("Failed to load config");

    assert_eq!(config.server.port, 3000);
    assert_eq!(config.site.name, "Vitrine Digital");
    assert_eq!(config.contact.status_reset_ms, 5000);
}
