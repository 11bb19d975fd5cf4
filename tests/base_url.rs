// tests/base_url.rs
use atrust_client::config::{
    DEFAULT_DEV_API_ORIGIN, EnvSignals, connectivity_hint, resolve_api_base_url,
};
use pretty_assertions::assert_eq;

#[test]
fn compiled_value_wins_and_drops_trailing_slash() {
    let signals = EnvSignals {
        compiled: Some("https://api.example.com/".to_string()),
        runtime_override: Some("https://ignored.example.com".to_string()),
        dev_server_port: Some("5173".to_string()),
    };
    assert_eq!(resolve_api_base_url(&signals), "https://api.example.com");
}

#[test]
fn empty_compiled_value_falls_through_to_override() {
    let signals = EnvSignals {
        compiled: Some(String::new()),
        runtime_override: Some("  http://10.0.0.7:8000/  ".to_string()),
        dev_server_port: None,
    };
    assert_eq!(resolve_api_base_url(&signals), "http://10.0.0.7:8000");
}

#[test]
fn blank_override_falls_through_to_dev_proxy() {
    let signals = EnvSignals {
        compiled: None,
        runtime_override: Some("   ".to_string()),
        dev_server_port: Some("5173".to_string()),
    };
    assert_eq!(resolve_api_base_url(&signals), "/api");
}

#[test]
fn unknown_port_falls_through_to_default() {
    let signals = EnvSignals {
        compiled: None,
        runtime_override: None,
        dev_server_port: Some("8080".to_string()),
    };
    assert_eq!(resolve_api_base_url(&signals), DEFAULT_DEV_API_ORIGIN);
}

#[test]
fn no_signals_resolves_to_default() {
    assert_eq!(
        resolve_api_base_url(&EnvSignals::default()),
        DEFAULT_DEV_API_ORIGIN
    );
}

#[test]
fn connectivity_hint_names_base_url_and_health() {
    let hint = connectivity_hint("http://127.0.0.1:8000");
    assert!(hint.contains("http://127.0.0.1:8000"));
    assert!(hint.contains("/health"));
}
