//! Configuration and client tests.
//!
//! Tests actual behavior, not constants.

use std::time::Duration;

use text_match::client::ComparisonClient;
use text_match::config::{Config, api};

// =============================================================================
// Config Behavior Tests
// =============================================================================

#[test]
fn test_config_urls_are_built_from_base() {
    let config = Config::new("https://compare.example.org/");
    assert_eq!(config.compare_url(), "https://compare.example.org/compare-pdfs-by-partition/");
    assert_eq!(config.status_url(), "https://compare.example.org/");
}

#[test]
fn test_config_keeps_path_prefix() {
    let config = Config::new("https://example.org/api/v1");
    assert_eq!(config.compare_url(), "https://example.org/api/v1/compare-pdfs-by-partition/");
}

#[test]
fn test_config_default_timeouts() {
    let config = Config::new("http://localhost:8000");
    assert_eq!(config.request_timeout, api::REQUEST_TIMEOUT);
    assert_eq!(config.connect_timeout, api::CONNECT_TIMEOUT);
}

#[test]
fn test_config_for_testing_uses_short_timeouts() {
    let config = Config::for_testing("http://127.0.0.1:9999");
    assert!(config.request_timeout <= Duration::from_secs(5));
}

#[test]
fn test_config_clone_preserves_base_url() {
    let config = Config::new("http://service:8000");
    let cloned = config.clone();
    assert_eq!(config.base_url, cloned.base_url);
}

// =============================================================================
// Client Behavior Tests
// =============================================================================

#[test]
fn test_client_creation_succeeds() {
    let client = ComparisonClient::new(Config::default());
    assert!(client.is_ok());
}

#[test]
fn test_client_rejects_invalid_base_url() {
    assert!(ComparisonClient::new(Config::new("definitely not a url")).is_err());
    assert!(ComparisonClient::new(Config::new("file:///tmp")).is_err());
}

#[test]
fn test_client_reports_base_url() {
    let client = ComparisonClient::new(Config::new("http://service:8000/")).unwrap();
    assert_eq!(client.base_url(), "http://service:8000");
}

#[test]
fn test_client_debug_shows_base_url() {
    let client = ComparisonClient::new(Config::new("http://service:8000")).unwrap();
    let debug = format!("{client:?}");
    assert!(debug.contains("ComparisonClient"));
    assert!(debug.contains("http://service:8000"));
}

#[test]
fn test_client_is_cloneable() {
    let client = ComparisonClient::new(Config::default()).unwrap();
    let cloned = client.clone();
    assert_eq!(client.base_url(), cloned.base_url());
}
