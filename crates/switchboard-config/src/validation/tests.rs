//! Tests for the full validation pipeline.

use super::*;

#[test]
fn default_config_validates() {
    assert!(validate(&SwitchboardConfig::default()).is_ok());
}

#[test]
fn catches_port_zero() {
    let mut config = SwitchboardConfig::default();
    config.server.port = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("server.port"));
}

#[test]
fn catches_empty_host() {
    let mut config = SwitchboardConfig::default();
    config.server.host = "  ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("server.host"));
}

#[test]
fn catches_origin_without_scheme() {
    let mut config = SwitchboardConfig::default();
    config.server.allowed_origin = "localhost:3000".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("server.allowed_origin"));
}

#[test]
fn catches_zero_expiration() {
    let mut config = SwitchboardConfig::default();
    config.session.expiration_secs = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("session.expiration_secs"));
}

#[test]
fn catches_excessive_tool_latency() {
    let mut config = SwitchboardConfig::default();
    config.tools.web_search_latency_ms = 120_000;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("tools.web_search_latency_ms"));
}

#[test]
fn zero_latency_is_allowed() {
    let mut config = SwitchboardConfig::default();
    config.tools.calculator_latency_ms = 0;
    config.tools.web_search_latency_ms = 0;
    config.tools.current_time_latency_ms = 0;
    assert!(validate(&config).is_ok());
}

#[test]
fn collects_multiple_errors() {
    let mut config = SwitchboardConfig::default();
    config.server.port = 0;
    config.session.expiration_secs = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("server.port"));
    assert!(err.contains("session.expiration_secs"));
    assert!(err.contains("; "));
}
