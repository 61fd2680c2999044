//! Full configuration validation.
//!
//! Each section has its own check; all errors are collected into a single
//! `ConfigError`.

mod helpers;

#[cfg(test)]
mod tests;

use crate::schema::SwitchboardConfig;
use switchboard_common::ConfigError;

use helpers::validate_range;

/// Upper bound on simulated tool latency.
const MAX_TOOL_LATENCY_MS: u64 = 60_000;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &SwitchboardConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_server(&mut errors, config);
    validate_session(&mut errors, config);
    validate_tools(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_server(errors: &mut Vec<String>, config: &SwitchboardConfig) {
    if config.server.host.trim().is_empty() {
        errors.push("server.host must not be empty".into());
    }
    validate_range(errors, "server.port", config.server.port.into(), 1, 65535);

    let origin = &config.server.allowed_origin;
    if !(origin.starts_with("http://") || origin.starts_with("https://")) {
        errors.push(format!(
            "server.allowed_origin = {origin:?} must start with http:// or https://"
        ));
    }
}

fn validate_session(errors: &mut Vec<String>, config: &SwitchboardConfig) {
    validate_range(
        errors,
        "session.expiration_secs",
        config.session.expiration_secs,
        1,
        604_800,
    );
}

fn validate_tools(errors: &mut Vec<String>, config: &SwitchboardConfig) {
    let tools = &config.tools;
    for (name, value) in [
        ("tools.calculator_latency_ms", tools.calculator_latency_ms),
        ("tools.web_search_latency_ms", tools.web_search_latency_ms),
        ("tools.current_time_latency_ms", tools.current_time_latency_ms),
    ] {
        validate_range(errors, name, value, 0, MAX_TOOL_LATENCY_MS);
    }
}
