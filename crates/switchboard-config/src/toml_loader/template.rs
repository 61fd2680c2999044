//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Switchboard Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[server]
# host = "127.0.0.1"
# port = 8000                              # 1-65535
# allowed_origin = "http://localhost:3000" # single CORS origin

[session]
# expiration_secs = 3600     # 1-604800, idle time before a session expires
# reap_interval_secs = 0     # 0 disables the background sweep

[tools]
# calculator_latency_ms = 500     # 0-60000
# web_search_latency_ms = 1000
# current_time_latency_ms = 200

[logging]
# level = "info"             # trace, debug, info, warn, error
"##
    .to_string()
}
