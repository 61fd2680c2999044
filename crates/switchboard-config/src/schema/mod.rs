//! Configuration schema types for Switchboard.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod logging;
mod server;
mod session;
mod tools;

pub use logging::*;
pub use server::*;
pub use session::*;
pub use tools::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for the chat server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct SwitchboardConfig {
    pub server: ServerConfig,
    pub session: SessionConfig,
    pub tools: ToolsConfig,
    pub logging: LoggingConfig,
}
