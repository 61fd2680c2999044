pub mod errors;
pub mod id;

pub use errors::{ChatError, ConfigError, SwitchboardError};
pub use id::{new_id, SessionId};

pub type Result<T> = std::result::Result<T, SwitchboardError>;
