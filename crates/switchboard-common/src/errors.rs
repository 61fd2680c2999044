use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Errors surfaced by the chat service.
///
/// Only the not-found kinds reach a client during a chat turn; everything
/// else an agent can run into is folded into an ordinary reply.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChatError {
    #[error("Session '{0}' not found.")]
    SessionNotFound(String),

    /// The session existed but sat idle past the expiration window.
    #[error("Session has expired.")]
    SessionExpired(String),

    #[error("Tool '{0}' not found.")]
    UnknownTool(String),

    #[error("invalid tool arguments: {0}")]
    InvalidArguments(String),
}

impl ChatError {
    /// True for every variant a client should see as "not found".
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::SessionNotFound(_) | Self::SessionExpired(_) | Self::UnknownTool(_)
        )
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SwitchboardError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Chat(#[from] ChatError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("server error: {0}")]
    Server(String),
}
