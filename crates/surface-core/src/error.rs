use thiserror::Error;

/// Errors produced while configuring, updating or rendering a surface.
#[derive(Debug, Error)]
pub enum SurfaceError {
    /// Invalid option value; raised while resolving configuration and fatal
    /// for construction.
    #[error("configuration error: {0}")]
    Configuration(String),
    /// A caller-supplied position or depth function failed.
    #[error(transparent)]
    Callback(#[from] CallbackError),
    /// A renderer backend failed to draw or resize.
    #[error("render error: {0}")]
    Render(String),
}

/// Failure reported by a caller-supplied function. The message is kept as the
/// caller produced it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct CallbackError {
    message: String,
}

impl CallbackError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

pub type Result<T> = std::result::Result<T, SurfaceError>;
