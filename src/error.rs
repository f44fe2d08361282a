use thiserror::Error;

use crate::config::ConfigError;
use crate::registry::{Mount, WhiteboardId};

/// Errors raised while managing drawing surfaces
#[derive(Debug, Error)]
pub enum WhiteboardError {
    /// The mount does not resolve to a container, so no surface can be created
    #[error("No container found for {mount}")]
    ContainerNotFound { mount: Mount },

    #[error("Unknown whiteboard {0}")]
    UnknownBoard(WhiteboardId),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type for whiteboard operations
pub type WhiteboardResult<T> = Result<T, WhiteboardError>;
