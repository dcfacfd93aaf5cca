use std::io;

/// Errors that can occur while loading task configuration or applying a command plan
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type alias for gradle-task operations
pub type Result<T> = std::result::Result<T, Error>;
