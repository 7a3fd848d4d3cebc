use shared::error::AppError;
use thiserror::Error;

/// Errors that stop the process before or while serving
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Initialization failed: {0}")]
    Init(#[from] AppError),

    #[error("Failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
