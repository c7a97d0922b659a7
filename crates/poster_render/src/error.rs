//! Error types for poster rendering

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Invalid layout: {0}")]
    InvalidLayout(String),

    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RenderError>;
