//! Error types for the skiff crates

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SkiffError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SkiffError>;
