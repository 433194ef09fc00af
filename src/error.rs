// Error types for the petshelf application.
// Handles pet API errors, cache errors, and general application errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PetshelfError {
    #[error("pet API error: {0}")]
    Api(#[from] reqwest::Error),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, PetshelfError>;
