use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to analyze ingredients in the image: {0}")]
    ExtractionFailed(String),

    #[error("Ingredient extraction timed out after {0} ms")]
    ExtractionTimeout(u128),

    #[error("Failed to generate recipes: {0}")]
    InternalMatching(String),

    #[error("Not found")]
    NotFound,

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("Internal server error")]
    InternalServerError,
}
