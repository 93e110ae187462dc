use thiserror::Error;

#[derive(Debug, Error)]
pub enum HealthError {
    #[error("Backend error: {0}")]
    Backend(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No plan saved for {0}")]
    PlanNotFound(String),
}

pub type Result<T> = std::result::Result<T, HealthError>;
