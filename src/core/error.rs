use thiserror::Error;

/// Errors surfaced while wiring up the backend's collaborators.
///
/// The settings layer performs no validation or recovery of its own; database
/// and model failures pass through from the libraries that own them.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Logging initialization error: {0}")]
    Logging(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("OpenAI error: {0}")]
    OpenAI(#[from] async_openai::error::OpenAIError),
}

pub type Result<T> = std::result::Result<T, SettingsError>;
