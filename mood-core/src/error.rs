use thiserror::Error;

#[derive(Error, Debug)]
pub enum MoodError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Chat not found: {0}")]
    ChatNotFound(String),

    #[error("Unauthorized to access chat {0}")]
    Unauthorized(String),

    #[error("Repository error: {0}")]
    Repository(String),
}

pub type Result<T> = std::result::Result<T, MoodError>;
