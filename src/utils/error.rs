use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnippetError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Validation error: {field}: {reason}")]
    ValidationError { field: String, reason: String },
}

impl SnippetError {
    /// 給 CLI 使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            SnippetError::IoError(e) => format!("Could not read or write a file: {}", e),
            SnippetError::SerializationError(e) => format!("Could not encode exports: {}", e),
            SnippetError::ConfigError { message } => {
                format!("The configuration file is invalid: {}", message)
            }
            SnippetError::ValidationError { field, reason } => {
                format!("Field `{}` is invalid: {}", field, reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, SnippetError>;
