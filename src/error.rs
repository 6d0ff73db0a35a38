use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SemvalError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Pattern error at {position}: {message}")]
    Pattern { message: String, position: usize },
    #[error("Usage error: {0}")]
    Usage(String),
}

pub type Result<T> = std::result::Result<T, SemvalError>;

// Helper conversions
impl From<config::ConfigError> for SemvalError {
    fn from(e: config::ConfigError) -> Self { Self::Config(e.to_string()) }
}
