#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AppError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Data error: {0}")]
    DataError(String),

    #[error("Unknown media: {0}")]
    UnknownMedia(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Authentication error: {0}")]
    AuthError(String),
}

impl AppError {
    /// Errors after which polling stops for the lifetime of the widget.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            AppError::RateLimited | AppError::AuthError(_) | AppError::ConfigError(_)
        )
    }
}
