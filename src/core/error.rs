/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
///
/// The form itself never errors: derived values are total functions of the
/// widget state, and bad price input flows through as a non-numeric display.
/// Everything that can actually fail happens at startup.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Log file I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// Helper functions for common error scenarios
impl AppError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Configuration(msg.into())
    }
}
