use thiserror::Error;

use crate::app::domain::ArticleField;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Unknown option {value:?} for {field:?}")]
    UnknownOption { field: ArticleField, value: String },
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
        assert!(app_err.to_string().contains("file not found"));
    }

    #[test]
    fn test_error_display() {
        let err = AppError::Config("window_width must be positive".to_string());
        assert_eq!(err.to_string(), "Config error: window_width must be positive");

        let err = AppError::UnknownOption {
            field: ArticleField::FontColor,
            value: "#123456".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown option \"#123456\" for FontColor");
    }
}
