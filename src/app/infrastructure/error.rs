use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] minreq::Error),

    #[error("Server returned status {0}")]
    Status(i32),

    #[error("Malformed catalog: {0}")]
    MalformedCatalog(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Settings error: {0}")]
    Settings(String),
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
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let app_err: AppError = json_err.into();
        assert!(matches!(app_err, AppError::Json(_)));
    }

    #[test]
    fn test_error_display() {
        let err = AppError::Status(404);
        assert_eq!(err.to_string(), "Server returned status 404");

        let err = AppError::MalformedCatalog("duplicate language 'Go'".to_string());
        assert_eq!(err.to_string(), "Malformed catalog: duplicate language 'Go'");

        let err = AppError::Clipboard("no display".to_string());
        assert_eq!(err.to_string(), "Clipboard error: no display");
    }
}
