use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no route matches path \"{0}\"")]
    UnknownPath(String),

    #[error("route table error: {0}")]
    RouteTable(String),
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "browser not found");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
        assert!(app_err.to_string().contains("browser not found"));
    }

    #[test]
    fn test_error_display() {
        let err = AppError::UnknownPath("/missing".to_string());
        assert_eq!(err.to_string(), "no route matches path \"/missing\"");

        let err = AppError::RouteTable("duplicate path \"/\"".to_string());
        assert_eq!(err.to_string(), "route table error: duplicate path \"/\"");
    }
}
