//! Error types for the catalog seeder

use thiserror::Error;

/// Error codes reported alongside every failure in the logs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Success = 0,
    Failure = 1,
    BadUsage = 2,
    IoFailure = 3,
    MalformedDocument = 4,
    MissingElement = 5,
    MalformedAuthor = 6,
    SubmissionFailure = 7,
    BadConfig = 8,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed XML: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("Missing <{element}> element in {context}")]
    MissingElement {
        element: &'static str,
        context: String,
    },

    #[error("Catalog <name> element is empty")]
    EmptyCatalogName,

    #[error("Malformed author '{0}': expected at least a first name and a last name")]
    MalformedAuthor(String),

    #[error("Submission error: {0}")]
    Submission(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Io(_) => ErrorCode::IoFailure,
            AppError::Xml(_) => ErrorCode::MalformedDocument,
            AppError::MissingElement { .. } | AppError::EmptyCatalogName => {
                ErrorCode::MissingElement
            }
            AppError::MalformedAuthor(_) => ErrorCode::MalformedAuthor,
            AppError::Submission(_) => ErrorCode::SubmissionFailure,
            AppError::Config(_) => ErrorCode::BadConfig,
        }
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = AppError::MalformedAuthor("Madonna".to_string());
        assert_eq!(err.code(), ErrorCode::MalformedAuthor);
        assert_eq!(err.code() as u32, 6);

        let err = AppError::MissingElement {
            element: "year",
            context: "book 2".to_string(),
        };
        assert_eq!(err.code(), ErrorCode::MissingElement);
        assert_eq!(err.to_string(), "Missing <year> element in book 2");
    }
}
