//! Error types for the folio library.
//!
//! Searching is total and never fails; these errors come from loading and
//! validating portfolio content and from id lookups.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the folio library.
#[derive(Debug, Error)]
pub enum FolioError {
    // File system errors
    #[error("IO error at {path:?}: {message}")]
    Io {
        message: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    // Serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    // Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    // Validation errors
    #[error("Validation error for {field}: {message}")]
    Validation { field: String, message: String },

    // Content lookups
    #[error("Project not found: {project_id}")]
    ProjectNotFound { project_id: String },
}

/// Result type alias for folio operations.
pub type Result<T> = std::result::Result<T, FolioError>;

impl From<serde_json::Error> for FolioError {
    fn from(err: serde_json::Error) -> Self {
        FolioError::Json {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl FolioError {
    /// Create an IO error with path context.
    pub fn io_with_path(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if err.kind() == std::io::ErrorKind::NotFound {
            return FolioError::FileNotFound(path);
        }
        FolioError::Io {
            message: err.to_string(),
            path,
            source: err,
        }
    }

    /// Create a validation error for a named field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        FolioError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Whether the error means the requested thing does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            FolioError::FileNotFound(_) | FolioError::ProjectNotFound { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FolioError::ProjectNotFound {
            project_id: "42".into(),
        };
        assert_eq!(err.to_string(), "Project not found: 42");

        let err = FolioError::validation("projects[1].id", "duplicate id \"2\"");
        assert_eq!(
            err.to_string(),
            "Validation error for projects[1].id: duplicate id \"2\""
        );
    }

    #[test]
    fn test_io_with_path_maps_not_found() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = FolioError::io_with_path(io, "/tmp/content.json");
        assert!(matches!(err, FolioError::FileNotFound(_)));
        assert!(err.is_not_found());

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        let err = FolioError::io_with_path(io, "/tmp/content.json");
        assert!(matches!(err, FolioError::Io { .. }));
        assert!(err.to_string().contains("/tmp/content.json"));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_json_conversion() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: FolioError = parse_err.into();
        assert!(matches!(err, FolioError::Json { source: Some(_), .. }));
    }
}
