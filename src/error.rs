//! Error types for AlgoViz SEO
//!
//! This module provides the error hierarchy using `thiserror`. Per-file
//! errors are collected by the file processor, so every variant carries
//! enough context (path, tag name) to be printed on its own.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for AlgoViz SEO operations
#[derive(Error, Debug)]
pub enum Error {
    /// Document could not be annotated
    #[error("Malformed document: {0}")]
    Annotation(#[from] AnnotationError),

    /// Invalid site configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Reading a source file failed
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        /// File that could not be read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Overwriting a source file failed
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        /// File that could not be written
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Writing the backup copy failed
    #[error("Failed to write backup {}: {source}", .path.display())]
    Backup {
        /// Backup destination
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with message
    #[error("{0}")]
    Generic(String),
}

/// Document shape and query errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnnotationError {
    /// A required structural element is absent from the source
    #[error("document has no <{0}> element")]
    MissingElement(&'static str),

    /// A structural element that must be unique appears more than once
    #[error("document has {count} <{tag}> elements, expected exactly one")]
    DuplicateElement {
        /// Tag name
        tag: &'static str,
        /// Number of start tags found
        count: usize,
    },

    /// Invalid selector
    #[error("Invalid selector: {0}")]
    InvalidSelector(String),
}

/// Site configuration errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Base URL is not an absolute http(s) URL ending in `/`
    #[error("Invalid base URL {url:?}: {reason}")]
    InvalidBaseUrl {
        /// The rejected value
        url: String,
        /// Why it was rejected
        reason: String,
    },

    /// A required value is empty
    #[error("{0} must not be empty")]
    EmptyValue(&'static str),

    /// File extension filter must start with a dot
    #[error("Invalid file extension {0:?}: must start with '.'")]
    InvalidExtension(String),
}

/// Result type alias for AlgoViz SEO operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a generic error from a string
    pub fn generic<S: Into<String>>(msg: S) -> Self {
        Error::Generic(msg.into())
    }

    /// Whether this error came from the document rather than the filesystem
    pub fn is_malformed_input(&self) -> bool {
        matches!(self, Error::Annotation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Annotation(AnnotationError::MissingElement("head"));
        assert!(err.to_string().contains("Malformed document"));
        assert!(err.to_string().contains("<head>"));
        assert!(err.is_malformed_input());
    }

    #[test]
    fn test_duplicate_element() {
        let err = AnnotationError::DuplicateElement {
            tag: "html",
            count: 2,
        };
        assert_eq!(
            err.to_string(),
            "document has 2 <html> elements, expected exactly one"
        );
    }

    #[test]
    fn test_backup_error_names_path() {
        let err = Error::Backup {
            path: PathBuf::from("/tmp/seo_backup/a.html"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("/tmp/seo_backup/a.html"));
        assert!(err.to_string().contains("denied"));
        assert!(!err.is_malformed_input());
    }

    #[test]
    fn test_config_error() {
        let err = ConfigError::InvalidExtension("html".to_string());
        assert!(err.to_string().contains("must start with '.'"));
    }

    #[test]
    fn test_generic_error() {
        let err = Error::generic("something went wrong");
        assert_eq!(err.to_string(), "something went wrong");
    }
}
