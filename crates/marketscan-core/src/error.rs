//! Error types for marketscan.

use std::path::{Path, PathBuf};

/// Errors that can occur while collecting, analyzing or reporting on markets.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Filesystem error tied to a specific path.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path being read or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// JSON (de)serialization error tied to a specific file.
    #[error("JSON error in {}: {source}", path.display())]
    Json {
        /// File being parsed or written
        path: PathBuf,
        /// Underlying serde_json error
        #[source]
        source: serde_json::Error,
    },

    /// CSV writing error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Invalid glob pattern while looking up artifacts.
    #[error("Pattern error: {0}")]
    Pattern(#[from] glob::PatternError),

    /// An artifact produced by an earlier stage is missing.
    #[error("Missing input: {what} (expected at {})", path.display())]
    MissingInput {
        /// Human-readable name of the artifact
        what: String,
        /// Where it was expected
        path: PathBuf,
    },

    /// Input data failed validation.
    #[error("Validation error: {message}")]
    Validation {
        /// Field or aspect that failed validation
        field: Option<String>,
        /// What went wrong
        message: String,
    },

    /// Configuration error.
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// A generated report violates its ordering or completeness rules.
    #[error("Report error: {message}")]
    Report {
        /// What is wrong with the report
        message: String,
    },
}

/// Convenience `Result` alias used throughout marketscan.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates an I/O error for the given path.
    pub fn io(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a JSON error for the given file.
    pub fn json(source: serde_json::Error, path: impl AsRef<Path>) -> Self {
        Error::Json {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a missing-input error.
    pub fn missing_input(what: impl Into<String>, path: impl AsRef<Path>) -> Self {
        Error::MissingInput {
            what: what.into(),
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Creates a new validation error.
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Error::Validation {
            field: None,
            message: message.into(),
        }
    }

    /// Creates a new validation error with a field name.
    pub fn validation_field<F, M>(field: F, message: M) -> Self
    where
        F: Into<String>,
        M: Into<String>,
    {
        Error::Validation {
            field: Some(field.into()),
            message: message.into(),
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates a new report error.
    pub fn report<S: Into<String>>(message: S) -> Self {
        Error::Report {
            message: message.into(),
        }
    }

    /// Returns `true` when the error means an earlier stage has not run yet.
    pub fn is_missing_input(&self) -> bool {
        matches!(self, Error::MissingInput { .. })
    }
}
