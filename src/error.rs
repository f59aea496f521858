//! Error types for asigen.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for asigen operations.
pub type Result<T> = std::result::Result<T, AsigenError>;

/// Main error type for asigen.
#[derive(Error, Debug)]
pub enum AsigenError {
    /// Reading a source file or writing a stub failed
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Malformed configuration file
    #[error("Invalid configuration file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// The worker pool could not be created
    #[error("Failed to start worker pool: {0}")]
    ThreadPool(String),

    /// Nothing to process
    #[error("No input paths given")]
    NoPaths,
}

impl AsigenError {
    /// Wraps an I/O error with the path it concerns.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AsigenError::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_names_path() {
        let err = AsigenError::io(
            "src/Foo.as",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert_eq!(err.to_string(), "src/Foo.as: missing");
    }

    #[test]
    fn test_config_error_message() {
        let err = AsigenError::Config("jobs must be a number".to_string());
        assert_eq!(err.to_string(), "Invalid configuration: jobs must be a number");
    }
}
