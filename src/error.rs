//! Error types and exit codes for corpus-builder

use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

/// Main error type for corpus generation
#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Failed to load config {}: {message}", .path.display())]
    ConfigFile { path: PathBuf, message: String },

    #[error("Failed to clean output directory {}: {source}", .path.display())]
    CleanFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization failed: {message}")]
    Serialization { message: String },

    #[error("Corpus is not fully reachable: {unreached} node(s) unreached from entry")]
    Unreachable { unreached: usize },
}

impl CorpusError {
    /// Shorthand for a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Convert error to a process exit code:
    /// - 0: Success
    /// - 1: IO / write failure
    /// - 2: Configuration error
    /// - 3: Serialization failure
    /// - 4: Verification failure
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::InvalidConfig { .. } | Self::ConfigFile { .. } => ExitCode::from(2),
            Self::CleanFailed { .. } | Self::Write { .. } => ExitCode::from(1),
            Self::Serialization { .. } => ExitCode::from(3),
            Self::Unreachable { .. } => ExitCode::from(4),
        }
    }
}

/// Result type alias for corpus-builder operations
pub type Result<T> = std::result::Result<T, CorpusError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_exit_with_two() {
        let err = CorpusError::config("node count must be greater than zero");
        assert_eq!(err.exit_code(), ExitCode::from(2));
        assert!(err.to_string().contains("node count"));
    }

    #[test]
    fn test_write_errors_exit_with_one() {
        let err = CorpusError::Write {
            path: PathBuf::from("out/main.mini"),
            source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
        };
        assert_eq!(err.exit_code(), ExitCode::from(1));
        assert_eq!(err.to_string(), "Failed to write out/main.mini: disk full");
    }
}
