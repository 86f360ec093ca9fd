//! Port for loading the log configuration.

use logweave_domain::LogConfiguration;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to obtain a configuration from a document that should exist.
///
/// A *missing* well-known document is not an error: sources fall back to
/// built-in defaults silently.
#[derive(Error, Debug)]
pub enum ConfigSourceError {
    /// An explicitly requested document does not exist
    #[error("Configuration file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The document exists but could not be read
    #[error("Failed to read configuration file {}: {reason}", path.display())]
    Unreadable { path: PathBuf, reason: String },

    /// The document was read but does not parse as a log configuration
    #[error("Malformed configuration file {}: {reason}", path.display())]
    Malformed { path: PathBuf, reason: String },
}

impl ConfigSourceError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigSourceError::NotFound { path }
            | ConfigSourceError::Unreadable { path, .. }
            | ConfigSourceError::Malformed { path, .. } => path,
        }
    }
}

/// Where the pipeline's configuration comes from.
pub trait LogConfigSource: Send + Sync {
    fn load(&self) -> Result<LogConfiguration, ConfigSourceError>;
}

/// Built-in defaults only (no document is consulted)
pub struct DefaultConfigSource;

impl LogConfigSource for DefaultConfigSource {
    fn load(&self) -> Result<LogConfiguration, ConfigSourceError> {
        Ok(LogConfiguration::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_source_returns_defaults() {
        let config = DefaultConfigSource.load().unwrap();
        assert_eq!(config, LogConfiguration::default());
    }

    #[test]
    fn test_error_display_names_path() {
        let error = ConfigSourceError::Malformed {
            path: PathBuf::from("./logs.json"),
            reason: "expected value at line 1 column 1".to_string(),
        };
        assert!(error.to_string().contains("./logs.json"));
        assert_eq!(error.path(), &PathBuf::from("./logs.json"));
    }
}
