//! The declarative log configuration document.
//!
//! Field names serialize in camelCase and match the on-disk document
//! verbatim. Every struct is `#[serde(default)]`: a field missing from a
//! document keeps its built-in default, a present field replaces it.

use super::mode::{Encoding, Profile};
use crate::core::error::DomainError;
use crate::severity::Severity;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete log configuration, loaded once at startup.
///
/// `profile` and `encoding` are kept as written so that an invalid value
/// surfaces as a [`DomainError`] when the pipeline is built, naming the
/// offending value, instead of as an opaque deserialization failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LogConfiguration {
    /// `development` or `production`
    pub profile: String,
    /// Console severity floor (lenient, see [`Severity::resolve`])
    pub minimum_level: String,
    /// Attach the stdout sink
    pub stdout_enabled: bool,
    /// `json` or `console`
    pub encoding: String,
    /// Record the source location of each logging call
    pub capture_call_site: bool,
    /// Color level names on the console sink (console encoding only)
    pub color_console: bool,
    /// Attach one rotating file sink per `file_sinks` entry
    pub file_output_enabled: bool,
    pub file_sinks: Vec<FileSinkSpec>,
}

impl Default for LogConfiguration {
    fn default() -> Self {
        Self {
            profile: Profile::Development.to_string(),
            minimum_level: Severity::Debug.to_string(),
            stdout_enabled: true,
            encoding: Encoding::Console.to_string(),
            capture_call_site: true,
            color_console: true,
            file_output_enabled: false,
            file_sinks: vec![FileSinkSpec::default()],
        }
    }
}

impl LogConfiguration {
    pub fn parse_profile(&self) -> Result<Profile, DomainError> {
        Profile::parse(&self.profile)
    }

    pub fn parse_encoding(&self) -> Result<Encoding, DomainError> {
        Encoding::parse(&self.encoding)
    }

    /// Global (console) severity floor
    pub fn minimum_severity(&self) -> Severity {
        Severity::resolve(&self.minimum_level)
    }
}

/// One rotating file destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FileSinkSpec {
    /// Severity floor of this file, independent of the global minimum
    pub minimum_level: String,
    pub rotation_policy: RotationPolicy,
}

impl Default for FileSinkSpec {
    fn default() -> Self {
        Self {
            minimum_level: Severity::Debug.to_string(),
            rotation_policy: RotationPolicy::default(),
        }
    }
}

impl FileSinkSpec {
    pub fn minimum_severity(&self) -> Severity {
        Severity::resolve(&self.minimum_level)
    }
}

/// Rollover and retention rules of a file destination.
///
/// Opaque to the pipeline: handed to the rotating writer unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RotationPolicy {
    /// Active file; backups are written next to it
    pub path: PathBuf,
    /// Roll over before the file grows past this many megabytes (0 = 100)
    #[serde(rename = "maxSizeMB")]
    pub max_size_mb: u64,
    /// Remove backups older than this many days (0 = never)
    pub max_age_days: u64,
    /// Retain at most this many backups (0 = all)
    pub max_backups: usize,
    /// Name backups with local time instead of UTC
    pub local_time: bool,
}

impl Default for RotationPolicy {
    fn default() -> Self {
        Self {
            path: PathBuf::from("./logs/app.log"),
            max_size_mb: 1024,
            max_age_days: 7,
            max_backups: 3,
            local_time: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LogConfiguration::default();
        assert_eq!(config.profile, "development");
        assert_eq!(config.minimum_level, "debug");
        assert!(config.stdout_enabled);
        assert_eq!(config.encoding, "console");
        assert!(config.capture_call_site);
        assert!(config.color_console);
        assert!(!config.file_output_enabled);
        assert_eq!(config.file_sinks.len(), 1);

        let policy = &config.file_sinks[0].rotation_policy;
        assert_eq!(policy.path, PathBuf::from("./logs/app.log"));
        assert_eq!(policy.max_size_mb, 1024);
        assert_eq!(policy.max_age_days, 7);
        assert_eq!(policy.max_backups, 3);
    }

    #[test]
    fn test_serialize_uses_document_keys() {
        let value = serde_json::to_value(LogConfiguration::default()).unwrap();
        for key in [
            "profile",
            "minimumLevel",
            "stdoutEnabled",
            "encoding",
            "captureCallSite",
            "colorConsole",
            "fileOutputEnabled",
            "fileSinks",
        ] {
            assert!(value.get(key).is_some(), "missing key {key}");
        }
        let policy = &value["fileSinks"][0]["rotationPolicy"];
        assert_eq!(policy["maxSizeMB"], 1024);
        assert_eq!(policy["maxAgeDays"], 7);
        assert_eq!(policy["maxBackups"], 3);
    }

    #[test]
    fn test_deserialize_partial_document() {
        let json = r#"{
            "profile": "production",
            "fileOutputEnabled": true,
            "fileSinks": [
                { "minimumLevel": "error", "rotationPolicy": { "path": "/var/log/app/error.log" } }
            ]
        }"#;
        let config: LogConfiguration = serde_json::from_str(json).unwrap();
        assert_eq!(config.profile, "production");
        assert!(config.file_output_enabled);
        // Defaults should apply
        assert_eq!(config.encoding, "console");
        assert!(config.stdout_enabled);

        assert_eq!(config.file_sinks.len(), 1);
        let sink = &config.file_sinks[0];
        assert_eq!(sink.minimum_severity(), Severity::Error);
        assert_eq!(
            sink.rotation_policy.path,
            PathBuf::from("/var/log/app/error.log")
        );
        assert_eq!(sink.rotation_policy.max_size_mb, 1024);
    }

    #[test]
    fn test_round_trip() {
        let mut config = LogConfiguration::default();
        config.encoding = "json".to_string();
        config.file_output_enabled = true;
        config.file_sinks.push(FileSinkSpec {
            minimum_level: "warn".to_string(),
            rotation_policy: RotationPolicy {
                path: PathBuf::from("./logs/warn.log"),
                max_size_mb: 10,
                max_age_days: 1,
                max_backups: 0,
                local_time: true,
            },
        });

        let json = serde_json::to_string(&config).unwrap();
        let back: LogConfiguration = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_parse_enumerations() {
        let mut config = LogConfiguration::default();
        assert_eq!(config.parse_profile(), Ok(Profile::Development));
        assert_eq!(config.parse_encoding(), Ok(Encoding::Console));

        config.encoding = "Protobuf".to_string();
        assert!(matches!(
            config.parse_encoding(),
            Err(DomainError::InvalidEncoding { value }) if value == "Protobuf"
        ));
    }

    #[test]
    fn test_minimum_severity_is_lenient() {
        let mut config = LogConfiguration::default();
        config.minimum_level = "WARNING".to_string();
        assert_eq!(config.minimum_severity(), Severity::Warn);
        config.minimum_level = "loud".to_string();
        assert_eq!(config.minimum_severity(), Severity::Debug);
    }
}
