//! Field templates: which keys an encoder writes and how it renders
//! timestamps and levels.

use super::mode::Profile;

/// How the timestamp of a record is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeFormat {
    /// `2024-05-01T12:30:00.123+0200` in local time
    Iso8601,
    /// Seconds since the Unix epoch as a float (`1714559400.123`)
    EpochSeconds,
}

/// How the severity of a record is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelFormat {
    /// `INFO`
    Capital,
    /// `info`
    Lowercase,
}

/// Base field template, resolved from a [`Profile`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldTemplate {
    pub time_key: &'static str,
    pub level_key: &'static str,
    pub name_key: &'static str,
    pub caller_key: &'static str,
    pub message_key: &'static str,
    pub time_format: TimeFormat,
    pub level_format: LevelFormat,
}

impl FieldTemplate {
    /// Compact, human-oriented preset
    pub fn development() -> Self {
        Self {
            time_key: "T",
            level_key: "L",
            name_key: "N",
            caller_key: "C",
            message_key: "M",
            time_format: TimeFormat::Iso8601,
            level_format: LevelFormat::Capital,
        }
    }

    /// Machine-oriented preset
    pub fn production() -> Self {
        Self {
            time_key: "ts",
            level_key: "level",
            name_key: "logger",
            caller_key: "caller",
            message_key: "msg",
            time_format: TimeFormat::EpochSeconds,
            level_format: LevelFormat::Lowercase,
        }
    }

    pub fn for_profile(profile: Profile) -> Self {
        match profile {
            Profile::Development => Self::development(),
            Profile::Production => Self::production(),
        }
    }

    /// Keys every encoder reserves; structured fields may not shadow them.
    pub fn reserved_keys(&self) -> [&'static str; 5] {
        [
            self.time_key,
            self.level_key,
            self.name_key,
            self.caller_key,
            self.message_key,
        ]
    }
}
