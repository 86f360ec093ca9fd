//! Profile and encoding definitions.
//!
//! Both are closed sets matched case-insensitively. Parsing an unknown
//! value is a [`DomainError`], never a silent fallback: a logging pipeline
//! must not run half-configured.

use crate::core::error::DomainError;
use std::fmt;

/// Encoder verbosity profile.
///
/// - **Development**: short keys, ISO-8601 timestamps, capitalized levels
/// - **Production**: descriptive keys, epoch timestamps, lowercase levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Profile {
    #[default]
    Development,
    Production,
}

impl Profile {
    /// Parse a profile name (case-insensitive).
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        if value.eq_ignore_ascii_case("development") {
            Ok(Profile::Development)
        } else if value.eq_ignore_ascii_case("production") {
            Ok(Profile::Production)
        } else {
            Err(DomainError::InvalidProfile {
                value: value.to_string(),
            })
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Profile::Development => "development",
            Profile::Production => "production",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Profile {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Profile::parse(s)
    }
}

/// Output encoding of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    /// Newline-delimited JSON objects
    Json,
    /// Human-readable, tab-separated text
    #[default]
    Console,
}

impl Encoding {
    /// Parse an encoding name (case-insensitive).
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        if value.eq_ignore_ascii_case("json") {
            Ok(Encoding::Json)
        } else if value.eq_ignore_ascii_case("console") {
            Ok(Encoding::Console)
        } else {
            Err(DomainError::InvalidEncoding {
                value: value.to_string(),
            })
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Encoding::Json => "json",
            Encoding::Console => "console",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Encoding {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Encoding::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_parse() {
        assert_eq!(Profile::parse("development"), Ok(Profile::Development));
        assert_eq!(Profile::parse("PRODUCTION"), Ok(Profile::Production));
        assert_eq!("Development".parse::<Profile>(), Ok(Profile::Development));
    }

    #[test]
    fn test_profile_parse_rejects_unknown() {
        let err = Profile::parse("staging").unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidProfile {
                value: "staging".to_string()
            }
        );
        assert!(Profile::parse("").is_err());
        assert!(Profile::parse("dev").is_err());
    }

    #[test]
    fn test_encoding_parse() {
        assert_eq!(Encoding::parse("json"), Ok(Encoding::Json));
        assert_eq!(Encoding::parse("Console"), Ok(Encoding::Console));
        assert!(matches!(
            Encoding::parse("text"),
            Err(DomainError::InvalidEncoding { .. })
        ));
    }

    #[test]
    fn test_display_round_trips() {
        for profile in [Profile::Development, Profile::Production] {
            assert_eq!(profile.to_string().parse::<Profile>(), Ok(profile));
        }
        for encoding in [Encoding::Json, Encoding::Console] {
            assert_eq!(encoding.to_string().parse::<Encoding>(), Ok(encoding));
        }
    }
}
