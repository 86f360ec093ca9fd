//! Encoder selection
//!
//! Resolves the field template from the profile and picks the encoders for
//! the two kinds of sinks. Color is a terminal concern: the file encoder is
//! never colored.

use crate::ports::encoder::{EncoderFactory, RecordEncoder};
use logweave_domain::{DomainError, Encoding, FieldTemplate, LogConfiguration, Profile};
use std::fmt;
use std::sync::Arc;

/// The encoders for file sinks and for the console sink
#[derive(Clone)]
pub struct EncoderPair {
    pub file: Arc<dyn RecordEncoder>,
    pub console: Arc<dyn RecordEncoder>,
}

impl fmt::Debug for EncoderPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncoderPair")
            .field("file", &self.file.encoding())
            .field("console", &self.console.encoding())
            .field("console_colored", &self.console.is_colored())
            .finish()
    }
}

pub fn select_encoders(
    factory: &dyn EncoderFactory,
    profile: Profile,
    encoding: Encoding,
    color_console: bool,
) -> EncoderPair {
    let template = FieldTemplate::for_profile(profile);
    match encoding {
        Encoding::Json => EncoderPair {
            file: factory.json(&template),
            console: factory.json(&template),
        },
        Encoding::Console => EncoderPair {
            file: factory.console(&template, false),
            console: factory.console(&template, color_console),
        },
    }
}

/// [`select_encoders`] driven by the raw configuration values.
///
/// Fails on a profile or encoding outside the enumerated set.
pub fn select_encoders_for(
    factory: &dyn EncoderFactory,
    config: &LogConfiguration,
) -> Result<EncoderPair, DomainError> {
    let profile = config.parse_profile()?;
    let encoding = config.parse_encoding()?;
    Ok(select_encoders(
        factory,
        profile,
        encoding,
        config.color_console,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::PlainEncoders;

    #[test]
    fn test_json_for_both_sinks() {
        for color in [true, false] {
            let pair = select_encoders(&PlainEncoders, Profile::Production, Encoding::Json, color);
            assert_eq!(pair.file.encoding(), Encoding::Json);
            assert_eq!(pair.console.encoding(), Encoding::Json);
            assert!(!pair.console.is_colored());
        }
    }

    #[test]
    fn test_console_color_only_on_console_sink() {
        let pair = select_encoders(
            &PlainEncoders,
            Profile::Development,
            Encoding::Console,
            true,
        );
        assert_eq!(pair.file.encoding(), Encoding::Console);
        assert!(!pair.file.is_colored());
        assert!(pair.console.is_colored());

        let plain = select_encoders(
            &PlainEncoders,
            Profile::Development,
            Encoding::Console,
            false,
        );
        assert!(!plain.console.is_colored());
    }

    #[test]
    fn test_from_configuration_is_case_insensitive() {
        let config = LogConfiguration {
            profile: "Production".to_string(),
            encoding: "JSON".to_string(),
            ..LogConfiguration::default()
        };
        let pair = select_encoders_for(&PlainEncoders, &config).unwrap();
        assert_eq!(pair.console.encoding(), Encoding::Json);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let bad_profile = LogConfiguration {
            profile: "staging".to_string(),
            ..LogConfiguration::default()
        };
        let err = select_encoders_for(&PlainEncoders, &bad_profile).unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidProfile {
                value: "staging".to_string()
            }
        );

        let bad_encoding = LogConfiguration {
            encoding: "logfmt".to_string(),
            ..LogConfiguration::default()
        };
        let err = select_encoders_for(&PlainEncoders, &bad_encoding).unwrap_err();
        assert!(err.to_string().contains("'logfmt'"));
        assert!(err.to_string().contains("'json' or 'console'"));
    }
}
