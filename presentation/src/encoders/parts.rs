//! Rendering of the template-controlled parts of a record

use chrono::{DateTime, Local, Utc};
use logweave_domain::{LevelFormat, Severity, TimeFormat};
use serde_json::Value;

/// The timestamp as the template wants it: a string or a float
pub(crate) fn time_value(timestamp: &DateTime<Utc>, format: TimeFormat) -> Value {
    match format {
        TimeFormat::Iso8601 => Value::from(
            timestamp
                .with_timezone(&Local)
                .format("%Y-%m-%dT%H:%M:%S%.3f%z")
                .to_string(),
        ),
        TimeFormat::EpochSeconds => {
            let seconds = timestamp.timestamp() as f64
                + f64::from(timestamp.timestamp_subsec_nanos()) / 1_000_000_000.0;
            Value::from(seconds)
        }
    }
}

/// Plain-text form of [`time_value`]
pub(crate) fn time_text(timestamp: &DateTime<Utc>, format: TimeFormat) -> String {
    match time_value(timestamp, format) {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

pub(crate) fn level_text(severity: Severity, format: LevelFormat) -> &'static str {
    match format {
        LevelFormat::Capital => severity.capitalized(),
        LevelFormat::Lowercase => severity.as_str(),
    }
}
