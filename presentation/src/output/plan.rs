//! Formatter for the composed pipeline

use colored::Colorize;
use logweave_application::{SinkSummary, SinkTarget};
use logweave_domain::LogConfiguration;

/// Formats sink plans and configurations for console display
pub struct PlanFormatter;

impl PlanFormatter {
    /// One line per sink, in composition order
    pub fn format(sinks: &[SinkSummary]) -> String {
        let mut output = format!("{}\n", "Composed sinks:".cyan().bold());
        if sinks.is_empty() {
            output.push_str(&format!(
                "  {}\n",
                "(none: every record is discarded)".yellow()
            ));
            return output;
        }
        for (index, sink) in sinks.iter().enumerate() {
            let target = match &sink.target {
                SinkTarget::Console => "console".to_string(),
                SinkTarget::File(path) => path.display().to_string(),
            };
            output.push_str(&format!(
                "  {}. {:<8} {} {} {}{}\n",
                index + 1,
                sink.floor.as_str().bold(),
                target,
                "encoding:".dimmed(),
                sink.encoding,
                if sink.colored { " (colored)" } else { "" }
            ));
        }
        output
    }

    /// The effective configuration as pretty JSON
    pub fn format_config(config: &LogConfiguration) -> String {
        serde_json::to_string_pretty(config).unwrap_or_else(|e| format!("<unprintable: {e}>"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logweave_domain::{Encoding, Severity};
    use std::path::PathBuf;

    #[test]
    fn test_format_lists_sinks_in_order() {
        let sinks = vec![
            SinkSummary {
                target: SinkTarget::Console,
                floor: Severity::Info,
                encoding: Encoding::Console,
                colored: true,
            },
            SinkSummary {
                target: SinkTarget::File(PathBuf::from("/var/log/app.log")),
                floor: Severity::Error,
                encoding: Encoding::Console,
                colored: false,
            },
        ];

        let text = PlanFormatter::format(&sinks);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].trim_start().starts_with("1. "));
        assert!(lines[1].contains("info"));
        assert!(lines[1].contains("console"));
        assert!(lines[1].ends_with("(colored)"));
        assert!(lines[2].trim_start().starts_with("2. "));
        assert!(lines[2].contains("error"));
        assert!(lines[2].contains("/var/log/app.log"));
    }

    #[test]
    fn test_format_empty_plan() {
        assert!(PlanFormatter::format(&[]).contains("every record is discarded"));
    }

    #[test]
    fn test_format_config_uses_document_keys() {
        let text = PlanFormatter::format_config(&LogConfiguration::default());
        assert!(text.contains("\"minimumLevel\": \"debug\""));
        assert!(text.contains("\"maxSizeMB\": 1024"));
    }
}
