//! Human-readable console encoder

use super::parts::{level_text, time_text};
use console::{StyledObject, style};
use logweave_application::{Record, RecordEncoder};
use logweave_domain::{Encoding, FieldTemplate, LevelFormat, Severity};
use serde_json::{Map, Value};

/// Tab-separated text: time, level, name, caller, message, then the
/// structured fields as one compact JSON object.
///
/// With color on, the level is always capitalized and colored by severity.
/// The escape codes are emitted whatever the destination is, terminal or not.
#[derive(Debug, Clone)]
pub struct ConsoleEncoder {
    template: FieldTemplate,
    colored: bool,
}

impl ConsoleEncoder {
    pub fn new(template: FieldTemplate) -> Self {
        Self {
            template,
            colored: false,
        }
    }

    pub fn colored(template: FieldTemplate) -> Self {
        Self {
            template,
            colored: true,
        }
    }

    fn level(&self, severity: Severity) -> String {
        if !self.colored {
            return level_text(severity, self.template.level_format).to_string();
        }
        let text = level_text(severity, LevelFormat::Capital);
        paint(severity, text).to_string()
    }
}

fn paint(severity: Severity, text: &str) -> StyledObject<&str> {
    let styled = style(text).force_styling(true);
    match severity {
        Severity::Debug => styled.magenta(),
        Severity::Info => styled.blue(),
        Severity::Warn => styled.yellow(),
        Severity::Error | Severity::Fatal | Severity::Panic => styled.red(),
    }
}

impl RecordEncoder for ConsoleEncoder {
    fn render(&self, record: &Record) -> Vec<u8> {
        let mut columns = vec![
            time_text(&record.timestamp, self.template.time_format),
            self.level(record.severity),
        ];
        if let Some(name) = &record.logger_name {
            columns.push(name.clone());
        }
        if let Some(site) = &record.call_site {
            columns.push(site.short());
        }
        columns.push(record.message.clone());
        if !record.fields.is_empty() {
            let fields: Map<String, Value> = record
                .fields
                .iter()
                .map(|f| (f.key.clone(), f.value.clone()))
                .collect();
            columns.push(Value::Object(fields).to_string());
        }

        let mut line = columns.join("\t");
        line.push('\n');
        line.into_bytes()
    }

    fn encoding(&self) -> Encoding {
        Encoding::Console
    }

    fn is_colored(&self) -> bool {
        self.colored
    }
}
