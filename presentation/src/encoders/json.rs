//! Newline-delimited JSON encoder

use super::parts::{level_text, time_value};
use logweave_application::{Record, RecordEncoder};
use logweave_domain::{Encoding, FieldTemplate};
use serde_json::{Map, Value};

/// One JSON object per record, keys in template order, then fields.
///
/// Name and caller keys are omitted when the record has none. Structured
/// fields never overwrite a template key.
#[derive(Debug, Clone)]
pub struct JsonEncoder {
    template: FieldTemplate,
}

impl JsonEncoder {
    pub fn new(template: FieldTemplate) -> Self {
        Self { template }
    }

    fn object(&self, record: &Record) -> Map<String, Value> {
        let t = &self.template;
        let mut map = Map::new();
        map.insert(
            t.time_key.to_string(),
            time_value(&record.timestamp, t.time_format),
        );
        map.insert(
            t.level_key.to_string(),
            Value::from(level_text(record.severity, t.level_format)),
        );
        if let Some(name) = &record.logger_name {
            map.insert(t.name_key.to_string(), Value::from(name.as_str()));
        }
        if let Some(site) = &record.call_site {
            map.insert(t.caller_key.to_string(), Value::from(site.short()));
        }
        map.insert(
            t.message_key.to_string(),
            Value::from(record.message.as_str()),
        );

        let reserved = t.reserved_keys();
        for field in &record.fields {
            if !reserved.contains(&field.key.as_str()) {
                map.insert(field.key.clone(), field.value.clone());
            }
        }
        map
    }
}

impl RecordEncoder for JsonEncoder {
    fn render(&self, record: &Record) -> Vec<u8> {
        let mut bytes = Value::Object(self.object(record)).to_string().into_bytes();
        bytes.push(b'\n');
        bytes
    }

    fn encoding(&self) -> Encoding {
        Encoding::Json
    }
}
