//! Production encoder factory

use super::{ConsoleEncoder, JsonEncoder};
use logweave_application::{EncoderFactory, RecordEncoder};
use logweave_domain::FieldTemplate;
use std::sync::Arc;

/// Builds [`JsonEncoder`]s and [`ConsoleEncoder`]s
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardEncoders;

impl EncoderFactory for StandardEncoders {
    fn json(&self, template: &FieldTemplate) -> Arc<dyn RecordEncoder> {
        Arc::new(JsonEncoder::new(template.clone()))
    }

    fn console(&self, template: &FieldTemplate, colored: bool) -> Arc<dyn RecordEncoder> {
        if colored {
            Arc::new(ConsoleEncoder::colored(template.clone()))
        } else {
            Arc::new(ConsoleEncoder::new(template.clone()))
        }
    }
}
