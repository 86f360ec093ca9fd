//! Port for record encoders.
//!
//! An encoder renders one [`Record`] into the bytes a destination stores.
//! The application layer decides *which* encoder a sink gets (see
//! [`crate::use_cases::select_encoders`]); adapters decide what the bytes
//! look like.

use crate::pipeline::record::Record;
use logweave_domain::{Encoding, FieldTemplate};
use std::sync::Arc;

/// Renders records for one sink.
pub trait RecordEncoder: Send + Sync {
    /// Render a record, including its trailing line ending.
    fn render(&self, record: &Record) -> Vec<u8>;

    /// The encoding this encoder produces
    fn encoding(&self) -> Encoding;

    /// Whether the output carries ANSI color codes
    fn is_colored(&self) -> bool {
        false
    }
}

/// Builds encoders from a field template.
pub trait EncoderFactory: Send + Sync {
    fn json(&self, template: &FieldTemplate) -> Arc<dyn RecordEncoder>;

    fn console(&self, template: &FieldTemplate, colored: bool) -> Arc<dyn RecordEncoder>;
}
