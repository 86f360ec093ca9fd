//! Configuration value objects for the domain layer
//!
//! These are the declarative inputs of the log pipeline. They are
//! loaded once (by the infrastructure layer) and are immutable afterwards.

mod log_config;
mod mode;
mod template;

pub use log_config::{FileSinkSpec, LogConfiguration, RotationPolicy};
pub use mode::{Encoding, Profile};
pub use template::{FieldTemplate, LevelFormat, TimeFormat};
