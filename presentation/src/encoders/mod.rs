//! Record encoders
//!
//! Both encoders follow a [`FieldTemplate`](logweave_domain::FieldTemplate):
//! which keys are written, how the time is rendered and how the level is
//! spelled.

mod console;
mod factory;
mod json;
mod parts;

pub use console::ConsoleEncoder;
pub use factory::StandardEncoders;
pub use json::JsonEncoder;
