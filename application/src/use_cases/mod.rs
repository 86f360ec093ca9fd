//! Use cases
//!
//! Application-level operations that turn a configuration into a
//! composed [`Logger`](crate::Logger).

pub mod build_logger;
pub mod compose_core;
pub mod select_encoders;
