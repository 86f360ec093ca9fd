//! Presentation layer for logweave
//!
//! This crate contains the record encoders (JSON and console text),
//! the CLI definitions and the pipeline formatter.

pub mod cli;
pub mod encoders;
pub mod output;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use encoders::{ConsoleEncoder, JsonEncoder, StandardEncoders};
pub use output::plan::PlanFormatter;
