//! Human-facing output for the CLI

pub mod plan;
