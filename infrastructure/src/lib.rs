//! Infrastructure layer for logweave
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: configuration document loading, the
//! stdout and rotating-file destinations, and the `tracing` bridge.

pub mod bridge;
pub mod config;
pub mod destinations;

// Re-export commonly used types
pub use bridge::{BridgeError, TracingBridge, install_tracing_bridge};
pub use config::ConfigLoader;
pub use destinations::{
    BackgroundWriter, ReportingWriter, RotatingFile, StandardDestinations, StderrWriter,
};
