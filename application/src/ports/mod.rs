//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation
//! adapters must implement: where configuration comes from, how a record
//! becomes bytes, and where those bytes go.

pub mod config_source;
pub mod encoder;
pub mod writer;
