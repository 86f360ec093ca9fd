//! Domain layer for logweave
//!
//! This crate contains the vocabulary of the log pipeline: severities,
//! the declarative [`LogConfiguration`], profiles, encodings and the
//! field templates encoders render with.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Severity
//!
//! An ordered log level: `Debug < Info < Warn < Error < Fatal < Panic`.
//! Severity names coming from configuration are resolved leniently
//! (see [`Severity::resolve`]).
//!
//! ## Profile / Encoding
//!
//! - **Profile** (development / production) selects the [`FieldTemplate`]
//! - **Encoding** (json / console) selects the record encoder kind
//!
//! Both are closed sets; anything else is a [`DomainError`].

pub mod config;
pub mod core;
pub mod severity;

// Re-export commonly used types
pub use config::{
    Encoding, FieldTemplate, FileSinkSpec, LevelFormat, LogConfiguration, Profile,
    RotationPolicy, TimeFormat,
};
pub use core::error::DomainError;
pub use severity::Severity;
