//! Application layer for logweave
//!
//! This crate contains the log pipeline (records, sinks, the fan-out core
//! and the [`Logger`] handle), the use cases that compose it from a
//! configuration, and the port definitions adapters implement.
//! It depends only on the domain layer.

pub mod pipeline;
pub mod ports;
pub mod use_cases;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use pipeline::{
    core::{LogCore, SinkFailure},
    logger::{Logger, LoggerOptions},
    record::{CallSite, Field, Record},
    sink::{Sink, SinkSummary, SinkTarget},
};
pub use ports::{
    config_source::{ConfigSourceError, DefaultConfigSource, LogConfigSource},
    encoder::{EncoderFactory, RecordEncoder},
    writer::{DestinationFactory, LogWriter, MemoryWriter, WriteError},
};
pub use use_cases::build_logger::{BuildLoggerError, BuildLoggerUseCase};
pub use use_cases::compose_core::{
    PlannedSink, build_console_sink, build_file_sink, compose, plan_sinks,
};
pub use use_cases::select_encoders::{EncoderPair, select_encoders, select_encoders_for};
