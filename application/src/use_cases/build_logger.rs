//! Build logger use case
//!
//! Turns a [`LogConfiguration`] into a ready [`Logger`]:
//!
//! 1. **Load** the configuration from the [`LogConfigSource`]
//! 2. **Validate** profile and encoding, select the encoders
//! 3. **Plan** the sinks (console fallback rule, one sink per file entry)
//! 4. **Compose** the fan-out core and wrap it in a handle
//! 5. **Announce** the pipeline with one Info record
//!
//! Construction either completes or returns a [`BuildLoggerError`]; a
//! half-configured logger is never handed out. Whether a failure aborts
//! the process is up to the caller.

use crate::pipeline::logger::{Logger, LoggerOptions};
use crate::pipeline::sink::Sink;
use crate::ports::config_source::{ConfigSourceError, LogConfigSource};
use crate::ports::encoder::EncoderFactory;
use crate::ports::writer::DestinationFactory;
use crate::use_cases::compose_core::{
    PlannedSink, build_console_sink, build_file_sink, compose, plan_sinks,
};
use crate::use_cases::select_encoders::select_encoders_for;
use logweave_domain::{DomainError, LogConfiguration};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that prevent a logger from being built
#[derive(Error, Debug)]
pub enum BuildLoggerError {
    #[error(transparent)]
    Config(#[from] ConfigSourceError),

    #[error(transparent)]
    InvalidConfiguration(#[from] DomainError),
}

/// Use case for building the application's logger
pub struct BuildLoggerUseCase {
    source: Arc<dyn LogConfigSource>,
    encoders: Arc<dyn EncoderFactory>,
    destinations: Arc<dyn DestinationFactory>,
}

impl BuildLoggerUseCase {
    pub fn new(
        source: Arc<dyn LogConfigSource>,
        encoders: Arc<dyn EncoderFactory>,
        destinations: Arc<dyn DestinationFactory>,
    ) -> Self {
        Self {
            source,
            encoders,
            destinations,
        }
    }

    /// Load the configuration from the source and build from it.
    pub fn execute(&self) -> Result<Logger, BuildLoggerError> {
        let config = self.source.load()?;
        self.execute_with_config(&config)
    }

    pub fn execute_with_config(&self, config: &LogConfiguration) -> Result<Logger, BuildLoggerError> {
        let encoders = select_encoders_for(self.encoders.as_ref(), config)?;

        let sinks: Vec<Sink> = plan_sinks(config)
            .into_iter()
            .map(|planned| match planned {
                PlannedSink::Console { floor } => build_console_sink(
                    self.destinations.as_ref(),
                    encoders.console.clone(),
                    floor,
                ),
                PlannedSink::File(spec) => {
                    build_file_sink(self.destinations.as_ref(), encoders.file.clone(), &spec)
                }
            })
            .collect();

        let core = compose(sinks);
        for summary in core.summaries() {
            debug!("Composed sink: {}", summary);
        }
        if core.is_empty() {
            info!("File output is enabled with no file sinks; every record will be discarded");
        }

        let logger = Logger::new(
            core,
            LoggerOptions {
                capture_call_site: config.capture_call_site,
                error_output: Some(self.destinations.error_output()),
            },
        );

        logger.info("logger initialized");
        Ok(logger)
    }
}
