//! CLI entrypoint for logweave
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use logweave_application::{
    BuildLoggerUseCase, DefaultConfigSource, DestinationFactory, Field, LogConfigSource,
    PlannedSink, RecordEncoder, SinkSummary, SinkTarget, plan_sinks, select_encoders_for,
};
use logweave_domain::{LogConfiguration, Severity};
use logweave_infrastructure::{ConfigLoader, StandardDestinations, install_tracing_bridge};
use logweave_presentation::{Cli, PlanFormatter, StandardEncoders};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Environment variable holding `EnvFilter` directives for the bridge
const FILTER_ENV: &str = "LOGWEAVE_FILTER";

fn main() -> Result<()> {
    let cli = Cli::parse();

    let loader = ConfigLoader::new(cli.config.clone());
    if cli.show_config {
        loader.print_config_sources();
        return Ok(());
    }

    let source = config_source(cli.no_config, loader);

    if cli.show_plan {
        let config = source.load()?;
        println!("{}", PlanFormatter::format_config(&config));
        println!();
        print!("{}", PlanFormatter::format(&describe_plan(&config)?));
        return Ok(());
    }

    // === Dependency Injection ===
    let use_case = build_use_case(source, Arc::new(StandardDestinations::new()));
    let logger = use_case.execute().context("Failed to build the logger")?;

    if !cli.no_bridge {
        let filter = EnvFilter::try_from_env(FILTER_ENV).ok();
        install_tracing_bridge(logger.clone(), filter)?;
    }

    let emitter = match &cli.name {
        Some(name) => logger.named(name),
        None => logger.clone(),
    };
    let fields: Vec<Field> = cli
        .fields
        .iter()
        .map(|(key, value)| Field::new(key.as_str(), value.as_str()))
        .collect();
    let severity = Severity::resolve(&cli.level);

    for message in &cli.messages {
        emitter.log_with(severity, message.as_str(), fields.clone());
    }

    logger.close();
    Ok(())
}

fn config_source(no_config: bool, loader: ConfigLoader) -> Arc<dyn LogConfigSource> {
    if no_config {
        Arc::new(DefaultConfigSource)
    } else {
        Arc::new(loader)
    }
}

fn build_use_case(
    source: Arc<dyn LogConfigSource>,
    destinations: Arc<dyn DestinationFactory>,
) -> BuildLoggerUseCase {
    BuildLoggerUseCase::new(source, Arc::new(StandardEncoders), destinations)
}

/// The sinks `config` would compose, without opening any destination
fn describe_plan(config: &LogConfiguration) -> Result<Vec<SinkSummary>> {
    let encoders = select_encoders_for(&StandardEncoders, config)?;
    Ok(plan_sinks(config)
        .into_iter()
        .map(|planned| {
            let (target, encoder) = match &planned {
                PlannedSink::Console { .. } => (SinkTarget::Console, &encoders.console),
                PlannedSink::File(spec) => (
                    SinkTarget::File(spec.rotation_policy.path.clone()),
                    &encoders.file,
                ),
            };
            SinkSummary {
                target,
                floor: planned.floor(),
                encoding: encoder.encoding(),
                colored: encoder.is_colored(),
            }
        })
        .collect())
}
