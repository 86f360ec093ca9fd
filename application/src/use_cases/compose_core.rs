//! Sink planning and core composition
//!
//! The console sink is the guaranteed fallback: it is attached whenever it
//! is requested, and also when no destination is requested at all. File
//! sinks follow the console, in configuration order.

use crate::pipeline::core::LogCore;
use crate::pipeline::sink::{Sink, SinkTarget};
use crate::ports::encoder::RecordEncoder;
use crate::ports::writer::DestinationFactory;
use logweave_domain::{FileSinkSpec, LogConfiguration, Severity};
use std::sync::Arc;

/// A sink the configuration asks for, before any destination exists
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlannedSink {
    Console { floor: Severity },
    File(FileSinkSpec),
}

impl PlannedSink {
    pub fn floor(&self) -> Severity {
        match self {
            PlannedSink::Console { floor } => *floor,
            PlannedSink::File(spec) => spec.minimum_severity(),
        }
    }
}

/// Decide which sinks a configuration attaches, in insertion order.
pub fn plan_sinks(config: &LogConfiguration) -> Vec<PlannedSink> {
    let mut plan = Vec::with_capacity(config.file_sinks.len() + 1);

    let fallback = !config.stdout_enabled && !config.file_output_enabled;
    if fallback || config.stdout_enabled {
        plan.push(PlannedSink::Console {
            floor: config.minimum_severity(),
        });
    }

    if config.file_output_enabled {
        plan.extend(config.file_sinks.iter().cloned().map(PlannedSink::File));
    }

    plan
}

/// Bind standard output to `floor`.
pub fn build_console_sink(
    destinations: &dyn DestinationFactory,
    encoder: Arc<dyn RecordEncoder>,
    floor: Severity,
) -> Sink {
    Sink::new(SinkTarget::Console, floor, encoder, destinations.stdout())
}

/// Bind a rotating file, configured with the spec's policy as-is.
pub fn build_file_sink(
    destinations: &dyn DestinationFactory,
    encoder: Arc<dyn RecordEncoder>,
    spec: &FileSinkSpec,
) -> Sink {
    Sink::new(
        SinkTarget::File(spec.rotation_policy.path.clone()),
        spec.minimum_severity(),
        encoder,
        destinations.rotating_file(&spec.rotation_policy),
    )
}

/// Merge sinks into one fan-out core.
pub fn compose(sinks: Vec<Sink>) -> LogCore {
    LogCore::new(sinks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::record::Record;
    use crate::testing::{PlainEncoder, RecordingDestinations};
    use logweave_domain::RotationPolicy;
    use std::path::PathBuf;

    fn file_spec(level: &str, path: &str) -> FileSinkSpec {
        FileSinkSpec {
            minimum_level: level.to_string(),
            rotation_policy: RotationPolicy {
                path: PathBuf::from(path),
                ..RotationPolicy::default()
            },
        }
    }

    fn config(stdout: bool, files: bool, sinks: Vec<FileSinkSpec>) -> LogConfiguration {
        LogConfiguration {
            stdout_enabled: stdout,
            file_output_enabled: files,
            file_sinks: sinks,
            ..LogConfiguration::default()
        }
    }

    #[test]
    fn test_inclusion_rule() {
        let one = || vec![file_spec("error", "/var/log/app.log")];

        let cases = [
            (false, false, vec![PlannedSink::Console { floor: Severity::Debug }]),
            (true, false, vec![PlannedSink::Console { floor: Severity::Debug }]),
            (false, true, vec![PlannedSink::File(one()[0].clone())]),
            (
                true,
                true,
                vec![
                    PlannedSink::Console { floor: Severity::Debug },
                    PlannedSink::File(one()[0].clone()),
                ],
            ),
        ];

        for (stdout, files, expected) in cases {
            assert_eq!(
                plan_sinks(&config(stdout, files, one())),
                expected,
                "stdout={stdout} files={files}"
            );
        }
    }

    #[test]
    fn test_console_uses_global_floor_and_files_their_own() {
        let mut cfg = config(true, true, vec![file_spec("ERROR", "a.log")]);
        cfg.minimum_level = "warning".to_string();

        let floors: Vec<Severity> = plan_sinks(&cfg).iter().map(PlannedSink::floor).collect();
        assert_eq!(floors, vec![Severity::Warn, Severity::Error]);
    }

    #[test]
    fn test_file_sinks_keep_configuration_order() {
        let cfg = config(
            false,
            true,
            vec![
                file_spec("debug", "first.log"),
                file_spec("info", "second.log"),
                file_spec("error", "third.log"),
            ],
        );
        let paths: Vec<PathBuf> = plan_sinks(&cfg)
            .into_iter()
            .filter_map(|planned| match planned {
                PlannedSink::File(spec) => Some(spec.rotation_policy.path),
                PlannedSink::Console { .. } => None,
            })
            .collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("first.log"),
                PathBuf::from("second.log"),
                PathBuf::from("third.log")
            ]
        );
    }

    #[test]
    fn test_enabled_file_output_with_no_entries_is_inert() {
        assert!(plan_sinks(&config(false, true, vec![])).is_empty());
        assert_eq!(plan_sinks(&config(true, true, vec![])).len(), 1);
    }

    #[test]
    fn test_build_file_sink_passes_policy_through() {
        let destinations = RecordingDestinations::default();
        let spec = FileSinkSpec {
            minimum_level: "info".to_string(),
            rotation_policy: RotationPolicy {
                path: PathBuf::from("/srv/app/audit.log"),
                max_size_mb: 5,
                max_age_days: 0,
                max_backups: 10,
                local_time: true,
            },
        };

        let sink = build_file_sink(&destinations, Arc::new(PlainEncoder::json()), &spec);
        sink.write(&Record::new(Severity::Info, "audited")).unwrap();

        assert_eq!(sink.floor(), Severity::Info);
        assert_eq!(
            sink.target(),
            &SinkTarget::File(PathBuf::from("/srv/app/audit.log"))
        );
        let file = destinations.file("/srv/app/audit.log").unwrap();
        assert_eq!(file.lines(), vec!["INFO audited"]);
    }

    #[test]
    fn test_compose_console_and_file() {
        let destinations = RecordingDestinations::default();
        let core = compose(vec![
            build_console_sink(
                &destinations,
                Arc::new(PlainEncoder::console()),
                Severity::Warn,
            ),
            build_file_sink(
                &destinations,
                Arc::new(PlainEncoder::console()),
                &file_spec("debug", "app.log"),
            ),
        ]);

        core.dispatch(&Record::new(Severity::Info, "only in the file"));

        assert!(destinations.stdout.is_empty());
        assert_eq!(
            destinations.file("app.log").unwrap().lines(),
            vec!["INFO only in the file"]
        );
    }
}
