//! Severity value object
//!
//! Severities are totally ordered, lowest first:
//! `Debug < Info < Warn < Error < Fatal < Panic`.

use std::convert::Infallible;
use std::fmt;

/// Ordered log severity.
///
/// A sink with floor `F` accepts a record of severity `S` iff `S >= F`,
/// which is exactly the derived [`Ord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Severity {
    /// Verbose diagnostics (default floor)
    #[default]
    Debug,
    /// Normal operational messages
    Info,
    /// Something unexpected that does not stop the program
    Warn,
    /// An operation failed
    Error,
    /// The program cannot continue
    Fatal,
    /// Highest severity
    Panic,
}

impl Severity {
    /// All severities in ascending order.
    pub const ALL: [Severity; 6] = [
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
        Severity::Fatal,
        Severity::Panic,
    ];

    /// Resolve a human-readable severity name, case-insensitively.
    ///
    /// Surrounding whitespace is not ignored, in line with
    /// [`Profile::parse`](crate::Profile::parse).
    ///
    /// Unrecognized names (including the empty string) resolve to
    /// [`Severity::Debug`]. This never fails: callers must not treat an
    /// unknown level name as an error signal.
    ///
    /// ```
    /// use logweave_domain::Severity;
    ///
    /// assert_eq!(Severity::resolve("WARNING"), Severity::Warn);
    /// assert_eq!(Severity::resolve("dpanic"), Severity::Panic);
    /// assert_eq!(Severity::resolve("verbose"), Severity::Debug);
    /// ```
    pub fn resolve(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "panic" | "dpanic" => Severity::Panic,
            "fatal" => Severity::Fatal,
            "error" => Severity::Error,
            "warn" | "warning" => Severity::Warn,
            "info" => Severity::Info,
            "debug" => Severity::Debug,
            _ => Severity::Debug,
        }
    }

    /// Canonical lowercase name (`"debug"`, `"info"`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Error => "error",
            Severity::Fatal => "fatal",
            Severity::Panic => "panic",
        }
    }

    /// Capitalized name (`"DEBUG"`, `"INFO"`, ...).
    pub fn capitalized(&self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
            Severity::Panic => "PANIC",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Severity {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Severity::resolve(s))
    }
}
