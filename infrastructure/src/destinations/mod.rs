//! Destinations: where encoded records end up
//!
//! - [`StandardDestinations`]: the production [`DestinationFactory`]
//!   (non-blocking stdout, non-blocking rotating files, synchronous stderr)
//! - [`RotatingFile`]: size-based rollover with age/count retention
//! - [`BackgroundWriter`]: worker-thread writer with a drain-on-close guard
//!
//! [`DestinationFactory`]: logweave_application::DestinationFactory

mod background;
mod console;
mod reporting;
mod rotating;
mod standard;

pub use background::BackgroundWriter;
pub use console::StderrWriter;
pub use reporting::ReportingWriter;
pub use rotating::RotatingFile;
pub use standard::StandardDestinations;
