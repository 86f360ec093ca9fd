//! The log pipeline: records flow from a [`logger::Logger`] handle into a
//! fan-out [`core::LogCore`], which hands each one to every [`sink::Sink`]
//! whose severity floor it satisfies.

pub mod core;
pub mod logger;
pub mod record;
pub mod sink;
