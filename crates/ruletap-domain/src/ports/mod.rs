//! Domain ports

pub mod sink;

pub use sink::{SharedTelemetrySink, TelemetrySink};
