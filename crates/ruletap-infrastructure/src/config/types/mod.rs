//! Configuration types module

pub mod app;
pub mod logging;
pub mod telemetry;

// Re-export main types
pub use app::*;
pub use logging::*;
pub use telemetry::*;
