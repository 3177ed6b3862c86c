//! Configuration
//!
//! Layered with Figment: defaults, then a TOML file, then `RULETAP__*`
//! environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::*;
