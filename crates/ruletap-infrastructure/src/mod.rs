//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns around the audit core.
//!
//! ## Module Categories
//!
//! ### Configuration
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Layered TOML + environment configuration |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//! | [`sinks`] | Telemetry sink adapters |
//!
//! ### Composition
//! | Module | Description |
//! |--------|-------------|
//! | [`runtime`] | Single wired instance of every audit component |

pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;
pub mod runtime;
pub mod sinks;

// Re-export commonly used types
pub use config::{AppConfig, ConfigLoader};
pub use error_ext::ErrorContext;
pub use runtime::AuditRuntime;
