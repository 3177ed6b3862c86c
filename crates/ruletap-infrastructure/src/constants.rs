//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Matching and rule-id constants live in `ruletap_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "ruletap.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "ruletap";

/// Environment variable prefix for configuration
///
/// Variables are read as `RULETAP__<SECTION>__<KEY>`.
pub const CONFIG_ENV_PREFIX: &str = "RULETAP";

/// Separator between prefix, section and key in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable holding an `EnvFilter` directive that overrides the configured level
pub const LOG_ENV_VAR: &str = "RULETAP_LOG";

/// File name prefix used when no stem can be derived from `file_output`
pub const DEFAULT_LOG_FILE_PREFIX: &str = "ruletap";

// ============================================================================
// TELEMETRY CONSTANTS
// ============================================================================

/// `tracing` target the tracing sink emits events on
pub const TELEMETRY_TRACING_TARGET: &str = "ruletap::telemetry";
