//! Domain layer constants
//!
//! Values here are part of observable behavior: the matching score policy
//! and the auto-discovered rule id format both depend on them.

// ============================================================================
// MATCHING CONSTANTS
// ============================================================================

/// Score awarded when a definition's explicit `message_match` substring is found
pub const MESSAGE_MATCH_SCORE: u32 = 1000;

/// Base score for any field + severity match
pub const FIELD_SEVERITY_BASE_SCORE: u32 = 1;

/// Words must be longer than this to count towards keyword overlap
pub const KEYWORD_MIN_LEN_EXCLUSIVE: usize = 2;

// ============================================================================
// TELEMETRY CONSTANTS
// ============================================================================

/// Default number of events retained by the telemetry buffer
pub const TELEMETRY_BUFFER_CAPACITY: usize = 200;

/// Prefix of generated rule ids
pub const AUTO_RULE_ID_PREFIX: &str = "auto";

/// Characters of message text used when deriving a rule id
pub const AUTO_RULE_ID_MESSAGE_PREFIX_LEN: usize = 40;

/// Maximum length of a generated rule id
pub const AUTO_RULE_ID_MAX_LEN: usize = 96;

/// Placeholder used when the source reference sanitizes to nothing
pub const UNKNOWN_SOURCE_REF: &str = "unknown";
