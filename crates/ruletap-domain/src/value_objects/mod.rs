//! Value objects: immutable values compared by content

mod category;
mod severity;
mod validation;

pub use category::RuleCategory;
pub use severity::Severity;
pub use validation::{CapturedMessage, EmitContext, ValidationResult};
