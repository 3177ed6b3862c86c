//! Domain entities

mod event;
mod rule;

pub use event::{DiscoveredRule, RuleEvent};
pub use rule::RuleDefinition;
