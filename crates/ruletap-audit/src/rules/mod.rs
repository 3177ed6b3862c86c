//! Rule Registry System
//!
//! The static catalogue of known rules, the runtime registry of
//! auto-discovered ones, and YAML loading for external datasets.

pub mod catalog;
pub mod discovered;
pub mod registry;
pub mod yaml_loader;

pub use discovered::DiscoveredRuleRegistry;
pub use registry::RuleRegistry;
pub use yaml_loader::YamlRuleLoader;
