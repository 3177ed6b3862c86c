//! Rule category value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a rule, used for grouping in audit reports
///
/// Declaration order is the canonical display order; [`RuleCategory::ALL`]
/// mirrors it and is what reports iterate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleCategory {
    /// Application / duty context (environment, material handled)
    Application,
    /// Conveyor geometry (length, incline, heights)
    Geometry,
    /// Belt selection and tracking
    Belt,
    /// Pulley diameters and faces
    Pulley,
    /// Belt speed and throughput
    Speed,
    /// Motor, gearbox and drive arrangement
    Drive,
    /// Product material properties
    Material,
    /// Guarding and safety margins
    Safety,
    /// Generic parameter ranges
    Parameter,
}

impl RuleCategory {
    /// All categories in canonical display order
    pub const ALL: [RuleCategory; 9] = [
        Self::Application,
        Self::Geometry,
        Self::Belt,
        Self::Pulley,
        Self::Speed,
        Self::Drive,
        Self::Material,
        Self::Safety,
        Self::Parameter,
    ];

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Application => "Application",
            Self::Geometry => "Geometry",
            Self::Belt => "Belt",
            Self::Pulley => "Pulleys",
            Self::Speed => "Speed & Throughput",
            Self::Drive => "Drive",
            Self::Material => "Material",
            Self::Safety => "Safety",
            Self::Parameter => "Parameters",
        }
    }

    /// Snake-case key, as used in rule datasets
    pub fn key(&self) -> &'static str {
        match self {
            Self::Application => "application",
            Self::Geometry => "geometry",
            Self::Belt => "belt",
            Self::Pulley => "pulley",
            Self::Speed => "speed",
            Self::Drive => "drive",
            Self::Material => "material",
            Self::Safety => "safety",
            Self::Parameter => "parameter",
        }
    }

    /// Parse a dataset key; unknown keys yield `None`
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(key.trim()))
    }
}

impl fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
