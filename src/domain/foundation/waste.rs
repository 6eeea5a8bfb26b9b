//! Waste enum representing the 9 Lean waste categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The 9 Lean waste categories scored by the engine.
///
/// Declaration order is the canonical scoring order, which also drives
/// `Ord` and therefore iteration order of `BTreeMap<Waste, _>` results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Waste {
    Defects,
    Waiting,
    Inventory,
    Transportation,
    Motion,
    Overprocessing,
    Overproduction,
    Talent,
    Safety,
}

impl Waste {
    /// Returns all waste categories in canonical scoring order.
    pub fn all() -> &'static [Waste] {
        &[
            Waste::Defects,
            Waste::Waiting,
            Waste::Inventory,
            Waste::Transportation,
            Waste::Motion,
            Waste::Overprocessing,
            Waste::Overproduction,
            Waste::Talent,
            Waste::Safety,
        ]
    }

    /// Returns the lowercase key used in narratives and serialized maps.
    pub fn key(&self) -> &'static str {
        match self {
            Waste::Defects => "defects",
            Waste::Waiting => "waiting",
            Waste::Inventory => "inventory",
            Waste::Transportation => "transportation",
            Waste::Motion => "motion",
            Waste::Overprocessing => "overprocessing",
            Waste::Overproduction => "overproduction",
            Waste::Talent => "talent",
            Waste::Safety => "safety",
        }
    }

    /// Returns the title-case label for report tables.
    pub fn label(&self) -> &'static str {
        match self {
            Waste::Defects => "Defects",
            Waste::Waiting => "Waiting",
            Waste::Inventory => "Inventory",
            Waste::Transportation => "Transportation",
            Waste::Motion => "Motion",
            Waste::Overprocessing => "Overprocessing",
            Waste::Overproduction => "Overproduction",
            Waste::Talent => "Talent",
            Waste::Safety => "Safety",
        }
    }
}

impl fmt::Display for Waste {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}
