//! Theme enum representing the PQCDSM report categories.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Waste;

/// The 6 PQCDSM report themes observations are grouped under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Production,
    Quality,
    Cost,
    Delivery,
    Safety,
    Morale,
}

impl Theme {
    /// Returns all themes in the fixed P, Q, C, D, S, M report order.
    pub fn all() -> &'static [Theme] {
        &[
            Theme::Production,
            Theme::Quality,
            Theme::Cost,
            Theme::Delivery,
            Theme::Safety,
            Theme::Morale,
        ]
    }

    /// Returns the theme a waste category is reported under.
    pub fn for_waste(waste: Waste) -> Theme {
        match waste {
            Waste::Overproduction
            | Waste::Overprocessing
            | Waste::Motion
            | Waste::Transportation => Theme::Production,
            Waste::Defects => Theme::Quality,
            Waste::Inventory => Theme::Cost,
            Waste::Waiting => Theme::Delivery,
            Waste::Safety => Theme::Safety,
            Waste::Talent => Theme::Morale,
        }
    }

    /// Returns the single-letter theme code used in entry references.
    pub fn code(&self) -> &'static str {
        match self {
            Theme::Production => "P",
            Theme::Quality => "Q",
            Theme::Cost => "C",
            Theme::Delivery => "D",
            Theme::Safety => "S",
            Theme::Morale => "M",
        }
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Production => "Production",
            Theme::Quality => "Quality",
            Theme::Cost => "Cost",
            Theme::Delivery => "Delivery",
            Theme::Safety => "Safety",
            Theme::Morale => "Morale",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
