//! Evidence classification for observation rows.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What an observation rests on: direct metrics, metrics plus questionnaire
/// input, or questionnaire/heuristics alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Evidence {
    Measured,
    Mixed,
    Inferred,
}

impl Evidence {
    /// Classifies from the primary-signal flag and the questionnaire delta.
    ///
    /// Mixed requires both a nonzero measured signal and a positive
    /// questionnaire delta; a delta on its own still reads as Inferred.
    pub fn classify(primary_signal: bool, questionnaire_delta: f64) -> Self {
        if primary_signal && questionnaire_delta > 0.0 {
            Evidence::Mixed
        } else if primary_signal {
            Evidence::Measured
        } else {
            Evidence::Inferred
        }
    }

    /// Returns the single-glyph marker shown in report tables.
    pub fn marker(&self) -> &'static str {
        match self {
            Evidence::Measured => "●",
            Evidence::Mixed => "◐",
            Evidence::Inferred => "○",
        }
    }

    /// Returns the tooltip note explaining the classification.
    pub fn note(&self) -> &'static str {
        match self {
            Evidence::Measured => "Measured: direct metrics",
            Evidence::Mixed => "Mixed: metrics + questionnaire",
            Evidence::Inferred => "Inferred: questionnaire/heuristics",
        }
    }
}

impl fmt::Display for Evidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Evidence::Measured => "Measured",
            Evidence::Mixed => "Mixed",
            Evidence::Inferred => "Inferred",
        };
        write!(f, "{}", s)
    }
}
