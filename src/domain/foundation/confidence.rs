//! Confidence tier derived from a waste severity score.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How much trust a reader should put in an observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceTier {
    High,
    Medium,
    Low,
}

impl ConfidenceTier {
    /// Classifies a 0-5 severity score into a tier.
    ///
    /// High at 4.0 and above, Medium at 2.0 and above, Low below that.
    pub fn from_score(score: f64) -> Self {
        if score >= 4.0 {
            ConfidenceTier::High
        } else if score >= 2.0 {
            ConfidenceTier::Medium
        } else {
            ConfidenceTier::Low
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            ConfidenceTier::High => "High",
            ConfidenceTier::Medium => "Medium",
            ConfidenceTier::Low => "Low",
        }
    }
}

impl fmt::Display for ConfidenceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_score_classifies_high_at_4_and_above() {
        assert_eq!(ConfidenceTier::from_score(4.0), ConfidenceTier::High);
        assert_eq!(ConfidenceTier::from_score(5.0), ConfidenceTier::High);
    }

    #[test]
    fn from_score_classifies_medium_at_2_and_above() {
        assert_eq!(ConfidenceTier::from_score(2.0), ConfidenceTier::Medium);
        assert_eq!(ConfidenceTier::from_score(3.99), ConfidenceTier::Medium);
    }

    #[test]
    fn from_score_classifies_low_below_2() {
        assert_eq!(ConfidenceTier::from_score(0.0), ConfidenceTier::Low);
        assert_eq!(ConfidenceTier::from_score(1.99), ConfidenceTier::Low);
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(format!("{}", ConfidenceTier::High), "High");
        assert_eq!(format!("{}", ConfidenceTier::Low), "Low");
    }

    #[test]
    fn serializes_to_snake_case_json() {
        let json = serde_json::to_string(&ConfidenceTier::Medium).unwrap();
        assert_eq!(json, "\"medium\"");
    }
}
