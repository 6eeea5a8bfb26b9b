//! Typed questionnaire answers attached to a process step.

use serde::{Deserialize, Serialize};

/// Observed direction of the defect rate at a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DefectTrend {
    Rising,
    Stable,
    Falling,
}

/// How often a step is starved of input or blocked downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StarvationFrequency {
    Frequent,
    Occasional,
    Rare,
}

/// Defect-related questionnaire answers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefectAnswers {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend: Option<DefectTrend>,
}

/// Waiting-related questionnaire answers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WaitingAnswers {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<StarvationFrequency>,
}

/// Free-form talent/skills notes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TalentAnswers {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Per-category questionnaire answers for a single step.
///
/// Every section is optional and snapshots omit absent sections, so a
/// step with no questionnaire input serializes to an empty object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepAnswers {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defects: Option<DefectAnswers>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub waiting: Option<WaitingAnswers>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub talent: Option<TalentAnswers>,
}

impl StepAnswers {
    /// Returns the recorded defect trend, if any.
    pub fn defect_trend(&self) -> Option<DefectTrend> {
        self.defects.as_ref().and_then(|d| d.trend)
    }

    /// Returns the recorded starvation frequency, if any.
    pub fn starvation_frequency(&self) -> Option<StarvationFrequency> {
        self.waiting.as_ref().and_then(|w| w.frequency)
    }

    /// Returns true when the talent section carries actual note content.
    ///
    /// A present-but-empty section counts as absent.
    pub fn has_talent_input(&self) -> bool {
        self.talent
            .as_ref()
            .and_then(|t| t.notes.as_ref())
            .is_some_and(|n| !n.is_empty())
    }

    /// Returns true when no section carries any answer.
    pub fn is_empty(&self) -> bool {
        self.defect_trend().is_none()
            && self.starvation_frequency().is_none()
            && !self.has_talent_input()
    }
}
