//! Observation Builder - Structured narrative records for non-zero waste scores.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ConfidenceTier, Severity, StepId, Waste};
use crate::domain::step::ProcessStep;

use super::{QuestionnaireResolver, WasteScorecard};

/// A single waste finding at a step, ready for report consumption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub step_id: StepId,
    pub step_name: String,
    pub waste: Waste,
    pub score: Severity,
    /// Risk-priority percentage, `score/5*100` capped at 100.
    pub rpn_pct: f64,
    pub confidence: ConfidenceTier,
    pub narrative: String,
}

/// Observation assembly functions.
pub struct ObservationBuilder;

impl ObservationBuilder {
    /// Builds the observation for one waste category at one step.
    ///
    /// The narrative strings together an opening sentence naming the step
    /// and score, a category-specific detail sentence, and any
    /// questionnaire snippets joined with "; ".
    ///
    /// # Edge Cases
    /// - Returns `None` iff the score is zero (clamping rules out negatives)
    /// - Talent has no detail sentence, only the opening
    pub fn build(
        step: &ProcessStep,
        waste: Waste,
        scorecard: &WasteScorecard,
    ) -> Option<Observation> {
        let score = scorecard.score(waste);
        if score.is_zero() {
            return None;
        }

        let mut parts = vec![format!(
            "At {} ({}), {} was detected with score {:.1}.",
            step.name,
            step.id,
            waste,
            score.value()
        )];
        if let Some(detail) = Self::detail_sentence(step, waste) {
            parts.push(detail);
        }
        let effect = QuestionnaireResolver::effect_for(waste, step);
        if !effect.snippets.is_empty() {
            parts.push(effect.snippets.join("; "));
        }

        Some(Observation {
            step_id: step.id.clone(),
            step_name: step.name.clone(),
            waste,
            score,
            rpn_pct: score.rpn_pct(),
            confidence: ConfidenceTier::from_score(score.value()),
            narrative: parts.join(" "),
        })
    }

    fn detail_sentence(step: &ProcessStep, waste: Waste) -> Option<String> {
        let detail = match waste {
            Waste::Defects => format!(
                "Defect {:.1}%, rework {:.1}%.",
                step.defect_pct, step.rework_pct
            ),
            Waste::Waiting => format!(
                "Waiting/downtime ~{:.1}% of time.",
                step.waiting_starved_pct + step.downtime_pct
            ),
            Waste::Inventory => format!("WIP {:.0} units.", step.wip_units_in),
            Waste::Transportation => format!(
                "Distance {:.0} m, hand-offs {}, touch-points {:.0}.",
                step.distance_m, step.layout_moves, step.touchpoints_n
            ),
            Waste::Motion => format!(
                "Process: {}, touch-points {:.0}.",
                step.process_type, step.touchpoints_n
            ),
            Waste::Overprocessing => format!(
                "Rework {:.1}%, changeover {:.0} min × {:.1}/shift.",
                step.rework_pct, step.changeover_time_min, step.changeover_freq
            ),
            Waste::Overproduction => {
                format!("Flow mode is {}; consider CONWIP/Kanban.", step.push_pull)
            }
            Waste::Safety => format!("Incidents: {}.", step.safety_incidents),
            Waste::Talent => return None,
        };
        Some(detail)
    }
}
