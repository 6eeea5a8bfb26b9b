//! Observation table - Cross product of steps and wastes with evidence classification.

use serde::{Deserialize, Serialize};

use crate::config::AssessmentTemplates;
use crate::domain::foundation::{Evidence, Waste};
use crate::domain::step::ProcessStep;

use super::{Observation, ObservationBuilder, WasteScorer};

/// One observation extended with its evidence columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationRow {
    #[serde(flatten)]
    pub observation: Observation,
    pub evidence: Evidence,
    pub evidence_marker: String,
    pub evidence_note: String,
}

impl ObservationRow {
    /// Creates a row, filling the marker glyph and tooltip from the evidence.
    pub fn new(observation: Observation, evidence: Evidence) -> Self {
        Self {
            observation,
            evidence,
            evidence_marker: evidence.marker().to_string(),
            evidence_note: evidence.note().to_string(),
        }
    }
}

/// Builds the full observation table.
///
/// Every step is crossed with every waste category, zero scores are
/// dropped, each surviving observation is classified by evidence, and the
/// table is stable-sorted descending by (RPN, score). Ties keep the
/// generation order: step order first, then canonical category order.
pub fn build_observation_table(
    steps: &[ProcessStep],
    templates: &AssessmentTemplates,
) -> Vec<ObservationRow> {
    let mut rows = Vec::new();

    for step in steps {
        let scorecard = WasteScorer::score(step, &templates.thresholds);
        for &waste in Waste::all() {
            if let Some(observation) = ObservationBuilder::build(step, waste, &scorecard) {
                let evidence = Evidence::classify(
                    primary_signal(step, waste),
                    scorecard.questionnaire_delta(waste),
                );
                rows.push(ObservationRow::new(observation, evidence));
            }
        }
    }

    rows.sort_by(|a, b| {
        b.observation
            .rpn_pct
            .total_cmp(&a.observation.rpn_pct)
            .then_with(|| {
                b.observation
                    .score
                    .value()
                    .total_cmp(&a.observation.score.value())
            })
    });

    tracing::debug!(
        steps = steps.len(),
        rows = rows.len(),
        "Assembled observation table"
    );
    rows
}

/// Whether the step has a direct measured signal for the waste category.
fn primary_signal(step: &ProcessStep, waste: Waste) -> bool {
    match waste {
        Waste::Defects => step.defect_pct > 0.0,
        Waste::Waiting => step.waiting_starved_pct > 0.0,
        Waste::Inventory => step.wip_units_in > 0.0,
        Waste::Transportation => step.distance_m > 0.0 || step.layout_moves > 0,
        Waste::Motion => true,
        Waste::Overprocessing => step.rework_pct > 0.0,
        Waste::Overproduction => true,
        Waste::Talent => false,
        Waste::Safety => step.safety_incidents > 0,
    }
}
