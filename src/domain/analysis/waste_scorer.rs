//! Waste Scorer - Heuristic 0-5 severity per waste category for one step.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::WasteThresholds;
use crate::domain::foundation::{Severity, Waste};
use crate::domain::step::ProcessStep;

use super::{QuestionnaireEffect, QuestionnaireResolver};

/// Severity scores for all nine waste categories at one step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WasteScorecard {
    /// Clamped severity per category.
    pub scores: BTreeMap<Waste, Severity>,
    /// Questionnaire delta applied per category.
    pub deltas: BTreeMap<Waste, f64>,
}

impl WasteScorecard {
    /// Score for one category, zero if absent.
    pub fn score(&self, waste: Waste) -> Severity {
        self.scores.get(&waste).copied().unwrap_or_default()
    }

    /// Questionnaire delta applied to one category.
    pub fn questionnaire_delta(&self, waste: Waste) -> f64 {
        self.deltas.get(&waste).copied().unwrap_or(0.0)
    }

    /// The `n` highest-scoring categories with a score above zero.
    ///
    /// Ties keep the canonical category order.
    pub fn top_wastes(&self, n: usize) -> Vec<(Waste, Severity)> {
        let mut ranked: Vec<(Waste, Severity)> = self
            .scores
            .iter()
            .filter(|(_, severity)| !severity.is_zero())
            .map(|(&waste, &severity)| (waste, severity))
            .collect();
        ranked.sort_by(|a, b| b.1.value().total_cmp(&a.1.value()));
        ranked.truncate(n);
        ranked
    }
}

/// Waste severity scoring functions.
pub struct WasteScorer;

impl WasteScorer {
    /// Computes the scorecard for one step against the configured thresholds.
    ///
    /// # Algorithm
    /// Per category: raw = measured load / (threshold/3), pre-clamped to 5.0;
    /// then the questionnaire delta is added and the sum clamped to [0,5].
    ///
    /// # Edge Cases
    /// - defect_pct of 0 scores 0 before the delta, not the divisor floor
    /// - The manual-handling bump lands after the motion pre-clamp, so the
    ///   pre-delta motion value can reach 6.0
    /// - Divisor thresholds are validated positive at config load
    pub fn score(step: &ProcessStep, thresholds: &WasteThresholds) -> WasteScorecard {
        let mut scores = BTreeMap::new();
        let mut deltas = BTreeMap::new();

        for &waste in Waste::all() {
            let raw = Self::raw_score(step, thresholds, waste);
            let QuestionnaireEffect { delta, .. } =
                QuestionnaireResolver::effect_for(waste, step);
            scores.insert(waste, Severity::new(raw + delta));
            deltas.insert(waste, delta);
        }

        WasteScorecard { scores, deltas }
    }

    fn raw_score(step: &ProcessStep, th: &WasteThresholds, waste: Waste) -> f64 {
        match waste {
            Waste::Defects => {
                if step.defect_pct > 0.0 {
                    (step.defect_pct / (th.defects_pct_high / 3.0)).min(5.0)
                } else {
                    0.0
                }
            }
            Waste::Waiting => ((step.waiting_starved_pct + step.downtime_pct / 2.0)
                / (th.waiting_pct_high / 3.0))
                .min(5.0),
            Waste::Inventory => (step.wip_units_in / (th.inventory_wip_high / 3.0)).min(5.0),
            Waste::Transportation => {
                let load = step.distance_m
                    + f64::from(step.layout_moves) * 10.0
                    + step.touchpoints_n * 5.0;
                (load / (th.transport_distance_high_m / 3.0)).min(5.0)
            }
            Waste::Motion => {
                let handling = (step.touchpoints_n / (th.touchpoints_high / 3.0)).min(5.0);
                let bump = if step.process_type.is_manual() { 1.0 } else { 0.3 };
                handling + bump
            }
            Waste::Overprocessing => {
                // Changeover minutes normalize by the full threshold, not threshold/3.
                let load =
                    step.rework_pct + step.changeover_time_min / th.changeover_time_high_min;
                (load / (th.rework_pct_high / 3.0)).min(5.0)
            }
            Waste::Overproduction => {
                if step.push_pull.is_push() {
                    2.0
                } else {
                    0.5
                }
            }
            Waste::Talent => {
                if step.answers.has_talent_input() {
                    1.0
                } else {
                    0.5
                }
            }
            Waste::Safety => {
                if step.safety_incidents >= th.safety_incidents_high {
                    5.0
                } else if step.safety_incidents > 0 {
                    1.0
                } else {
                    0.2
                }
            }
        }
    }
}
