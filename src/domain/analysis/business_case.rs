//! Business-Case Estimator - Annual savings from stage priorities and follow-up figures.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::CostAssumptions;
use crate::domain::foundation::Waste;

use super::{FollowupValue, StageResponses, StageSummary, ValueChainResponses};

/// Estimated annual savings per waste category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsEstimate {
    /// Every category is present; talent stays 0 (no savings rule).
    pub by_waste: BTreeMap<Waste, f64>,
    pub total: f64,
}

impl SavingsEstimate {
    pub fn for_waste(&self, waste: Waste) -> f64 {
        self.by_waste.get(&waste).copied().unwrap_or(0.0)
    }
}

/// Savings estimation functions.
pub struct BusinessCaseEstimator;

impl BusinessCaseEstimator {
    /// Estimates annual savings from the ranked stage summaries.
    ///
    /// Each stage contributes through the wastes in its top-3. Follow-up
    /// figures gate most rules; a stage missing a required figure simply
    /// skips that rule, which biases the estimate low rather than guessing.
    /// The operator count from the `changeover_time` follow-up also feeds
    /// the motion rule, and the finished-goods value from `aging_fg` also
    /// feeds overproduction.
    pub fn estimate(
        summaries: &[StageSummary],
        responses: &ValueChainResponses,
        assumptions: &CostAssumptions,
    ) -> SavingsEstimate {
        let mut by_waste: BTreeMap<Waste, f64> =
            Waste::all().iter().map(|&waste| (waste, 0.0)).collect();

        for summary in summaries {
            let stage = responses.stage(&summary.stage_id);

            let defects_score = top3_score(summary, Waste::Defects);
            if defects_score > 0.0 {
                let unit_cost = followup_number(
                    stage,
                    "first_pass_yield",
                    "unit_material_cost",
                    assumptions.material_cost_per_unit,
                );
                let rework_min = followup_number(
                    stage,
                    "first_pass_yield",
                    "rework_time_min",
                    assumptions.rework_time_min_per_unit,
                );
                let monthly_units = followup_number(
                    stage,
                    "first_pass_yield",
                    "monthly_volume_units",
                    assumptions.avg_monthly_volume_units,
                );
                let defect_rate = 0.1 * severity_fraction(defects_score);
                let annual_defect_units = monthly_units * 12.0 * defect_rate;
                // The 0.5 models partial preventability.
                let saving = annual_defect_units
                    * (unit_cost + (rework_min / 60.0) * assumptions.labor_cost_per_hour)
                    * 0.5;
                *by_waste.entry(Waste::Defects).or_insert(0.0) += saving;
            }

            let waiting_score = top3_score(summary, Waste::Waiting);
            let operators = followup_number(stage, "changeover_time", "operators_n", 0.0);
            let changeovers_per_month =
                followup_number(stage, "changeover_time", "changeovers_per_month", 0.0);
            if waiting_score > 0.0 && operators > 0.0 && changeovers_per_month > 0.0 {
                let avoided_min = 30.0 * severity_fraction(waiting_score);
                let saving = (avoided_min / 60.0)
                    * operators
                    * changeovers_per_month
                    * 12.0
                    * assumptions.labor_cost_per_hour;
                *by_waste.entry(Waste::Waiting).or_insert(0.0) += saving;
                // Changeover waste is shared with overprocessing.
                *by_waste.entry(Waste::Overprocessing).or_insert(0.0) += 0.2 * saving;
            }

            let inventory_score = top3_score(summary, Waste::Inventory);
            let avg_fg_value = followup_number(stage, "aging_fg", "avg_fg_value", 0.0);
            let finance_rate_pct = followup_number(
                stage,
                "aging_fg",
                "finance_rate_pct",
                assumptions.cost_of_capital_pct,
            );
            if inventory_score > 0.0 && avg_fg_value > 0.0 {
                let released = avg_fg_value * 0.2 * severity_fraction(inventory_score);
                *by_waste.entry(Waste::Inventory).or_insert(0.0) +=
                    released * finance_rate_pct / 100.0;
            }

            let transportation_score = top3_score(summary, Waste::Transportation);
            let loads_per_day = followup_number(stage, "loading_time", "loads_per_day", 0.0);
            let forklift_rate = followup_number(
                stage,
                "loading_time",
                "forklift_cost_per_hour",
                assumptions.forklift_cost_per_hour,
            );
            if transportation_score > 0.0 && loads_per_day > 0.0 {
                let avoided_min = 10.0 * severity_fraction(transportation_score);
                // 300 working days a year.
                let saving = (avoided_min / 60.0) * loads_per_day * 300.0 * forklift_rate;
                *by_waste.entry(Waste::Transportation).or_insert(0.0) += saving;
            }

            let motion_score = top3_score(summary, Waste::Motion);
            if motion_score > 0.0 && operators > 0.0 {
                // 200 hours a year as a handling-time proxy.
                let saving = operators
                    * assumptions.labor_cost_per_hour
                    * 200.0
                    * 0.1
                    * severity_fraction(motion_score);
                *by_waste.entry(Waste::Motion).or_insert(0.0) += saving;
            }

            let overproduction_score = top3_score(summary, Waste::Overproduction);
            if overproduction_score > 0.0 && avg_fg_value > 0.0 {
                *by_waste.entry(Waste::Overproduction).or_insert(0.0) +=
                    avg_fg_value * 0.05 * severity_fraction(overproduction_score);
            }

            let safety_score = top3_score(summary, Waste::Safety);
            if safety_score > 0.0 {
                *by_waste.entry(Waste::Safety).or_insert(0.0) +=
                    20_000.0 * severity_fraction(safety_score);
            }
        }

        let total = by_waste.values().sum();
        tracing::debug!(stages = summaries.len(), total, "Estimated business case");
        SavingsEstimate { by_waste, total }
    }
}

fn top3_score(summary: &StageSummary, waste: Waste) -> f64 {
    summary
        .top3()
        .iter()
        .find(|entry| entry.waste == waste)
        .map(|entry| entry.score.value())
        .unwrap_or(0.0)
}

fn severity_fraction(score: f64) -> f64 {
    (score / 5.0).clamp(0.0, 1.0)
}

fn followup_number(
    stage: Option<&StageResponses>,
    question: &str,
    field: &str,
    fallback: f64,
) -> f64 {
    stage
        .and_then(|responses| responses.followups.get(question))
        .and_then(|values| values.get(field))
        .and_then(FollowupValue::as_number)
        .filter(|value| *value != 0.0)
        .unwrap_or(fallback)
}
