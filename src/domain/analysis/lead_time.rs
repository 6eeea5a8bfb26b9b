//! Lead-Time Calculator - Effective cycle times, total lead time, and bottleneck.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StepId;
use crate::domain::step::ProcessStep;

/// Effective cycle time for one step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepCycleTime {
    pub ct_eff_sec: f64,
}

/// Aggregated lead-time view over an ordered step sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadTimeResult {
    /// Sum of effective cycle times, seconds.
    pub lead_time_sec: f64,
    /// Largest single effective cycle time, seconds.
    pub ct_bottleneck_sec: f64,
    pub by_step: BTreeMap<StepId, StepCycleTime>,
}

/// Lead-time aggregation over process steps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LeadTimeCalculator {
    /// Nominal available working time per shift, seconds. Carried for
    /// callers that derive takt figures; the lead-time formula itself does
    /// not consume it.
    pub available_time_sec: f64,
}

impl Default for LeadTimeCalculator {
    fn default() -> Self {
        Self {
            available_time_sec: 8.0 * 3600.0,
        }
    }
}

impl LeadTimeCalculator {
    /// Computes effective cycle times and their sum/max.
    ///
    /// # Algorithm
    /// Per step: availability = max(0.2, 1 - downtime_pct/100);
    /// ct_eff = max(0, ct_sec * (1 + waiting_starved_pct/100)) / availability.
    ///
    /// # Edge Cases
    /// - Empty sequence: zero totals and an empty per-step map
    /// - Availability floors at 0.2 even for downtime above 80%
    pub fn compute(&self, steps: &[ProcessStep]) -> LeadTimeResult {
        let mut lead_time_sec = 0.0;
        let mut ct_bottleneck_sec: f64 = 0.0;
        let mut by_step = BTreeMap::new();

        for step in steps {
            let availability = (1.0 - step.downtime_pct / 100.0).max(0.2);
            let ct_eff_sec =
                (step.ct_sec * (1.0 + step.waiting_starved_pct / 100.0)).max(0.0) / availability;

            by_step.insert(step.id.clone(), StepCycleTime { ct_eff_sec });
            lead_time_sec += ct_eff_sec;
            ct_bottleneck_sec = ct_bottleneck_sec.max(ct_eff_sec);
        }

        LeadTimeResult {
            lead_time_sec,
            ct_bottleneck_sec,
            by_step,
        }
    }
}

/// Computes lead time with the default calculator settings.
pub fn compute_lead_time(steps: &[ProcessStep]) -> LeadTimeResult {
    LeadTimeCalculator::default().compute(steps)
}
