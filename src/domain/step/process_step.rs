//! ProcessStep record - per-step measurements captured on the shop floor.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{FlowMode, ProcessType, StepId};

use super::StepAnswers;

/// Maximum number of steps a step set can hold (the input form's limit).
pub const MAX_STEPS: usize = 12;

/// One process step and everything measured or answered about it.
///
/// All value fields carry `#[serde(default)]` so partially filled imports
/// deserialize with zeros (or the enum default) instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessStep {
    pub id: StepId,
    pub name: String,

    /// Cycle time in seconds.
    #[serde(default)]
    pub ct_sec: f64,

    /// Work-in-process units waiting at the step input.
    #[serde(default)]
    pub wip_units_in: f64,

    /// Defect percentage (0-100).
    #[serde(default)]
    pub defect_pct: f64,

    /// Rework percentage (0-100).
    #[serde(default)]
    pub rework_pct: f64,

    #[serde(default)]
    pub push_pull: FlowMode,

    #[serde(default)]
    pub process_type: ProcessType,

    /// Transport distance to the next step, meters.
    #[serde(default)]
    pub distance_m: f64,

    /// Number of layout hand-offs.
    #[serde(default)]
    pub layout_moves: u32,

    /// Share of time the step sits starved or blocked (0-100).
    #[serde(default)]
    pub waiting_starved_pct: f64,

    #[serde(default)]
    pub safety_incidents: u32,

    /// Unplanned downtime percentage (0-100).
    #[serde(default)]
    pub downtime_pct: f64,

    /// Changeovers per shift.
    #[serde(default)]
    pub changeover_freq: f64,

    /// Duration of one changeover, minutes.
    #[serde(default)]
    pub changeover_time_min: f64,

    #[serde(default)]
    pub operators_n: f64,

    /// Manual touch points per unit.
    #[serde(default)]
    pub touchpoints_n: f64,

    #[serde(default)]
    pub answers: StepAnswers,
}

impl ProcessStep {
    /// Creates a step seeded with the standard data-entry defaults.
    pub fn with_defaults(id: StepId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            ct_sec: 60.0,
            wip_units_in: 20.0,
            defect_pct: 1.5,
            rework_pct: 0.0,
            push_pull: FlowMode::Push,
            process_type: ProcessType::Manual,
            distance_m: 10.0,
            layout_moves: 1,
            waiting_starved_pct: 5.0,
            safety_incidents: 0,
            downtime_pct: 0.0,
            changeover_freq: 0.0,
            changeover_time_min: 0.0,
            operators_n: 0.0,
            touchpoints_n: 0.0,
            answers: StepAnswers::default(),
        }
    }
}

/// Builds the default step set "P1".."Pn", capped at [`MAX_STEPS`].
pub fn default_step_set(n: usize) -> Vec<ProcessStep> {
    (1..=n.min(MAX_STEPS))
        .map(|i| {
            let id = StepId::new(format!("P{}", i)).expect("generated step id is non-empty");
            ProcessStep::with_defaults(id, format!("Process {}", i))
        })
        .collect()
}
