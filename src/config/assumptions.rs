//! Business-case cost assumptions

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Global cost figures the savings estimator falls back on when a
/// questionnaire follow-up left the corresponding value blank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostAssumptions {
    /// Fully loaded labor cost per hour
    #[serde(default = "default_labor_cost_per_hour")]
    pub labor_cost_per_hour: f64,

    /// Material cost per unit produced
    #[serde(default = "default_material_cost_per_unit")]
    pub material_cost_per_unit: f64,

    /// Rework time per defective unit in minutes
    #[serde(default = "default_rework_time_min_per_unit")]
    pub rework_time_min_per_unit: f64,

    /// Forklift operating cost per hour
    #[serde(default = "default_forklift_cost_per_hour")]
    pub forklift_cost_per_hour: f64,

    /// Annual capital carrying rate as a percentage
    #[serde(default = "default_cost_of_capital_pct")]
    pub cost_of_capital_pct: f64,

    /// Monthly production volume in units
    #[serde(default = "default_avg_monthly_volume_units")]
    pub avg_monthly_volume_units: f64,
}

impl CostAssumptions {
    /// Validate that no assumption is negative
    pub fn validate(&self) -> Result<(), ValidationError> {
        let fields = [
            ("labor_cost_per_hour", self.labor_cost_per_hour),
            ("material_cost_per_unit", self.material_cost_per_unit),
            ("rework_time_min_per_unit", self.rework_time_min_per_unit),
            ("forklift_cost_per_hour", self.forklift_cost_per_hour),
            ("cost_of_capital_pct", self.cost_of_capital_pct),
            ("avg_monthly_volume_units", self.avg_monthly_volume_units),
        ];
        for (field, value) in fields {
            if value < 0.0 {
                return Err(ValidationError::negative_value(field, value));
            }
        }
        Ok(())
    }
}

impl Default for CostAssumptions {
    fn default() -> Self {
        Self {
            labor_cost_per_hour: default_labor_cost_per_hour(),
            material_cost_per_unit: default_material_cost_per_unit(),
            rework_time_min_per_unit: default_rework_time_min_per_unit(),
            forklift_cost_per_hour: default_forklift_cost_per_hour(),
            cost_of_capital_pct: default_cost_of_capital_pct(),
            avg_monthly_volume_units: default_avg_monthly_volume_units(),
        }
    }
}

fn default_labor_cost_per_hour() -> f64 {
    50.0
}

fn default_material_cost_per_unit() -> f64 {
    100.0
}

fn default_rework_time_min_per_unit() -> f64 {
    10.0
}

fn default_forklift_cost_per_hour() -> f64 {
    120.0
}

fn default_cost_of_capital_pct() -> f64 {
    12.0
}

fn default_avg_monthly_volume_units() -> f64 {
    10_000.0
}
