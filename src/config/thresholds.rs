//! Waste scoring thresholds

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Named "high" reference levels the waste scorer scales raw measurements by.
///
/// Most formulas divide a measurement by `threshold/3`, so a measurement
/// equal to the threshold lands at 3.0 on the severity scale and anything
/// past three times the threshold saturates at 5.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WasteThresholds {
    /// Defect percentage considered high
    #[serde(default = "default_defects_pct_high")]
    pub defects_pct_high: f64,

    /// Waiting/downtime percentage considered high
    #[serde(default = "default_waiting_pct_high")]
    pub waiting_pct_high: f64,

    /// WIP unit count considered high
    #[serde(default = "default_inventory_wip_high")]
    pub inventory_wip_high: f64,

    /// Transport distance in meters considered high
    #[serde(default = "default_transport_distance_high_m")]
    pub transport_distance_high_m: f64,

    /// Touch-point count considered high
    #[serde(default = "default_touchpoints_high")]
    pub touchpoints_high: f64,

    /// Rework percentage considered high
    #[serde(default = "default_rework_pct_high")]
    pub rework_pct_high: f64,

    /// Changeover duration in minutes considered high
    #[serde(default = "default_changeover_time_high_min")]
    pub changeover_time_high_min: f64,

    /// Incident count at which safety severity saturates
    #[serde(default = "default_safety_incidents_high")]
    pub safety_incidents_high: u32,
}

impl WasteThresholds {
    /// Validate that every threshold used as a divisor is positive
    pub fn validate(&self) -> Result<(), ValidationError> {
        let divisors = [
            ("defects_pct_high", self.defects_pct_high),
            ("waiting_pct_high", self.waiting_pct_high),
            ("inventory_wip_high", self.inventory_wip_high),
            ("transport_distance_high_m", self.transport_distance_high_m),
            ("touchpoints_high", self.touchpoints_high),
            ("rework_pct_high", self.rework_pct_high),
            ("changeover_time_high_min", self.changeover_time_high_min),
        ];
        for (field, value) in divisors {
            if value <= 0.0 {
                return Err(ValidationError::non_positive_threshold(field, value));
            }
        }
        Ok(())
    }
}

impl Default for WasteThresholds {
    fn default() -> Self {
        Self {
            defects_pct_high: default_defects_pct_high(),
            waiting_pct_high: default_waiting_pct_high(),
            inventory_wip_high: default_inventory_wip_high(),
            transport_distance_high_m: default_transport_distance_high_m(),
            touchpoints_high: default_touchpoints_high(),
            rework_pct_high: default_rework_pct_high(),
            changeover_time_high_min: default_changeover_time_high_min(),
            safety_incidents_high: default_safety_incidents_high(),
        }
    }
}

fn default_defects_pct_high() -> f64 {
    3.0
}

fn default_waiting_pct_high() -> f64 {
    10.0
}

fn default_inventory_wip_high() -> f64 {
    30.0
}

fn default_transport_distance_high_m() -> f64 {
    30.0
}

fn default_touchpoints_high() -> f64 {
    6.0
}

fn default_rework_pct_high() -> f64 {
    2.0
}

fn default_changeover_time_high_min() -> f64 {
    30.0
}

fn default_safety_incidents_high() -> u32 {
    1
}
