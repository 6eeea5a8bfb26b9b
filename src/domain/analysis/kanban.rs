//! Kanban Sizing - Card-count recommendation for a pull loop.

use serde::{Deserialize, Serialize};

/// Inputs for sizing a Kanban loop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KanbanParams {
    pub daily_demand_units: f64,
    pub replenishment_lead_time_days: f64,
    /// Extra coverage as a fraction, e.g. 0.2 for 20%.
    pub safety_factor: f64,
    pub container_size_units: f64,
}

impl Default for KanbanParams {
    fn default() -> Self {
        Self {
            daily_demand_units: 0.0,
            replenishment_lead_time_days: 0.0,
            safety_factor: 0.2,
            container_size_units: 50.0,
        }
    }
}

impl KanbanParams {
    /// Recommended card count: `ceil(demand * lead_time * (1 + safety) / container)`,
    /// never below one card.
    ///
    /// # Edge Cases
    /// - Container size of zero or less recommends a single card rather
    ///   than dividing by zero
    pub fn recommended_cards(&self) -> u32 {
        if self.container_size_units <= 0.0 {
            return 1;
        }
        let need = self.daily_demand_units
            * self.replenishment_lead_time_days
            * (1.0 + self.safety_factor);
        (need / self.container_size_units).ceil().max(1.0) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_a_standard_loop() {
        let params = KanbanParams {
            daily_demand_units: 500.0,
            replenishment_lead_time_days: 2.0,
            safety_factor: 0.2,
            container_size_units: 50.0,
        };
        // 500 * 2 * 1.2 / 50 = 24
        assert_eq!(params.recommended_cards(), 24);
    }

    #[test]
    fn rounds_partial_containers_up() {
        let params = KanbanParams {
            daily_demand_units: 101.0,
            replenishment_lead_time_days: 1.0,
            safety_factor: 0.0,
            container_size_units: 50.0,
        };
        assert_eq!(params.recommended_cards(), 3);
    }

    #[test]
    fn never_recommends_fewer_than_one_card() {
        assert_eq!(KanbanParams::default().recommended_cards(), 1);
    }

    #[test]
    fn zero_container_size_falls_back_to_one_card() {
        let params = KanbanParams {
            daily_demand_units: 500.0,
            replenishment_lead_time_days: 2.0,
            safety_factor: 0.2,
            container_size_units: 0.0,
        };
        assert_eq!(params.recommended_cards(), 1);
    }
}
