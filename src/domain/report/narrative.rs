//! Material-Flow Narrative - One-paragraph walk of the observed flow.

use crate::domain::assessment::AssessmentMeta;
use crate::domain::step::ProcessStep;

/// Narrative assembly functions.
pub struct NarrativeBuilder;

impl NarrativeBuilder {
    /// Builds the material-flow paragraph for the report front section.
    ///
    /// Each step contributes one sentence with its cycle time, move
    /// distance, incoming WIP, and changeover time, all truncated to whole
    /// numbers. Steps that move material over a distance are "transported",
    /// the rest are "transferred". The meta's cost and sales figures are
    /// already-formatted text, so placeholders like `[cost]` pass through
    /// untouched.
    pub fn material_flow(steps: &[ProcessStep], meta: &AssessmentMeta) -> String {
        let body = steps
            .iter()
            .map(step_sentence)
            .collect::<Vec<_>>()
            .join(" ");
        format!(
            "Material Flow was observed within {}. {body} Handling and changeovers \
             cost ~{} in {}, with lost sales opportunities ~{}.",
            meta.factory_name, meta.est_cost, meta.report_year, meta.est_sales
        )
    }
}

fn step_sentence(step: &ProcessStep) -> String {
    let verb = if step.distance_m > 0.0 {
        "transported"
    } else {
        "transferred"
    };
    format!(
        "{} ({}) CT≈{}s; {} ~{}m; WIP {}; changeover {}m.",
        step.name,
        step.id,
        step.ct_sec as i64,
        verb,
        step.distance_m as i64,
        step.wip_units_in as i64,
        step.changeover_time_min as i64,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::StepId;

    fn step(id: &str, name: &str) -> ProcessStep {
        ProcessStep::with_defaults(StepId::new(id).unwrap(), name)
    }

    fn meta() -> AssessmentMeta {
        AssessmentMeta {
            factory_name: "Plant A".to_string(),
            report_year: "2025".to_string(),
            est_cost: "[cost]".to_string(),
            est_sales: "[sales_opportunity]".to_string(),
        }
    }

    #[test]
    fn walks_each_step_in_order() {
        let mut cutting = step("P1", "Cutting");
        cutting.ct_sec = 62.7;
        cutting.distance_m = 12.9;
        cutting.wip_units_in = 30.4;
        cutting.changeover_time_min = 15.9;

        let narrative = NarrativeBuilder::material_flow(&[cutting], &meta());

        assert_eq!(
            narrative,
            "Material Flow was observed within Plant A. \
             Cutting (P1) CT≈62s; transported ~12m; WIP 30; changeover 15m. \
             Handling and changeovers cost ~[cost] in 2025, \
             with lost sales opportunities ~[sales_opportunity]."
        );
    }

    #[test]
    fn fractions_truncate_rather_than_round() {
        let mut s = step("P1", "Welding");
        s.ct_sec = 99.9;
        s.distance_m = 0.9;

        let narrative = NarrativeBuilder::material_flow(&[s], &meta());
        assert!(narrative.contains("CT≈99s"));
        // 0.9 m truncates to 0 but still counts as a transport.
        assert!(narrative.contains("transported ~0m"));
    }

    #[test]
    fn zero_distance_steps_are_transferred() {
        let mut s = step("P1", "Assembly");
        s.distance_m = 0.0;
        let narrative = NarrativeBuilder::material_flow(&[s], &meta());
        assert!(narrative.contains("transferred ~0m"));
        assert!(!narrative.contains("transported"));
    }

    #[test]
    fn joins_multiple_steps_with_spaces() {
        let steps = vec![step("P1", "Cutting"), step("P2", "Welding")];
        let narrative = NarrativeBuilder::material_flow(&steps, &meta());
        assert!(narrative.contains("Cutting (P1)"));
        assert!(narrative.contains(". Welding (P2)"));
    }
}
