//! Edge Calculator - Benchmark-relative multipliers for waste prioritization.

use std::collections::BTreeMap;

use crate::config::{PrioritizationConfig, ProfileCatalog};
use crate::domain::foundation::Waste;

/// Benchmark comparison functions.
///
/// Each prioritization metric maps one waste to one benchmark key. The
/// multiplier nudges that waste's priority relative to the chosen industry
/// profile without ever dominating the underlying score.
pub struct EdgeCalculator;

impl EdgeCalculator {
    /// Computes an edge multiplier per configured waste.
    ///
    /// # Algorithm
    /// - Ratio vs. target: `value / target` for higher-is-better metrics,
    ///   `target / max(value, 1e-6)` otherwise
    /// - Factor `1 + ln(ratio)` with the log clamped to ±0.4, then the
    ///   factor to [0.7, 1.3]
    /// - With at least 5 history points, a value in the bad half of its own
    ///   history earns up to a further +10%
    /// - Final clamp to [0.7, 1.4]
    ///
    /// # Edge Cases
    /// - Unknown profile id: every configured waste gets 1.0
    /// - Metric missing from the profile or the measured set: 1.0
    /// - Non-positive ratio: treated as 1e-6 before the log
    pub fn compute(
        prioritization: &PrioritizationConfig,
        profiles: &ProfileCatalog,
        profile_id: &str,
        measured: &BTreeMap<String, f64>,
        history: &BTreeMap<String, Vec<f64>>,
    ) -> BTreeMap<Waste, f64> {
        let Some(profile) = profiles.get(profile_id) else {
            tracing::debug!(profile_id, "Unknown benchmark profile, multipliers stay neutral");
            return prioritization
                .edge_metrics
                .keys()
                .map(|&waste| (waste, 1.0))
                .collect();
        };

        let mut multipliers = BTreeMap::new();
        for (&waste, metric) in &prioritization.edge_metrics {
            let target = profile.benchmarks.get(&metric.key).copied();
            let value = measured.get(&metric.key).copied();
            let (Some(target), Some(value)) = (target, value) else {
                multipliers.insert(waste, 1.0);
                continue;
            };

            let ratio = if metric.higher_is_better {
                value / target
            } else {
                target / value.max(1e-6)
            };
            let mut factor = edge_factor_from_ratio(ratio);

            if let Some(points) = history.get(&metric.key).filter(|points| points.len() >= 5) {
                let mut sorted = points.clone();
                sorted.sort_by(f64::total_cmp);
                let below = sorted.partition_point(|point| *point < value);
                let mut percentile = below as f64 / sorted.len() as f64;
                if !metric.higher_is_better {
                    percentile = 1.0 - percentile;
                }
                // A value in the bad half of its history earns up to +10%.
                factor *= 1.0 + (0.2 * (0.5 - percentile)).max(0.0);
            }

            multipliers.insert(waste, factor.clamp(0.7, 1.4));
        }

        tracing::debug!(
            profile_id,
            metrics = multipliers.len(),
            "Computed edge multipliers"
        );
        multipliers
    }
}

/// Converts a ratio vs. target into a gentle multiplier around 1.0.
fn edge_factor_from_ratio(ratio: f64) -> f64 {
    let safe = if ratio > 0.0 { ratio } else { 1e-6 };
    (1.0 + safe.ln().clamp(-0.4, 0.4)).clamp(0.7, 1.3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AssessmentTemplates;

    fn measured(pairs: &[(&str, f64)]) -> BTreeMap<String, f64> {
        pairs
            .iter()
            .map(|&(key, value)| (key.to_string(), value))
            .collect()
    }

    fn history(key: &str, points: &[f64]) -> BTreeMap<String, Vec<f64>> {
        BTreeMap::from([(key.to_string(), points.to_vec())])
    }

    fn compute(
        profile_id: &str,
        measured: &BTreeMap<String, f64>,
        history: &BTreeMap<String, Vec<f64>>,
    ) -> BTreeMap<Waste, f64> {
        let templates = AssessmentTemplates::builtin();
        EdgeCalculator::compute(
            &templates.prioritization,
            &templates.profiles,
            profile_id,
            measured,
            history,
        )
    }

    // Ratio Tests

    #[test]
    fn on_target_value_is_neutral() {
        // general_mfg fpy_pct target is 95.
        let multipliers = compute("general_mfg", &measured(&[("fpy_pct", 95.0)]), &BTreeMap::new());
        assert_eq!(multipliers[&Waste::Defects], 1.0);
    }

    #[test]
    fn below_target_shrinks_a_higher_is_better_metric() {
        let multipliers = compute("general_mfg", &measured(&[("fpy_pct", 85.0)]), &BTreeMap::new());
        let factor = multipliers[&Waste::Defects];
        assert!(factor < 1.0);
        assert!(factor >= 0.7);
    }

    #[test]
    fn log_clamp_caps_the_ratio_factor_at_1_3() {
        let multipliers =
            compute("general_mfg", &measured(&[("fpy_pct", 1_000.0)]), &BTreeMap::new());
        assert_eq!(multipliers[&Waste::Defects], 1.3);
    }

    #[test]
    fn lower_is_better_metric_inverts_the_ratio() {
        // smed_changeover_min target is 30; doubling it gives ratio 0.5,
        // ln clamps to -0.4 and the floor lifts 0.6 to 0.7.
        let multipliers = compute(
            "general_mfg",
            &measured(&[("smed_changeover_min", 60.0)]),
            &BTreeMap::new(),
        );
        assert_eq!(multipliers[&Waste::Overprocessing], 0.7);
    }

    #[test]
    fn missing_measurement_is_neutral() {
        let multipliers = compute("general_mfg", &BTreeMap::new(), &BTreeMap::new());
        for (_, factor) in &multipliers {
            assert_eq!(*factor, 1.0);
        }
    }

    #[test]
    fn unknown_profile_keeps_every_waste_neutral() {
        let multipliers =
            compute("boutique_shop", &measured(&[("fpy_pct", 50.0)]), &BTreeMap::new());
        assert_eq!(multipliers.len(), 6);
        assert!(multipliers.values().all(|&factor| factor == 1.0));
    }

    // History Tests

    #[test]
    fn bottom_of_history_earns_the_full_boost() {
        // On-target ratio, but every recent point was better.
        let multipliers = compute(
            "general_mfg",
            &measured(&[("fpy_pct", 95.0)]),
            &history("fpy_pct", &[96.0, 97.0, 98.0, 99.0, 100.0]),
        );
        assert!((multipliers[&Waste::Defects] - 1.1).abs() < 1e-9);
    }

    #[test]
    fn top_of_history_earns_no_boost() {
        let multipliers = compute(
            "general_mfg",
            &measured(&[("fpy_pct", 95.0)]),
            &history("fpy_pct", &[90.0, 91.0, 92.0, 93.0, 94.0]),
        );
        assert_eq!(multipliers[&Waste::Defects], 1.0);
    }

    #[test]
    fn short_history_is_ignored() {
        let multipliers = compute(
            "general_mfg",
            &measured(&[("fpy_pct", 95.0)]),
            &history("fpy_pct", &[96.0, 97.0]),
        );
        assert_eq!(multipliers[&Waste::Defects], 1.0);
    }

    #[test]
    fn lower_is_better_history_percentile_is_inverted() {
        // Changeover longer than every recent point is the bad half.
        let multipliers = compute(
            "general_mfg",
            &measured(&[("smed_changeover_min", 30.0)]),
            &history("smed_changeover_min", &[10.0, 12.0, 14.0, 16.0, 18.0]),
        );
        assert!((multipliers[&Waste::Overprocessing] - 1.1).abs() < 1e-9);
    }

    #[test]
    fn combined_boost_clamps_at_1_4() {
        // Ratio factor 1.3 times history boost 1.1 would be 1.43.
        let multipliers = compute(
            "general_mfg",
            &measured(&[("fpy_pct", 1_000.0)]),
            &history("fpy_pct", &[1_500.0, 1_600.0, 1_700.0, 1_800.0, 1_900.0]),
        );
        assert_eq!(multipliers[&Waste::Defects], 1.4);
    }

    #[test]
    fn automotive_profile_uses_tighter_targets() {
        // 95% FPY beats the general target but misses automotive's 98.5.
        let general =
            compute("general_mfg", &measured(&[("fpy_pct", 95.0)]), &BTreeMap::new());
        let automotive =
            compute("automotive_tier1", &measured(&[("fpy_pct", 95.0)]), &BTreeMap::new());
        assert!(automotive[&Waste::Defects] < general[&Waste::Defects]);
    }
}
