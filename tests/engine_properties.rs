//! Property tests for the scoring and estimation engine.
//!
//! These pin down the invariants that hold for any input: scores stay
//! clamped, ordering is consistent, aggregates match their parts, and
//! nothing ever goes negative.

use std::collections::BTreeMap;

use proptest::prelude::*;

use gemba_compass::config::AssessmentTemplates;
use gemba_compass::domain::analysis::{
    build_observation_table, compute_lead_time, BusinessCaseEstimator, EdgeCalculator,
    FollowupValue, KanbanParams, RankedWaste, StageResponses, StageSummary, ValueChainResponses,
    ValueChainScorer, WasteScorer,
};
use gemba_compass::domain::foundation::{
    FlowMode, ProcessType, Severity, StageId, StepId, Waste,
};
use gemba_compass::domain::step::{
    DefectAnswers, DefectTrend, ProcessStep, StarvationFrequency, StepAnswers, WaitingAnswers,
};

fn defect_trend() -> impl Strategy<Value = Option<DefectTrend>> {
    prop_oneof![
        Just(None),
        Just(Some(DefectTrend::Rising)),
        Just(Some(DefectTrend::Stable)),
        Just(Some(DefectTrend::Falling)),
    ]
}

fn starvation_frequency() -> impl Strategy<Value = Option<StarvationFrequency>> {
    prop_oneof![
        Just(None),
        Just(Some(StarvationFrequency::Frequent)),
        Just(Some(StarvationFrequency::Occasional)),
        Just(Some(StarvationFrequency::Rare)),
    ]
}

prop_compose! {
    fn arb_step()(
        ct in 0.0f64..7200.0,
        wip in 0.0f64..500.0,
        defect in 0.0f64..100.0,
        rework in 0.0f64..100.0,
        distance in 0.0f64..300.0,
        moves in 0u32..8,
        waiting in 0.0f64..100.0,
        incidents in 0u32..5,
        downtime in 0.0f64..100.0,
        freq in 0.0f64..10.0,
        co_min in 0.0f64..240.0,
        operators in 0.0f64..20.0,
        touchpoints in 0.0f64..20.0,
        push in any::<bool>(),
        manual in any::<bool>(),
        trend in defect_trend(),
        frequency in starvation_frequency(),
    ) -> ProcessStep {
        let mut step = ProcessStep::with_defaults(StepId::new("P1").unwrap(), "Process 1");
        step.ct_sec = ct;
        step.wip_units_in = wip;
        step.defect_pct = defect;
        step.rework_pct = rework;
        step.distance_m = distance;
        step.layout_moves = moves;
        step.waiting_starved_pct = waiting;
        step.safety_incidents = incidents;
        step.downtime_pct = downtime;
        step.changeover_freq = freq;
        step.changeover_time_min = co_min;
        step.operators_n = operators;
        step.touchpoints_n = touchpoints;
        step.push_pull = if push { FlowMode::Push } else { FlowMode::Pull };
        step.process_type = if manual { ProcessType::Manual } else { ProcessType::Auto };
        step.answers = StepAnswers {
            defects: trend.map(|t| DefectAnswers { trend: Some(t) }),
            waiting: frequency.map(|f| WaitingAnswers { frequency: Some(f) }),
            talent: None,
        };
        step
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Every waste score lands in the 0-5 band, whatever the input.
    #[test]
    fn prop_scores_stay_in_bounds(step in arb_step()) {
        let thresholds = &AssessmentTemplates::builtin().thresholds;
        let scorecard = WasteScorer::score(&step, thresholds);
        for &waste in Waste::all() {
            let value = scorecard.score(waste).value();
            prop_assert!((0.0..=5.0).contains(&value), "{waste} scored {value}");
        }
    }

    /// Scoring the same step twice gives identical results.
    #[test]
    fn prop_scoring_is_deterministic(step in arb_step()) {
        let thresholds = &AssessmentTemplates::builtin().thresholds;
        let first = WasteScorer::score(&step, thresholds);
        let second = WasteScorer::score(&step, thresholds);
        prop_assert_eq!(first, second);
    }

    /// A higher defect rate never lowers the defects score.
    #[test]
    fn prop_raising_defects_never_lowers_the_score(
        step in arb_step(),
        bump in 0.0f64..50.0,
    ) {
        let thresholds = &AssessmentTemplates::builtin().thresholds;
        let base = WasteScorer::score(&step, thresholds).score(Waste::Defects).value();

        let mut worse = step;
        worse.defect_pct += bump;
        let bumped = WasteScorer::score(&worse, thresholds).score(Waste::Defects).value();

        prop_assert!(bumped >= base, "defects went {base} -> {bumped} on +{bump}%");
    }

    /// Lead time is exactly the sum of per-step effective cycle times, and
    /// the bottleneck is their maximum.
    #[test]
    fn prop_lead_time_matches_its_parts(
        mut steps in prop::collection::vec(arb_step(), 0..8)
    ) {
        for (i, step) in steps.iter_mut().enumerate() {
            step.id = StepId::new(format!("P{}", i + 1)).unwrap();
        }

        let result = compute_lead_time(&steps);
        let sum: f64 = result.by_step.values().map(|s| s.ct_eff_sec).sum();
        let max = result
            .by_step
            .values()
            .map(|s| s.ct_eff_sec)
            .fold(0.0f64, f64::max);

        prop_assert_eq!(result.lead_time_sec, sum);
        prop_assert_eq!(result.ct_bottleneck_sec, max);
        prop_assert!(result.by_step.values().all(|s| s.ct_eff_sec >= 0.0));
    }

    /// A waste produces an observation row exactly when its score is nonzero.
    #[test]
    fn prop_observations_exist_iff_score_is_nonzero(step in arb_step()) {
        let templates = AssessmentTemplates::builtin();
        let scorecard = WasteScorer::score(&step, &templates.thresholds);
        let nonzero = Waste::all()
            .iter()
            .filter(|&&waste| !scorecard.score(waste).is_zero())
            .count();

        let rows = build_observation_table(std::slice::from_ref(&step), templates);
        prop_assert_eq!(rows.len(), nonzero);
        prop_assert!(rows.iter().all(|row| row.observation.score.value() > 0.0));
    }

    /// RPN is a percentage and the table is sorted by it, descending.
    #[test]
    fn prop_observation_table_is_sorted_by_rpn(
        mut steps in prop::collection::vec(arb_step(), 1..5)
    ) {
        for (i, step) in steps.iter_mut().enumerate() {
            step.id = StepId::new(format!("P{}", i + 1)).unwrap();
        }

        let rows = build_observation_table(&steps, AssessmentTemplates::builtin());
        for row in &rows {
            prop_assert!((0.0..=100.0).contains(&row.observation.rpn_pct));
        }
        for pair in rows.windows(2) {
            prop_assert!(pair[0].observation.rpn_pct >= pair[1].observation.rpn_pct);
        }
    }

    /// Stage scores normalize into the 0-5 band and arrive ranked.
    #[test]
    fn prop_value_chain_scores_are_normalized(
        fpy in 0.0f64..=5.0,
        changeover in 0.0f64..=5.0,
        handling in 0.0f64..=5.0,
    ) {
        let mut production = StageResponses::default();
        production.answers.insert("first_pass_yield".to_string(), fpy);
        production.answers.insert("changeover_time".to_string(), changeover);
        production.answers.insert("manual_handling".to_string(), handling);

        let mut responses = ValueChainResponses::default();
        responses
            .stages
            .insert(StageId::new("production").unwrap(), production);

        let templates = AssessmentTemplates::builtin();
        let summaries = ValueChainScorer::score(&templates.value_chain, &responses);
        prop_assert_eq!(summaries.len(), 1);

        let summary = &summaries[0];
        for entry in &summary.ranked {
            prop_assert!((0.0..=5.0).contains(&entry.score.value()));
        }
        for pair in summary.ranked.windows(2) {
            prop_assert!(pair[0].score.value() >= pair[1].score.value());
        }
        prop_assert!(summary.confidence > 0.0 && summary.confidence <= 1.0);
    }

    /// Savings never go negative and the total is the sum of its parts.
    #[test]
    fn prop_savings_are_non_negative(
        defects in 0.0f64..=5.0,
        waiting in 0.0f64..=5.0,
        inventory in 0.0f64..=5.0,
        operators in 0.0f64..20.0,
        changeovers in 0.0f64..30.0,
        fg_value in 0.0f64..10_000_000.0,
    ) {
        let summary = StageSummary {
            stage_id: StageId::new("production").unwrap(),
            stage_name: "Production".to_string(),
            ranked: vec![
                RankedWaste { waste: Waste::Defects, score: Severity::new(defects) },
                RankedWaste { waste: Waste::Waiting, score: Severity::new(waiting) },
                RankedWaste { waste: Waste::Inventory, score: Severity::new(inventory) },
            ],
            issues: Vec::new(),
            confidence: 1.0,
        };

        let mut stage = StageResponses::default();
        stage.followups.insert(
            "changeover_time".to_string(),
            BTreeMap::from([
                ("operators_n".to_string(), FollowupValue::Number(operators)),
                ("changeovers_per_month".to_string(), FollowupValue::Number(changeovers)),
            ]),
        );
        stage.followups.insert(
            "aging_fg".to_string(),
            BTreeMap::from([
                ("avg_fg_value".to_string(), FollowupValue::Number(fg_value)),
            ]),
        );
        let mut responses = ValueChainResponses::default();
        responses
            .stages
            .insert(StageId::new("production").unwrap(), stage);

        let templates = AssessmentTemplates::builtin();
        let estimate =
            BusinessCaseEstimator::estimate(&[summary], &responses, &templates.assumptions);

        prop_assert!(estimate.by_waste.values().all(|&saving| saving >= 0.0));
        let sum: f64 = estimate.by_waste.values().sum();
        prop_assert_eq!(estimate.total, sum);
    }

    /// Edge multipliers always stay inside the clamp band.
    #[test]
    fn prop_edge_multipliers_stay_clamped(
        fpy in 0.0f64..1_000_000.0,
        smed in 0.0f64..1_000_000.0,
        uptime in 0.0f64..1_000_000.0,
        history in prop::collection::vec(0.0f64..1_000_000.0, 0..10),
    ) {
        let measured = BTreeMap::from([
            ("fpy_pct".to_string(), fpy),
            ("smed_changeover_min".to_string(), smed),
            ("uptime_pct".to_string(), uptime),
        ]);
        let history = BTreeMap::from([("fpy_pct".to_string(), history)]);

        let templates = AssessmentTemplates::builtin();
        let multipliers = EdgeCalculator::compute(
            &templates.prioritization,
            &templates.profiles,
            "general_mfg",
            &measured,
            &history,
        );

        for (&waste, &factor) in &multipliers {
            prop_assert!(
                (0.7..=1.4).contains(&factor),
                "{waste} multiplier {factor} escaped the clamp"
            );
        }
    }

    /// Kanban sizing always recommends at least one card.
    #[test]
    fn prop_kanban_recommends_at_least_one_card(
        demand in 0.0f64..100_000.0,
        lead_time in 0.0f64..30.0,
        safety in 0.0f64..1.0,
        container in 0.0f64..1_000.0,
    ) {
        let params = KanbanParams {
            daily_demand_units: demand,
            replenishment_lead_time_days: lead_time,
            safety_factor: safety,
            container_size_units: container,
        };
        prop_assert!(params.recommended_cards() >= 1);
    }
}
