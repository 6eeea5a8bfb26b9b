//! Questionnaire Effect Resolver - Maps categorical answers to severity deltas and narrative snippets.

use crate::domain::foundation::Waste;
use crate::domain::step::{DefectTrend, ProcessStep, StarvationFrequency};

/// Severity adjustment derived from a step's questionnaire answers.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionnaireEffect {
    pub delta: f64,
    pub snippets: Vec<String>,
}

impl QuestionnaireEffect {
    /// Creates a no-op effect.
    pub fn neutral() -> Self {
        Self {
            delta: 0.0,
            snippets: Vec::new(),
        }
    }

    /// Creates an effect that only shifts the score.
    pub fn shift(delta: f64) -> Self {
        Self {
            delta,
            snippets: Vec::new(),
        }
    }

    /// Creates an effect with a narrative snippet.
    pub fn shift_with_snippet(delta: f64, snippet: impl Into<String>) -> Self {
        Self {
            delta,
            snippets: vec![snippet.into()],
        }
    }
}

type EffectRule = fn(&ProcessStep) -> QuestionnaireEffect;

/// Per-category questionnaire rules.
///
/// Only defects and waiting carry rules today; every other category
/// resolves through a shared no-op so new rules slot in without touching
/// the scorer.
pub struct QuestionnaireResolver;

impl QuestionnaireResolver {
    /// Resolves the questionnaire effect for one waste category.
    pub fn effect_for(waste: Waste, step: &ProcessStep) -> QuestionnaireEffect {
        Self::rule_for(waste)(step)
    }

    fn rule_for(waste: Waste) -> EffectRule {
        match waste {
            Waste::Defects => defect_rule,
            Waste::Waiting => waiting_rule,
            _ => no_op_rule,
        }
    }
}

fn defect_rule(step: &ProcessStep) -> QuestionnaireEffect {
    match step.answers.defect_trend() {
        Some(DefectTrend::Rising) => {
            QuestionnaireEffect::shift_with_snippet(1.0, "Defect trend rising")
        }
        Some(DefectTrend::Stable) => QuestionnaireEffect::shift(0.3),
        Some(DefectTrend::Falling) => QuestionnaireEffect::shift(-0.2),
        None => QuestionnaireEffect::neutral(),
    }
}

fn waiting_rule(step: &ProcessStep) -> QuestionnaireEffect {
    match step.answers.starvation_frequency() {
        Some(StarvationFrequency::Frequent) => {
            QuestionnaireEffect::shift_with_snippet(1.0, "Frequent starvation/blocks")
        }
        Some(StarvationFrequency::Occasional) => QuestionnaireEffect::shift(0.5),
        Some(StarvationFrequency::Rare) => QuestionnaireEffect::shift(0.1),
        None => QuestionnaireEffect::neutral(),
    }
}

fn no_op_rule(_step: &ProcessStep) -> QuestionnaireEffect {
    QuestionnaireEffect::neutral()
}
