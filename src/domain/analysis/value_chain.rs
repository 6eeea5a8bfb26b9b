//! Value-Chain Answer Scorer - Ranked per-stage waste priorities from questionnaire answers.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::ValueChainConfig;
use crate::domain::foundation::{Severity, StageId, Waste};

/// A follow-up detail value captured alongside an answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FollowupValue {
    Number(f64),
    Text(String),
}

impl FollowupValue {
    /// Numeric view of the value, parsing text when possible.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(text) => text.trim().parse().ok(),
        }
    }

    /// Whether the value carries no content.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Number(_) => false,
            Self::Text(text) => text.trim().is_empty(),
        }
    }
}

impl fmt::Display for FollowupValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{}", value),
            Self::Text(text) => write!(f, "{}", text),
        }
    }
}

/// Follow-up field values for one question, keyed by field id.
pub type FollowupValues = BTreeMap<String, FollowupValue>;

/// Answers collected while walking one stage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StageResponses {
    /// Chosen answer score per question id.
    #[serde(default)]
    pub answers: BTreeMap<String, f64>,

    /// Confidence factor per question id; absent or zero means 1.0.
    #[serde(default)]
    pub confidence: BTreeMap<String, f64>,

    /// Follow-up detail values per question id.
    #[serde(default)]
    pub followups: BTreeMap<String, FollowupValues>,
}

/// All questionnaire responses, keyed by stage id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValueChainResponses {
    #[serde(default)]
    pub stages: BTreeMap<StageId, StageResponses>,
}

impl ValueChainResponses {
    pub fn stage(&self, stage_id: &StageId) -> Option<&StageResponses> {
        self.stages.get(stage_id)
    }
}

/// One waste with its normalized stage score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankedWaste {
    pub waste: Waste,
    pub score: Severity,
}

/// Ranked waste priorities for one value-chain stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageSummary {
    pub stage_id: StageId,
    pub stage_name: String,
    /// Normalized waste scores, sorted descending.
    pub ranked: Vec<RankedWaste>,
    pub issues: Vec<String>,
    /// Mean per-question confidence factor.
    pub confidence: f64,
}

impl StageSummary {
    /// The leading ranked entries with a score above zero, at most three.
    pub fn top3(&self) -> Vec<&RankedWaste> {
        self.ranked
            .iter()
            .take(3)
            .filter(|entry| !entry.score.is_zero())
            .collect()
    }
}

/// Stage questionnaire scoring functions.
pub struct ValueChainScorer;

impl ValueChainScorer {
    /// Scores every responded stage in configured stage order.
    ///
    /// # Algorithm
    /// Per question: `waste_scores[waste] += answer * weight * confidence`;
    /// the normalization ceiling grows by `max(|weight|) * 4.0` per
    /// question. Ranked scores are `5 * waste_score / max_possible`,
    /// clamped to [0,5] and sorted descending.
    ///
    /// # Edge Cases
    /// - Stages without responses are skipped entirely
    /// - Unanswered questions score 0 but still count toward
    ///   normalization and confidence
    /// - A stage with no configured questions yields confidence 1.0
    pub fn score(
        config: &ValueChainConfig,
        responses: &ValueChainResponses,
    ) -> Vec<StageSummary> {
        let mut summaries = Vec::new();

        for stage in &config.stages {
            let Some(stage_responses) = responses.stage(&stage.id) else {
                continue;
            };

            let mut waste_scores: BTreeMap<Waste, f64> = BTreeMap::new();
            let mut max_possible = 0.0;
            let mut issues = Vec::new();
            let mut confidence_factors = Vec::new();

            for question in config.questions_for(&stage.id) {
                let answer = stage_responses
                    .answers
                    .get(&question.id)
                    .copied()
                    .unwrap_or(0.0);
                let factor = match stage_responses.confidence.get(&question.id) {
                    Some(&f) if f != 0.0 => f,
                    _ => 1.0,
                };
                confidence_factors.push(factor);

                max_possible += question
                    .waste_weights
                    .values()
                    .map(|weight| weight.abs() * 4.0)
                    .fold(0.0, f64::max);

                for (&waste, &weight) in &question.waste_weights {
                    *waste_scores.entry(waste).or_insert(0.0) += answer * weight * factor;
                }

                if answer >= 3.0 {
                    if let Some(issue) = &question.issue_if_high {
                        issues.push(issue.clone());
                    }
                }

                if let Some(values) = stage_responses.followups.get(&question.id) {
                    for (field, value) in values {
                        if !value.is_empty() {
                            issues.push(format!("{}: {} = {}", question.text, field, value));
                        }
                    }
                }
            }

            let denom = max_possible.max(1e-6);
            let mut ranked: Vec<RankedWaste> = waste_scores
                .iter()
                .map(|(&waste, &score)| RankedWaste {
                    waste,
                    score: Severity::new(5.0 * score / denom),
                })
                .collect();
            ranked.sort_by(|a, b| b.score.value().total_cmp(&a.score.value()));

            let confidence = if confidence_factors.is_empty() {
                1.0
            } else {
                confidence_factors.iter().sum::<f64>() / confidence_factors.len() as f64
            };

            summaries.push(StageSummary {
                stage_id: stage.id.clone(),
                stage_name: stage.name.clone(),
                ranked,
                issues,
                confidence,
            });
        }

        tracing::debug!(stages = summaries.len(), "Scored value-chain responses");
        summaries
    }
}
