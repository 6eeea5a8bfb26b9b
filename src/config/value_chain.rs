//! Value-chain questionnaire configuration

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{StageId, ValidationError, Waste};

/// A stage of the value chain, from receiving to dispatch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageDef {
    pub id: StageId,
    pub name: String,
}

/// One selectable answer for a questionnaire question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoiceDef {
    pub label: String,
    /// Severity contribution on the 0-5 scale
    pub score: f64,
}

/// A numeric or free-text field shown when a question scores high
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FollowupField {
    pub id: String,
    pub label: String,
}

/// One questionnaire question with its waste weighting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionDef {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub choices: Vec<ChoiceDef>,

    /// How strongly this question's score counts toward each waste
    #[serde(default)]
    pub waste_weights: BTreeMap<Waste, f64>,

    /// Issue text raised when the answer scores 3 or higher
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_if_high: Option<String>,

    /// Extra data captured to feed the business case
    #[serde(default)]
    pub followups: Vec<FollowupField>,
}

/// A self-reported data-quality level and its weighting factor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceLevel {
    pub label: String,
    /// Multiplier in (0, 1] applied to the question score
    pub factor: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceConfig {
    #[serde(default = "default_confidence_levels")]
    pub levels: Vec<ConfidenceLevel>,
}

impl Default for ConfidenceConfig {
    fn default() -> Self {
        Self {
            levels: default_confidence_levels(),
        }
    }
}

/// Stage and question catalog for the value-chain walk-through.
///
/// Stages are visited in declaration order. Questions are grouped per
/// stage; a stage with no configured questions simply yields no scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueChainConfig {
    #[serde(default = "default_stages")]
    pub stages: Vec<StageDef>,

    #[serde(default = "default_questions")]
    pub questions: BTreeMap<StageId, Vec<QuestionDef>>,

    #[serde(default)]
    pub confidence: ConfidenceConfig,
}

impl ValueChainConfig {
    /// Questions configured for a stage, empty if the stage has none
    pub fn questions_for(&self, stage: &StageId) -> &[QuestionDef] {
        self.questions.get(stage).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Validate stage names, choice scores, and confidence factors
    pub fn validate(&self) -> Result<(), ValidationError> {
        for stage in &self.stages {
            if stage.id.as_str().is_empty() {
                return Err(ValidationError::empty_field("stage.id"));
            }
            if stage.name.trim().is_empty() {
                return Err(ValidationError::empty_field("stage.name"));
            }
        }
        for questions in self.questions.values() {
            for question in questions {
                if question.id.trim().is_empty() {
                    return Err(ValidationError::empty_field("question.id"));
                }
                if question.text.trim().is_empty() {
                    return Err(ValidationError::empty_field("question.text"));
                }
                for choice in &question.choices {
                    if !(0.0..=5.0).contains(&choice.score) {
                        return Err(ValidationError::out_of_range(
                            "choice.score",
                            0.0,
                            5.0,
                            choice.score,
                        ));
                    }
                }
                for followup in &question.followups {
                    if followup.id.trim().is_empty() {
                        return Err(ValidationError::empty_field("followup.id"));
                    }
                }
            }
        }
        for level in &self.confidence.levels {
            if level.factor <= 0.0 || level.factor > 1.0 {
                return Err(ValidationError::out_of_range(
                    "confidence.factor",
                    0.0,
                    1.0,
                    level.factor,
                ));
            }
        }
        Ok(())
    }
}

impl Default for ValueChainConfig {
    fn default() -> Self {
        Self {
            stages: default_stages(),
            questions: default_questions(),
            confidence: ConfidenceConfig::default(),
        }
    }
}

fn stage_id(id: &str) -> StageId {
    StageId::new(id).expect("built-in stage id is non-empty")
}

fn default_stages() -> Vec<StageDef> {
    [
        ("inbound", "Inbound & Receiving"),
        ("production", "Production"),
        ("warehouse", "Finished Goods Warehouse"),
        ("dispatch", "Dispatch & Loading"),
    ]
    .into_iter()
    .map(|(id, name)| StageDef {
        id: stage_id(id),
        name: name.to_string(),
    })
    .collect()
}

fn question(
    id: &str,
    text: &str,
    choices: [(&str, f64); 3],
    weights: &[(Waste, f64)],
    issue_if_high: Option<&str>,
    followups: &[(&str, &str)],
) -> QuestionDef {
    QuestionDef {
        id: id.to_string(),
        text: text.to_string(),
        choices: choices
            .into_iter()
            .map(|(label, score)| ChoiceDef {
                label: label.to_string(),
                score,
            })
            .collect(),
        waste_weights: weights.iter().copied().collect(),
        issue_if_high: issue_if_high.map(String::from),
        followups: followups
            .iter()
            .map(|(field_id, label)| FollowupField {
                id: field_id.to_string(),
                label: label.to_string(),
            })
            .collect(),
    }
}

fn default_questions() -> BTreeMap<StageId, Vec<QuestionDef>> {
    let mut questions = BTreeMap::new();

    questions.insert(
        stage_id("inbound"),
        vec![
            question(
                "supplier_otd",
                "How reliable are supplier deliveries to the dock?",
                [
                    ("On time nearly always", 1.0),
                    ("Occasional slips", 3.0),
                    ("Frequently late or short", 5.0),
                ],
                &[(Waste::Waiting, 1.0), (Waste::Inventory, 0.5)],
                Some("Unreliable inbound deliveries starve downstream steps and inflate buffer stock"),
                &[],
            ),
            question(
                "raw_material_days",
                "How many days of raw material are held on site?",
                [
                    ("Under three days", 1.0),
                    ("Three to ten days", 3.0),
                    ("More than ten days", 5.0),
                ],
                &[(Waste::Inventory, 1.0)],
                Some("Raw material cover exceeds ten days of demand"),
                &[],
            ),
        ],
    );

    questions.insert(
        stage_id("production"),
        vec![
            question(
                "first_pass_yield",
                "How often do units pass final inspection first time?",
                [("Above 98%", 1.0), ("90-98%", 3.0), ("Below 90%", 5.0)],
                &[(Waste::Defects, 1.0), (Waste::Overprocessing, 0.4)],
                Some("First-pass yield is below target; scrap and rework absorb capacity"),
                &[
                    ("unit_material_cost", "Material cost per unit"),
                    ("rework_time_min", "Rework time per unit (min)"),
                    ("monthly_volume_units", "Monthly volume (units)"),
                ],
            ),
            question(
                "changeover_time",
                "How long does a typical changeover take?",
                [
                    ("Under 10 minutes", 1.0),
                    ("10-30 minutes", 3.0),
                    ("Over 30 minutes", 5.0),
                ],
                &[(Waste::Waiting, 1.0), (Waste::Overprocessing, 0.6)],
                Some("Long changeovers idle the line between batches"),
                &[
                    ("operators_n", "Operators per changeover"),
                    ("changeovers_per_month", "Changeovers per month"),
                ],
            ),
            question(
                "manual_handling",
                "How much manual lifting and carrying does the line rely on?",
                [("Mostly mechanized", 1.0), ("Mixed", 3.0), ("Mostly manual", 5.0)],
                &[(Waste::Motion, 1.0), (Waste::Safety, 0.3)],
                Some("Extensive manual handling adds motion waste and strain"),
                &[],
            ),
        ],
    );

    questions.insert(
        stage_id("warehouse"),
        vec![question(
            "aging_fg",
            "How long do finished goods sit before shipping?",
            [
                ("Ships within days", 1.0),
                ("Sits for weeks", 3.0),
                ("Sits for months", 5.0),
            ],
            &[(Waste::Inventory, 1.0), (Waste::Overproduction, 0.6)],
            Some("Finished goods age in the warehouse before they ship"),
            &[
                ("avg_fg_value", "Average finished-goods value"),
                ("finance_rate_pct", "Finance rate (%)"),
            ],
        )],
    );

    questions.insert(
        stage_id("dispatch"),
        vec![question(
            "loading_time",
            "How long does loading a truck take end to end?",
            [
                ("Under 30 minutes", 1.0),
                ("30-60 minutes", 3.0),
                ("Over an hour", 5.0),
            ],
            &[(Waste::Transportation, 1.0), (Waste::Waiting, 0.4)],
            Some("Slow loading ties up docks and forklifts"),
            &[
                ("loads_per_day", "Loads per day"),
                ("forklift_cost_per_hour", "Forklift cost per hour"),
            ],
        )],
    );

    questions
}

fn default_confidence_levels() -> Vec<ConfidenceLevel> {
    [("Gut feel", 0.4), ("Partial data", 0.7), ("Measured data", 1.0)]
        .into_iter()
        .map(|(label, factor)| ConfidenceLevel {
            label: label.to_string(),
            factor,
        })
        .collect()
}
