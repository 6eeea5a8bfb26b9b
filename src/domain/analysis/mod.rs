//! Analysis Module - Pure domain services for waste assessment.
//!
//! This module contains stateless functions that operate on domain objects
//! to score wastes, build observations, and estimate flow and savings.
//!
//! # Components
//!
//! - `WasteScorer` - Heuristic 0-5 severity per waste from step measurements
//! - `QuestionnaireResolver` - Qualitative answer adjustments and snippets
//! - `ObservationBuilder` / `build_observation_table` - Narrative findings
//!   ranked by RPN with evidence classification
//! - `LeadTimeCalculator` - Effective cycle times and total lead time
//! - `ValueChainScorer` - Stage questionnaire scoring with confidence weighting
//! - `BusinessCaseEstimator` - Annual savings per waste category
//! - `EdgeCalculator` - Benchmark-relative prioritization multipliers
//! - `KanbanParams` - Pull-loop card sizing
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects) and stateless. They take domain
//! objects and template bundles as input and return computed results. No
//! ports or adapters needed since there's no I/O or external dependencies.

mod benchmark;
mod business_case;
mod kanban;
mod lead_time;
mod observation;
mod observation_table;
mod questionnaire;
mod value_chain;
mod waste_scorer;

// Re-export all public types
pub use benchmark::EdgeCalculator;
pub use business_case::{BusinessCaseEstimator, SavingsEstimate};
pub use kanban::KanbanParams;
pub use lead_time::{compute_lead_time, LeadTimeCalculator, LeadTimeResult, StepCycleTime};
pub use observation::{Observation, ObservationBuilder};
pub use observation_table::{build_observation_table, ObservationRow};
pub use questionnaire::{QuestionnaireEffect, QuestionnaireResolver};
pub use value_chain::{
    FollowupValue, FollowupValues, RankedWaste, StageResponses, StageSummary, ValueChainResponses,
    ValueChainScorer,
};
pub use waste_scorer::{WasteScorecard, WasteScorer};
