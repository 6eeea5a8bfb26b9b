//! Step module - the per-step input record and its questionnaire answers.

mod answers;
mod process_step;

pub use answers::{
    DefectAnswers, DefectTrend, StarvationFrequency, StepAnswers, TalentAnswers, WaitingAnswers,
};
pub use process_step::{default_step_set, ProcessStep, MAX_STEPS};
