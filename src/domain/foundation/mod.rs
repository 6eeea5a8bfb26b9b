//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the Gemba Compass domain.

mod ids;
mod timestamp;
mod severity;
mod waste;
mod theme;
mod confidence;
mod evidence;
mod flow_mode;
mod process_type;
mod errors;

pub use ids::{AssessmentId, StageId, StepId};
pub use timestamp::Timestamp;
pub use severity::Severity;
pub use waste::Waste;
pub use theme::Theme;
pub use confidence::ConfidenceTier;
pub use evidence::Evidence;
pub use flow_mode::FlowMode;
pub use process_type::ProcessType;
pub use errors::ValidationError;
