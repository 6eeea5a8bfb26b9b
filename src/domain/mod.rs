//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `step` - The per-step input record and its questionnaire answers
//! - `analysis` - Pure domain services (scoring, observations, lead time,
//!   value chain, business case, benchmarks, Kanban)
//! - `report` - Narrative text and PQCDSM grouping for assessment output
//! - `assessment` - The save/restore snapshot payload

pub mod analysis;
pub mod assessment;
pub mod foundation;
pub mod report;
pub mod step;
