//! Gemba Compass - Lean Waste Assessment Engine
//!
//! This crate scores the nine Lean wastes from shop-floor step measurements,
//! builds narrative observations with evidence grading, aggregates lead time,
//! ranks value-chain questionnaire answers, and estimates annual savings.

pub mod config;
pub mod domain;
