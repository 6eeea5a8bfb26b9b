//! Assessment template configuration module
//!
//! This module provides the tunable inputs of the assessment engine as a
//! single template bundle: waste thresholds, the value-chain questionnaire,
//! benchmark profiles, prioritization metrics, and cost assumptions. A
//! built-in bundle ships with the crate; deployments can override it from
//! a YAML or JSON file.
//!
//! # Example
//!
//! ```no_run
//! use gemba_compass::config::AssessmentTemplates;
//!
//! let templates = AssessmentTemplates::load_from_path("templates.yaml")
//!     .expect("Failed to load templates");
//!
//! println!("{} stages configured", templates.value_chain.stages.len());
//! ```

mod assumptions;
mod error;
mod profiles;
mod thresholds;
mod value_chain;

pub use assumptions::CostAssumptions;
pub use error::ConfigError;
pub use profiles::{BenchmarkProfile, EdgeMetric, PrioritizationConfig, ProfileCatalog};
pub use thresholds::WasteThresholds;
pub use value_chain::{
    ChoiceDef, ConfidenceConfig, ConfidenceLevel, FollowupField, QuestionDef, StageDef,
    ValueChainConfig,
};

use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

static BUILTIN_TEMPLATES: Lazy<AssessmentTemplates> = Lazy::new(AssessmentTemplates::default);

/// Root template bundle
///
/// Contains every configurable section of the assessment engine. Each
/// section falls back to its built-in defaults, so an override file only
/// needs to spell out what it changes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssessmentTemplates {
    /// Thresholds the waste scorer scales measurements by
    #[serde(default)]
    pub thresholds: WasteThresholds,

    /// Stages and questions for the value-chain walk-through
    #[serde(default)]
    pub value_chain: ValueChainConfig,

    /// Industry benchmark profiles
    #[serde(default)]
    pub profiles: ProfileCatalog,

    /// Benchmark metrics used for edge multipliers
    #[serde(default)]
    pub prioritization: PrioritizationConfig,

    /// Cost figures for the business case
    #[serde(default)]
    pub assumptions: CostAssumptions,
}

impl AssessmentTemplates {
    /// The built-in template bundle shared across the process
    pub fn builtin() -> &'static AssessmentTemplates {
        &BUILTIN_TEMPLATES
    }

    /// Parse and validate a bundle from a YAML document
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the document cannot be parsed or the
    /// parsed bundle fails validation.
    pub fn from_yaml_str(raw: &str) -> Result<Self, ConfigError> {
        let templates: Self = serde_yaml::from_str(raw)?;
        templates.validate()?;
        Ok(templates)
    }

    /// Parse and validate a bundle from a JSON document
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the document cannot be parsed or the
    /// parsed bundle fails validation.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let templates: Self = serde_json::from_str(raw)?;
        templates.validate()?;
        Ok(templates)
    }

    /// Load a bundle from a file, dispatching on the extension
    ///
    /// Files ending in `.json` are parsed as JSON; everything else is
    /// treated as YAML.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, parsed, or
    /// validated.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "Loading assessment templates");
        let raw = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&raw)
        } else {
            Self::from_yaml_str(&raw)
        }
    }

    /// Validate every section of the bundle
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any section holds an unusable value.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.thresholds.validate()?;
        self.value_chain.validate()?;
        self.profiles.validate()?;
        self.prioritization.validate()?;
        self.assumptions.validate()?;
        Ok(())
    }
}
