//! Assessment Snapshot - Save/restore payload for a whole assessment.

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::analysis::StageSummary;
use crate::domain::foundation::{AssessmentId, Timestamp};
use crate::domain::step::ProcessStep;

/// Report-facing header fields entered alongside the step data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentMeta {
    pub factory_name: String,
    /// Free text so callers can write "2025" or "FY25/26".
    pub report_year: String,
    /// Already-formatted cost text, e.g. "$250k".
    pub est_cost: String,
    /// Already-formatted lost-sales text, e.g. "$1.2M".
    pub est_sales: String,
}

impl Default for AssessmentMeta {
    fn default() -> Self {
        Self {
            factory_name: "[FactoryName]".to_string(),
            report_year: Utc::now().year().to_string(),
            est_cost: "[cost]".to_string(),
            est_sales: "[sales_opportunity]".to_string(),
        }
    }
}

/// Errors from the snapshot JSON round-trip.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Failed to serialize snapshot: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Failed to parse snapshot: {0}")]
    Parse(#[source] serde_json::Error),
}

/// Complete save/restore payload for one assessment.
///
/// Every section carries a default so older or partial payloads still load.
/// Persistence itself (files, databases) is the caller's concern; the crate
/// only defines the shape and the JSON round-trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentSnapshot {
    #[serde(default)]
    pub id: AssessmentId,

    #[serde(default)]
    pub saved_at: Timestamp,

    #[serde(default)]
    pub meta: AssessmentMeta,

    #[serde(default)]
    pub steps: Vec<ProcessStep>,

    /// Ranked stage summaries as last computed, if any.
    #[serde(default)]
    pub vc_summary: Vec<StageSummary>,
}

impl AssessmentSnapshot {
    /// Creates a snapshot with a fresh id, stamped now.
    pub fn new(
        meta: AssessmentMeta,
        steps: Vec<ProcessStep>,
        vc_summary: Vec<StageSummary>,
    ) -> Self {
        Self {
            id: AssessmentId::new(),
            saved_at: Timestamp::now(),
            meta,
            steps,
            vc_summary,
        }
    }

    /// Serializes to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Serialize`] if JSON encoding fails.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string_pretty(self).map_err(SnapshotError::Serialize)
    }

    /// Parses a snapshot from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Parse`] if the payload is not valid JSON or
    /// a present field has the wrong shape.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(json).map_err(SnapshotError::Parse)?;
        tracing::debug!(steps = snapshot.steps.len(), "Parsed assessment snapshot");
        Ok(snapshot)
    }
}
