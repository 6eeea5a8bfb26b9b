//! Process type enum (degree of automation at a step).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Degree of automation at a process step.
///
/// Serialized with the data-entry labels ("Manual"/"Semi-auto"/"Auto").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ProcessType {
    #[default]
    Manual,
    #[serde(rename = "Semi-auto")]
    SemiAuto,
    Auto,
}

impl ProcessType {
    /// Returns all process types.
    pub fn all() -> &'static [ProcessType] {
        &[ProcessType::Manual, ProcessType::SemiAuto, ProcessType::Auto]
    }

    /// Returns true for fully manual steps.
    pub fn is_manual(&self) -> bool {
        matches!(self, ProcessType::Manual)
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            ProcessType::Manual => "Manual",
            ProcessType::SemiAuto => "Semi-auto",
            ProcessType::Auto => "Auto",
        }
    }
}

impl fmt::Display for ProcessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_manual() {
        assert_eq!(ProcessType::default(), ProcessType::Manual);
    }

    #[test]
    fn is_manual_only_for_manual() {
        assert!(ProcessType::Manual.is_manual());
        assert!(!ProcessType::SemiAuto.is_manual());
        assert!(!ProcessType::Auto.is_manual());
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(format!("{}", ProcessType::SemiAuto), "Semi-auto");
    }

    #[test]
    fn serializes_with_entry_labels() {
        assert_eq!(
            serde_json::to_string(&ProcessType::SemiAuto).unwrap(),
            "\"Semi-auto\""
        );
        assert_eq!(serde_json::to_string(&ProcessType::Auto).unwrap(), "\"Auto\"");
    }

    #[test]
    fn deserializes_from_entry_labels() {
        let pt: ProcessType = serde_json::from_str("\"Semi-auto\"").unwrap();
        assert_eq!(pt, ProcessType::SemiAuto);
    }
}
