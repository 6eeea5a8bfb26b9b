//! Flow mode enum (push or pull release of work).

use serde::{Deserialize, Serialize};
use std::fmt;

/// How work is released into a process step.
///
/// Serialized with the capitalized labels data-entry layers exchange
/// ("Push"/"Pull"), not snake_case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum FlowMode {
    #[default]
    Push,
    Pull,
}

impl FlowMode {
    /// Returns all flow modes.
    pub fn all() -> &'static [FlowMode] {
        &[FlowMode::Push, FlowMode::Pull]
    }

    /// Returns true for push-scheduled steps.
    pub fn is_push(&self) -> bool {
        matches!(self, FlowMode::Push)
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            FlowMode::Push => "Push",
            FlowMode::Pull => "Pull",
        }
    }
}

impl fmt::Display for FlowMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_push() {
        assert_eq!(FlowMode::default(), FlowMode::Push);
    }

    #[test]
    fn is_push_distinguishes_modes() {
        assert!(FlowMode::Push.is_push());
        assert!(!FlowMode::Pull.is_push());
    }

    #[test]
    fn display_uses_capitalized_label() {
        assert_eq!(format!("{}", FlowMode::Push), "Push");
        assert_eq!(format!("{}", FlowMode::Pull), "Pull");
    }

    #[test]
    fn serializes_with_capitalized_label() {
        assert_eq!(serde_json::to_string(&FlowMode::Push).unwrap(), "\"Push\"");
        assert_eq!(serde_json::to_string(&FlowMode::Pull).unwrap(), "\"Pull\"");
    }

    #[test]
    fn deserializes_from_capitalized_label() {
        let mode: FlowMode = serde_json::from_str("\"Pull\"").unwrap();
        assert_eq!(mode, FlowMode::Pull);
    }
}
