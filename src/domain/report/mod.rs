//! Report module - narrative text and PQCDSM grouping for assessment output.

mod narrative;
mod theme_summary;

pub use narrative::NarrativeBuilder;
pub use theme_summary::{group_by_theme, ThemeGroup, ThemedObservation};
