//! Theme Summary - Observations regrouped under the PQCDSM report themes.

use serde::{Deserialize, Serialize};

use crate::domain::analysis::ObservationRow;
use crate::domain::foundation::Theme;

/// One observation with its theme-local reference, e.g. `Q-1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemedObservation {
    pub reference: String,
    pub row: ObservationRow,
}

/// All observations reported under one theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeGroup {
    pub theme: Theme,
    pub entries: Vec<ThemedObservation>,
}

impl ThemeGroup {
    /// Report headline combining the theme code and name.
    pub fn headline(&self) -> String {
        format!("{} — {}", self.theme.code(), self.theme.display_name())
    }
}

/// Groups table rows under the fixed P, Q, C, D, S, M order.
///
/// Rows keep their table order inside each group and are numbered from 1,
/// so the first quality finding is referenced as `Q-1`. Themes with no
/// observations are omitted.
pub fn group_by_theme(rows: &[ObservationRow]) -> Vec<ThemeGroup> {
    let mut groups = Vec::new();
    for &theme in Theme::all() {
        let entries: Vec<ThemedObservation> = rows
            .iter()
            .filter(|row| Theme::for_waste(row.observation.waste) == theme)
            .enumerate()
            .map(|(index, row)| ThemedObservation {
                reference: format!("{}-{}", theme.code(), index + 1),
                row: row.clone(),
            })
            .collect();
        if !entries.is_empty() {
            groups.push(ThemeGroup { theme, entries });
        }
    }
    groups
}
