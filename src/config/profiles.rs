//! Benchmark profiles and prioritization metrics

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ValidationError, Waste};

/// Industry benchmark targets keyed by metric name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkProfile {
    pub name: String,
    #[serde(default)]
    pub benchmarks: BTreeMap<String, f64>,
}

/// Catalog of benchmark profiles keyed by profile id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileCatalog(pub BTreeMap<String, BenchmarkProfile>);

impl ProfileCatalog {
    pub fn get(&self, profile_id: &str) -> Option<&BenchmarkProfile> {
        self.0.get(profile_id)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        for profile in self.0.values() {
            if profile.name.trim().is_empty() {
                return Err(ValidationError::empty_field("profile.name"));
            }
        }
        Ok(())
    }
}

impl Default for ProfileCatalog {
    fn default() -> Self {
        let mut catalog = BTreeMap::new();
        catalog.insert(
            "general_mfg".to_string(),
            profile(
                "General manufacturing",
                &[
                    ("fpy_pct", 95.0),
                    ("smed_changeover_min", 30.0),
                    ("inventory_turns", 8.0),
                    ("uptime_pct", 85.0),
                    ("otd_pct", 92.0),
                    ("recordable_incidents_yr", 2.0),
                ],
            ),
        );
        catalog.insert(
            "automotive_tier1".to_string(),
            profile(
                "Automotive tier-1",
                &[
                    ("fpy_pct", 98.5),
                    ("smed_changeover_min", 12.0),
                    ("inventory_turns", 15.0),
                    ("uptime_pct", 92.0),
                    ("otd_pct", 98.0),
                    ("recordable_incidents_yr", 1.0),
                ],
            ),
        );
        Self(catalog)
    }
}

fn profile(name: &str, benchmarks: &[(&str, f64)]) -> BenchmarkProfile {
    BenchmarkProfile {
        name: name.to_string(),
        benchmarks: benchmarks
            .iter()
            .map(|(key, value)| (key.to_string(), *value))
            .collect(),
    }
}

/// The benchmark metric that sharpens one waste's priority
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeMetric {
    /// Benchmark key looked up in the active profile
    pub key: String,
    /// Whether a larger measured value beats the benchmark
    #[serde(default = "default_higher_is_better")]
    pub higher_is_better: bool,
}

fn default_higher_is_better() -> bool {
    true
}

/// Which wastes carry a benchmark-driven edge multiplier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrioritizationConfig {
    #[serde(default = "default_edge_metrics")]
    pub edge_metrics: BTreeMap<Waste, EdgeMetric>,
}

impl PrioritizationConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        for metric in self.edge_metrics.values() {
            if metric.key.trim().is_empty() {
                return Err(ValidationError::empty_field("edge_metric.key"));
            }
        }
        Ok(())
    }
}

impl Default for PrioritizationConfig {
    fn default() -> Self {
        Self {
            edge_metrics: default_edge_metrics(),
        }
    }
}

fn default_edge_metrics() -> BTreeMap<Waste, EdgeMetric> {
    [
        (Waste::Defects, "fpy_pct", true),
        (Waste::Overprocessing, "smed_changeover_min", false),
        (Waste::Inventory, "inventory_turns", true),
        (Waste::Waiting, "uptime_pct", true),
        (Waste::Overproduction, "otd_pct", true),
        (Waste::Safety, "recordable_incidents_yr", false),
    ]
    .into_iter()
    .map(|(waste, key, higher_is_better)| {
        (
            waste,
            EdgeMetric {
                key: key.to_string(),
                higher_is_better,
            },
        )
    })
    .collect()
}
