//! Planner configuration file.
//!
//! ```json
//! {
//!   "weights": {
//!     "gap_weight": 50,
//!     "shift_preference": "evening",
//!     "per_day": { "sat": { "mode": "avoid" } }
//!   },
//!   "limits": { "top_k": 5 }
//! }
//! ```
//!
//! Every field is optional and falls back to the engine default.

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use tt_engine::SearchLimits;
use tt_score::WeightConfig;

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlannerConfig {
    pub weights: WeightConfig,
    pub limits:  SearchLimits,
}

impl PlannerConfig {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}
