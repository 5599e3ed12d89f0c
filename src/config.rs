//! Search configuration as a serde section.
//!
//! [`SearchSection`] is the serialization-facing mirror of
//! [`SearchConfig`]: embed it in an application's configuration struct and
//! call [`SearchSection::to_config`] for the runtime values. Every field
//! has a default, so an empty section deserializes to the same values as
//! [`SearchConfig::default`].

use serde::{Deserialize, Serialize};

use crate::core::GridBounds;
use crate::search::{Heuristic, SearchConfig};

mod defaults {
    pub fn diagonal_cost() -> f32 {
        std::f32::consts::SQRT_2
    }

    pub fn max_expansions() -> usize {
        100_000
    }
}

/// Search settings section
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchSection {
    /// Frontier ordering heuristic
    #[serde(default)]
    pub heuristic: Heuristic,

    /// Cost multiplier for diagonal moves (sqrt(2))
    #[serde(default = "defaults::diagonal_cost")]
    pub diagonal_cost: f32,

    /// Maximum frontier pops before giving up
    #[serde(default = "defaults::max_expansions")]
    pub max_expansions: usize,

    /// Optional region restriction; omit for unbounded search
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounds: Option<GridBounds>,
}

impl Default for SearchSection {
    fn default() -> Self {
        Self {
            heuristic: Heuristic::default(),
            diagonal_cost: std::f32::consts::SQRT_2,
            max_expansions: 100_000,
            bounds: None,
        }
    }
}

impl SearchSection {
    /// Convert to the runtime configuration
    pub fn to_config(&self) -> SearchConfig {
        SearchConfig {
            heuristic: self.heuristic,
            diagonal_cost: self.diagonal_cost,
            max_expansions: self.max_expansions,
            bounds: self.bounds,
        }
    }
}
