//! Search configuration and result types.

use serde::{Deserialize, Serialize};

use crate::core::{GridBounds, GridCoord};

/// Distance estimate used to order the frontier.
///
/// Both variants are admissible for 8-connected movement as long as the
/// diagonal cost is at least sqrt(2). Octile is the tighter bound and
/// usually expands fewer cells; Euclidean is the classic straight-line
/// estimate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Heuristic {
    /// Straight-line distance
    #[default]
    Euclidean,
    /// Exact remaining cost on an obstacle-free 8-connected grid
    Octile,
}

impl Heuristic {
    /// Estimated cost from `from` to `to`
    pub fn estimate(&self, from: GridCoord, to: GridCoord, diagonal_cost: f32) -> f32 {
        match self {
            Heuristic::Euclidean => from.distance(&to),
            Heuristic::Octile => {
                let dx = (from.x - to.x).abs() as f32;
                let dy = (from.y - to.y).abs() as f32;
                let min = dx.min(dy);
                let max = dx.max(dy);
                min * diagonal_cost + (max - min)
            }
        }
    }
}

/// Search configuration
#[derive(Clone, Debug)]
pub struct SearchConfig {
    /// Frontier ordering heuristic
    pub heuristic: Heuristic,
    /// Cost multiplier for diagonal moves (sqrt(2))
    pub diagonal_cost: f32,
    /// Maximum frontier pops before giving up
    pub max_expansions: usize,
    /// Restrict the search to a region; cells outside it are impassable.
    /// `None` treats every absent cell as free space.
    pub bounds: Option<GridBounds>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            heuristic: Heuristic::default(),
            diagonal_cost: std::f32::consts::SQRT_2,
            max_expansions: 100_000,
            bounds: None,
        }
    }
}

impl SearchConfig {
    /// Restrict the search to a bounded region
    pub fn with_bounds(mut self, bounds: GridBounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Select the frontier heuristic
    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Cap the number of frontier pops
    pub fn with_max_expansions(mut self, max_expansions: usize) -> Self {
        self.max_expansions = max_expansions;
        self
    }
}

/// A completed path
#[derive(Clone, Debug)]
pub struct PlannedPath {
    /// Cells from start to goal inclusive
    pub cells: Vec<GridCoord>,
    /// Total path cost (movement plus surcharges)
    pub cost: f32,
    /// Frontier entries processed while finding it
    pub expanded: usize,
}

impl PlannedPath {
    /// Path length in cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the path holds no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// First cell of the path
    pub fn start(&self) -> Option<GridCoord> {
        self.cells.first().copied()
    }

    /// Last cell of the path
    pub fn goal(&self) -> Option<GridCoord> {
        self.cells.last().copied()
    }
}
