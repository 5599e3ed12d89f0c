//! Cell traversal costs.

use serde::{Deserialize, Serialize};

/// Cost thresholds for the search
pub mod costs {
    /// No surcharge, only the movement cost applies
    pub const FREE: f32 = 0.0;
    /// Surcharge at or above this marks a cell impassable
    pub const IMPASSABLE: f32 = 1.0e6;
}

/// Traversal surcharge for a single cell.
///
/// Added on top of the movement cost when the search enters the cell.
/// Values at or above [`costs::IMPASSABLE`] exclude the cell entirely.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CellCost(f32);

impl CellCost {
    /// Create a cell cost with the given surcharge
    #[inline]
    pub fn new(surcharge: f32) -> Self {
        Self(surcharge)
    }

    /// The impassable sentinel cost
    #[inline]
    pub fn impassable() -> Self {
        Self(costs::IMPASSABLE)
    }

    /// Surcharge value
    #[inline]
    pub fn surcharge(&self) -> f32 {
        self.0
    }

    /// Whether this cost excludes the cell from traversal
    #[inline]
    pub fn is_impassable(&self) -> bool {
        self.0 >= costs::IMPASSABLE
    }

    /// Whether the surcharge violates the non-negative cost contract
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < 0.0
    }
}
