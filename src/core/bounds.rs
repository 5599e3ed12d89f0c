//! Axis-aligned cell bounds.
//!
//! [`GridBounds`] is an inclusive rectangle of grid cells. The search uses it
//! for the bounded-region policy (cells outside the region are treated as
//! impassable), and the sparse cost map derives one from its populated cells
//! so callers can restrict a search to the observed footprint.
//!
//! ```rust
//! use marga_plan::core::{GridBounds, GridCoord};
//!
//! let mut bounds = GridBounds::empty();
//! bounds.expand_to_include(GridCoord::new(1, 1));
//! bounds.expand_to_include(GridCoord::new(-2, 3));
//!
//! assert!(bounds.contains(GridCoord::new(0, 2)));
//! assert_eq!(bounds.width(), 4);
//! assert_eq!(bounds.height(), 3);
//! ```

use serde::{Deserialize, Serialize};

use super::coord::GridCoord;

/// Inclusive axis-aligned rectangle of grid cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridBounds {
    /// Minimum corner (smallest x and y)
    pub min: GridCoord,
    /// Maximum corner (largest x and y), inclusive
    pub max: GridCoord,
}

impl GridBounds {
    /// Create bounds from min and max corners
    #[inline]
    pub const fn new(min: GridCoord, max: GridCoord) -> Self {
        Self { min, max }
    }

    /// Create empty (invalid) bounds.
    ///
    /// Empty bounds have min > max, so they expand to fit any cell.
    #[inline]
    pub fn empty() -> Self {
        Self {
            min: GridCoord::new(i32::MAX, i32::MAX),
            max: GridCoord::new(i32::MIN, i32::MIN),
        }
    }

    /// Check if the bounds are empty (invalid)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Check if a cell is inside the bounds
    #[inline]
    pub fn contains(&self, coord: GridCoord) -> bool {
        coord.x >= self.min.x
            && coord.x <= self.max.x
            && coord.y >= self.min.y
            && coord.y <= self.max.y
    }

    /// Expand bounds to include a cell
    #[inline]
    pub fn expand_to_include(&mut self, coord: GridCoord) {
        self.min.x = self.min.x.min(coord.x);
        self.min.y = self.min.y.min(coord.y);
        self.max.x = self.max.x.max(coord.x);
        self.max.y = self.max.y.max(coord.y);
    }

    /// Expand bounds by a margin of cells on all sides
    #[inline]
    pub fn expand(&self, margin: i32) -> Self {
        Self {
            min: GridCoord::new(self.min.x - margin, self.min.y - margin),
            max: GridCoord::new(self.max.x + margin, self.max.y + margin),
        }
    }

    /// Width in cells (x extent)
    #[inline]
    pub fn width(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.max.x as i64 - self.min.x as i64 + 1) as usize
    }

    /// Height in cells (y extent)
    #[inline]
    pub fn height(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.max.y as i64 - self.min.y as i64 + 1) as usize
    }
}
