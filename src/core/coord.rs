//! Grid cell coordinates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Grid coordinates (integer cell indices)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridCoord {
    /// X coordinate (column index)
    pub x: i32,
    /// Y coordinate (row index)
    pub y: i32,
}

impl GridCoord {
    /// Create a new grid coordinate
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another coordinate
    #[inline]
    pub fn distance(&self, other: &GridCoord) -> f32 {
        let dx = (self.x - other.x) as f32;
        let dy = (self.y - other.y) as f32;
        (dx * dx + dy * dy).sqrt()
    }

    /// Get the 8 neighbors: the 4 cardinal cells first, then the 4 diagonals.
    ///
    /// Callers rely on this split; indices 0..4 are axis moves, 4..8 are
    /// diagonal moves.
    #[inline]
    pub fn neighbors_8(&self) -> [GridCoord; 8] {
        [
            GridCoord::new(self.x, self.y + 1),     // N
            GridCoord::new(self.x + 1, self.y),     // E
            GridCoord::new(self.x, self.y - 1),     // S
            GridCoord::new(self.x - 1, self.y),     // W
            GridCoord::new(self.x + 1, self.y + 1), // NE
            GridCoord::new(self.x + 1, self.y - 1), // SE
            GridCoord::new(self.x - 1, self.y - 1), // SW
            GridCoord::new(self.x - 1, self.y + 1), // NW
        ]
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
