//! Fundamental grid types.

mod bounds;
mod cell;
mod coord;

pub use bounds::GridBounds;
pub use cell::{costs, CellCost};
pub use coord::GridCoord;
