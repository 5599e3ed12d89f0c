//! Sparse cell cost storage and the lookup contract.
//!
//! The search never walks a dense grid; it asks a [`CostLookup`] for one cell
//! at a time. [`SparseCostMap`] is the hash-backed implementation for maps
//! built cell by cell; anything that can answer point queries (an occupancy
//! grid, a quadtree, a mock) can implement the trait instead.
//!
//! ```rust
//! use marga_plan::{CellCost, CostLookup, GridCoord, SparseCostMap};
//!
//! let mut map = SparseCostMap::new();
//! map.insert(GridCoord::new(2, 3), CellCost::new(4.5));
//! map.block(GridCoord::new(2, 4));
//!
//! assert_eq!(map.cost(GridCoord::new(2, 3)), Some(CellCost::new(4.5)));
//! assert!(map.cost(GridCoord::new(2, 4)).unwrap().is_impassable());
//! assert_eq!(map.cost(GridCoord::new(0, 0)), None);
//! ```

use std::collections::HashMap;

use crate::core::{CellCost, GridBounds, GridCoord};

/// Point query interface the search reads costs through.
///
/// `None` means the cell is absent from the map. How absence is treated
/// (free space, or impassable outside a bounded region) is the search
/// configuration's choice, not the map's.
pub trait CostLookup {
    /// Cost of a single cell, or `None` if the map holds no entry for it
    fn cost(&self, coord: GridCoord) -> Option<CellCost>;
}

/// Hash-backed sparse cost map
#[derive(Clone, Debug, Default)]
pub struct SparseCostMap {
    cells: HashMap<GridCoord, CellCost>,
}

impl SparseCostMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self {
            cells: HashMap::new(),
        }
    }

    /// Set the surcharge for a cell
    pub fn insert(&mut self, coord: GridCoord, cost: CellCost) {
        self.cells.insert(coord, cost);
    }

    /// Mark a cell impassable
    pub fn block(&mut self, coord: GridCoord) {
        self.cells.insert(coord, CellCost::impassable());
    }

    /// Remove a cell, returning its previous cost
    pub fn remove(&mut self, coord: GridCoord) -> Option<CellCost> {
        self.cells.remove(&coord)
    }

    /// Number of populated cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the map holds no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Bounding box of all populated cells (empty bounds for an empty map)
    pub fn bounds(&self) -> GridBounds {
        let mut bounds = GridBounds::empty();
        for coord in self.cells.keys() {
            bounds.expand_to_include(*coord);
        }
        bounds
    }
}

impl CostLookup for SparseCostMap {
    fn cost(&self, coord: GridCoord) -> Option<CellCost> {
        self.cells.get(&coord).copied()
    }
}
