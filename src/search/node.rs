//! Search node arena and per-cell bookkeeping.

use std::collections::{HashMap, HashSet};

use crate::core::GridCoord;

/// Index of a node in the registry arena
pub(super) type NodeId = usize;

/// A node in the search
#[derive(Clone, Copy, Debug)]
pub(super) struct Node {
    pub coord: GridCoord,
    pub g_cost: f32, // Cost from start
    pub h_cost: f32, // Heuristic estimate to goal
    pub f_cost: f32, // g_cost + h_cost
    pub parent: Option<NodeId>,
}

/// Owns every node created during one search.
///
/// Nodes live in an arena and refer to their parents by index, so superseded
/// entries stay reachable for path reconstruction until the whole search is
/// dropped. `best` tracks the cheapest known node per cell and `visited` the
/// cells whose lowest cost is final.
pub(super) struct NodeRegistry {
    arena: Vec<Node>,
    best: HashMap<GridCoord, NodeId>,
    visited: HashSet<GridCoord>,
}

impl NodeRegistry {
    pub fn new() -> Self {
        Self {
            arena: Vec::new(),
            best: HashMap::new(),
            visited: HashSet::new(),
        }
    }

    /// Add a node and record it as the best entry for its cell.
    ///
    /// Callers check [`improves`](Self::improves) first; insertion
    /// unconditionally overwrites the per-cell best.
    pub fn insert(&mut self, node: Node) -> NodeId {
        let id = self.arena.len();
        self.best.insert(node.coord, id);
        self.arena.push(node);
        id
    }

    pub fn get(&self, id: NodeId) -> &Node {
        &self.arena[id]
    }

    /// Whether `g_cost` beats the best known cost for the cell
    pub fn improves(&self, coord: GridCoord, g_cost: f32) -> bool {
        match self.best.get(&coord) {
            Some(&id) => g_cost < self.arena[id].g_cost,
            None => true,
        }
    }

    pub fn mark_visited(&mut self, coord: GridCoord) {
        self.visited.insert(coord);
    }

    pub fn is_visited(&self, coord: GridCoord) -> bool {
        self.visited.contains(&coord)
    }

    /// Walk parent links back to the start and return the cells in
    /// start-to-goal order
    pub fn reconstruct(&self, id: NodeId) -> Vec<GridCoord> {
        let mut cells = Vec::new();
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = &self.arena[node_id];
            cells.push(node.coord);
            current = node.parent;
        }
        cells.reverse();
        cells
    }
}
