//! A* planner implementation.

use log::{debug, trace};

use crate::core::{costs, GridCoord};
use crate::cost_map::CostLookup;
use crate::error::{Result, SearchError};

use super::frontier::Frontier;
use super::node::{Node, NodeRegistry};
use super::observer::{Expansion, NoopObserver, SearchObserver};
use super::types::{PlannedPath, SearchConfig};

/// A* pathfinder over a cost lookup
pub struct AStarPlanner<'a, C: CostLookup> {
    cost_map: &'a C,
    config: SearchConfig,
}

impl<'a, C: CostLookup> AStarPlanner<'a, C> {
    /// Create a new planner
    pub fn new(cost_map: &'a C, config: SearchConfig) -> Self {
        Self { cost_map, config }
    }

    /// Create with default configuration
    pub fn with_defaults(cost_map: &'a C) -> Self {
        Self::new(cost_map, SearchConfig::default())
    }

    /// Find a minimum-cost path from start to goal
    pub fn find_path(&self, start: GridCoord, goal: GridCoord) -> Result<PlannedPath> {
        self.search(start, goal, &mut NoopObserver)
    }

    /// Find a path, reporting every expansion to `observer`
    pub fn find_path_observed(
        &self,
        start: GridCoord,
        goal: GridCoord,
        observer: &mut dyn SearchObserver,
    ) -> Result<PlannedPath> {
        self.search(start, goal, observer)
    }

    fn search(
        &self,
        start: GridCoord,
        goal: GridCoord,
        observer: &mut dyn SearchObserver,
    ) -> Result<PlannedPath> {
        trace!(
            "[AStar] find_path: start=({},{}) goal=({},{})",
            start.x,
            start.y,
            goal.x,
            goal.y
        );

        if self.cell_surcharge(start)?.is_none() {
            debug!("[AStar] FAILED: StartBlocked at ({},{})", start.x, start.y);
            return Err(SearchError::StartBlocked(start));
        }
        if self.cell_surcharge(goal)?.is_none() {
            debug!("[AStar] FAILED: GoalBlocked at ({},{})", goal.x, goal.y);
            return Err(SearchError::GoalBlocked(goal));
        }

        let mut registry = NodeRegistry::new();
        let mut frontier = Frontier::new();

        let h_start = self.estimate(start, goal);
        let start_id = registry.insert(Node {
            coord: start,
            g_cost: 0.0,
            h_cost: h_start,
            f_cost: h_start,
            parent: None,
        });
        frontier.push(h_start, 0.0, start_id);

        let mut expanded = 0;

        while let Some(current_id) = frontier.pop() {
            expanded += 1;
            if expanded > self.config.max_expansions {
                debug!(
                    "[AStar] FAILED: BudgetExhausted after {} frontier pops",
                    expanded
                );
                return Err(SearchError::BudgetExhausted {
                    budget: self.config.max_expansions,
                });
            }

            let current = *registry.get(current_id);

            // Stale entry, a cheaper route to this cell was already finalized
            if registry.is_visited(current.coord) {
                continue;
            }
            registry.mark_visited(current.coord);

            observer.expanded(&Expansion {
                coord: current.coord,
                g_cost: current.g_cost,
                h_cost: current.h_cost,
                f_cost: current.f_cost,
            });
            trace!(
                "[AStar] expand ({},{}) g={:.3} h={:.3} f={:.3}",
                current.coord.x,
                current.coord.y,
                current.g_cost,
                current.h_cost,
                current.f_cost
            );

            if current.coord == goal {
                let cells = registry.reconstruct(current_id);
                trace!(
                    "[AStar] SUCCESS: path length={} cells, cost={:.2}, expanded={}",
                    cells.len(),
                    current.g_cost,
                    expanded
                );
                return Ok(PlannedPath {
                    cells,
                    cost: current.g_cost,
                    expanded,
                });
            }

            for (i, neighbor) in current.coord.neighbors_8().into_iter().enumerate() {
                if registry.is_visited(neighbor) {
                    continue;
                }

                let surcharge = match self.cell_surcharge(neighbor)? {
                    Some(surcharge) => surcharge,
                    None => continue,
                };

                // Cardinals come first in the neighbor array
                let move_cost = if i >= 4 { self.config.diagonal_cost } else { 1.0 };
                let tentative_g = current.g_cost + move_cost + surcharge;

                if !registry.improves(neighbor, tentative_g) {
                    continue;
                }

                let h = self.estimate(neighbor, goal);
                let id = registry.insert(Node {
                    coord: neighbor,
                    g_cost: tentative_g,
                    h_cost: h,
                    f_cost: tentative_g + h,
                    parent: Some(current_id),
                });
                frontier.push(tentative_g + h, tentative_g, id);
            }
        }

        debug!("[AStar] FAILED: NoPath after expanding {} cells", expanded);
        Err(SearchError::NoPath {
            start,
            goal,
            expanded,
        })
    }

    /// Effective surcharge for entering a cell, or `None` when the cell is
    /// closed to traversal (impassable cost, or outside the configured
    /// bounds). Cells absent from the map are free.
    fn cell_surcharge(&self, coord: GridCoord) -> Result<Option<f32>> {
        if let Some(bounds) = &self.config.bounds {
            if !bounds.contains(coord) {
                return Ok(None);
            }
        }

        match self.cost_map.cost(coord) {
            None => Ok(Some(costs::FREE)),
            Some(cell) => {
                if cell.is_negative() {
                    return Err(SearchError::NegativeCost {
                        coord,
                        cost: cell.surcharge(),
                    });
                }
                if cell.is_impassable() {
                    Ok(None)
                } else {
                    Ok(Some(cell.surcharge()))
                }
            }
        }
    }

    fn estimate(&self, from: GridCoord, to: GridCoord) -> f32 {
        self.config
            .heuristic
            .estimate(from, to, self.config.diagonal_cost)
    }
}
