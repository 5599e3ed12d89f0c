//! Best-first path search.
//!
//! A* over a [`CostLookup`]: the frontier orders candidate cells by
//! estimated total cost, a node registry tracks the cheapest known route to
//! every touched cell, and relaxation pushes duplicate frontier entries that
//! are lazily discarded at pop time. With an admissible heuristic and
//! non-negative costs the returned path is minimum-cost.

mod frontier;
mod node;
mod observer;
mod planner;
mod types;

pub use observer::{Expansion, NoopObserver, SearchObserver};
pub use planner::AStarPlanner;
pub use types::{Heuristic, PlannedPath, SearchConfig};

use crate::core::GridCoord;
use crate::cost_map::CostLookup;
use crate::error::Result;

/// Quick path finding with default configuration
pub fn find_path<C: CostLookup>(
    cost_map: &C,
    start: GridCoord,
    goal: GridCoord,
) -> Result<PlannedPath> {
    let planner = AStarPlanner::with_defaults(cost_map);
    planner.find_path(start, goal)
}

/// Check if a path exists (same search, result discarded)
pub fn path_exists<C: CostLookup>(cost_map: &C, start: GridCoord, goal: GridCoord) -> bool {
    find_path(cost_map, start, goal).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CellCost, GridBounds};
    use crate::cost_map::SparseCostMap;
    use crate::error::SearchError;
    use std::f32::consts::SQRT_2;

    fn create_test_map() -> SparseCostMap {
        SparseCostMap::new()
    }

    /// Vertical wall at x spanning y0..=y1
    fn add_wall(map: &mut SparseCostMap, x: i32, y0: i32, y1: i32) {
        for y in y0..=y1 {
            map.block(GridCoord::new(x, y));
        }
    }

    #[test]
    fn test_simple_path() {
        let map = create_test_map();
        let start = GridCoord::new(0, 0);
        let goal = GridCoord::new(5, 0);

        let path = find_path(&map, start, goal).unwrap();

        assert_eq!(path.start(), Some(start));
        assert_eq!(path.goal(), Some(goal));
        assert_eq!(path.len(), 6);
        assert!((path.cost - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_start_equals_goal() {
        let map = create_test_map();
        let cell = GridCoord::new(3, -2);

        let path = find_path(&map, cell, cell).unwrap();

        assert_eq!(path.cells, vec![cell]);
        assert_eq!(path.cost, 0.0);
    }

    #[test]
    fn test_single_diagonal_costs_sqrt_2() {
        let map = create_test_map();

        let path = find_path(&map, GridCoord::new(0, 0), GridCoord::new(1, 1)).unwrap();

        assert_eq!(path.len(), 2);
        assert!((path.cost - SQRT_2).abs() < 1e-6);
    }

    #[test]
    fn test_straight_line_cost() {
        // Three cells in a row: two axis moves, no surcharges
        let map = create_test_map();

        let path = find_path(&map, GridCoord::new(0, 0), GridCoord::new(2, 0)).unwrap();

        assert_eq!(path.len(), 3);
        assert_eq!(path.cost, 2.0);
    }

    #[test]
    fn test_path_around_wall() {
        let mut map = create_test_map();
        add_wall(&mut map, 2, -3, 3);

        let start = GridCoord::new(0, 0);
        let goal = GridCoord::new(4, 0);
        let path = find_path(&map, start, goal).unwrap();

        assert_eq!(path.start(), Some(start));
        assert_eq!(path.goal(), Some(goal));
        for cell in &path.cells {
            assert!(map.cost(*cell).map_or(true, |c| !c.is_impassable()));
        }
        // The detour is longer than the straight line would be
        assert!(path.cost > 4.0);
    }

    #[test]
    fn test_surcharge_forces_detour() {
        let mut map = create_test_map();
        map.insert(GridCoord::new(1, 1), CellCost::new(10.0));

        let path = find_path(&map, GridCoord::new(0, 0), GridCoord::new(2, 2)).unwrap();

        assert!(!path.cells.contains(&GridCoord::new(1, 1)));
        assert!((path.cost - (2.0 + SQRT_2)).abs() < 1e-6);
    }

    #[test]
    fn test_surcharge_added_to_path_cost() {
        // Single-file corridor so the surcharge cannot be dodged
        let mut map = create_test_map();
        map.insert(GridCoord::new(1, 0), CellCost::new(0.5));
        let bounds = GridBounds::new(GridCoord::new(0, 0), GridCoord::new(2, 0));
        let planner = AStarPlanner::new(&map, SearchConfig::default().with_bounds(bounds));

        let path = planner
            .find_path(GridCoord::new(0, 0), GridCoord::new(2, 0))
            .unwrap();

        assert!((path.cost - 2.5).abs() < 1e-6);
    }

    #[test]
    fn test_no_path_walled_in_start() {
        let mut map = create_test_map();
        for neighbor in GridCoord::new(0, 0).neighbors_8() {
            map.block(neighbor);
        }

        let err = find_path(&map, GridCoord::new(0, 0), GridCoord::new(5, 5)).unwrap_err();

        assert!(matches!(err, SearchError::NoPath { .. }));
    }

    #[test]
    fn test_no_path_enclosed_goal_within_bounds() {
        let mut map = create_test_map();
        let goal = GridCoord::new(5, 5);
        for neighbor in goal.neighbors_8() {
            map.block(neighbor);
        }
        let bounds = GridBounds::new(GridCoord::new(0, 0), GridCoord::new(8, 8));
        let planner = AStarPlanner::new(&map, SearchConfig::default().with_bounds(bounds));

        let err = planner.find_path(GridCoord::new(0, 0), goal).unwrap_err();

        assert!(matches!(err, SearchError::NoPath { .. }));
    }

    #[test]
    fn test_unbounded_search_hits_budget() {
        // Without bounds the free space around a sealed goal never runs out,
        // so the expansion budget is what stops the search
        let mut map = create_test_map();
        let goal = GridCoord::new(5, 5);
        for neighbor in goal.neighbors_8() {
            map.block(neighbor);
        }
        let planner = AStarPlanner::new(&map, SearchConfig::default().with_max_expansions(2_000));

        let err = planner.find_path(GridCoord::new(0, 0), goal).unwrap_err();

        assert_eq!(err, SearchError::BudgetExhausted { budget: 2_000 });
    }

    #[test]
    fn test_start_blocked() {
        let mut map = create_test_map();
        map.block(GridCoord::new(0, 0));

        let err = find_path(&map, GridCoord::new(0, 0), GridCoord::new(5, 0)).unwrap_err();

        assert_eq!(err, SearchError::StartBlocked(GridCoord::new(0, 0)));
    }

    #[test]
    fn test_goal_blocked() {
        let mut map = create_test_map();
        map.block(GridCoord::new(5, 0));

        let err = find_path(&map, GridCoord::new(0, 0), GridCoord::new(5, 0)).unwrap_err();

        assert_eq!(err, SearchError::GoalBlocked(GridCoord::new(5, 0)));
    }

    #[test]
    fn test_goal_outside_bounds_is_blocked() {
        let map = create_test_map();
        let bounds = GridBounds::new(GridCoord::new(0, 0), GridCoord::new(4, 4));
        let planner = AStarPlanner::new(&map, SearchConfig::default().with_bounds(bounds));

        let err = planner
            .find_path(GridCoord::new(0, 0), GridCoord::new(10, 0))
            .unwrap_err();

        assert_eq!(err, SearchError::GoalBlocked(GridCoord::new(10, 0)));
    }

    #[test]
    fn test_negative_cost_rejected() {
        let mut map = create_test_map();
        map.insert(GridCoord::new(1, 0), CellCost::new(-1.0));

        let err = find_path(&map, GridCoord::new(0, 0), GridCoord::new(5, 0)).unwrap_err();

        assert_eq!(
            err,
            SearchError::NegativeCost {
                coord: GridCoord::new(1, 0),
                cost: -1.0
            }
        );
    }

    #[test]
    fn test_negative_cost_at_start_rejected() {
        let mut map = create_test_map();
        map.insert(GridCoord::new(0, 0), CellCost::new(-2.0));

        let err = find_path(&map, GridCoord::new(0, 0), GridCoord::new(5, 0)).unwrap_err();

        assert!(matches!(err, SearchError::NegativeCost { .. }));
    }

    #[test]
    fn test_octile_heuristic_finds_same_cost() {
        let mut map = create_test_map();
        add_wall(&mut map, 3, -2, 4);

        let start = GridCoord::new(0, 0);
        let goal = GridCoord::new(6, 1);
        let euclid = find_path(&map, start, goal).unwrap();

        let config = SearchConfig::default().with_heuristic(Heuristic::Octile);
        let octile = AStarPlanner::new(&map, config)
            .find_path(start, goal)
            .unwrap();

        assert!((euclid.cost - octile.cost).abs() < 1e-4);
    }

    #[test]
    fn test_observer_sees_each_cell_once() {
        struct Recorder(Vec<GridCoord>);
        impl SearchObserver for Recorder {
            fn expanded(&mut self, event: &Expansion) {
                self.0.push(event.coord);
            }
        }

        let mut map = create_test_map();
        add_wall(&mut map, 2, -2, 2);
        let planner = AStarPlanner::with_defaults(&map);
        let mut recorder = Recorder(Vec::new());

        planner
            .find_path_observed(GridCoord::new(0, 0), GridCoord::new(4, 0), &mut recorder)
            .unwrap();

        let mut seen = std::collections::HashSet::new();
        for coord in &recorder.0 {
            assert!(seen.insert(*coord), "cell {} expanded twice", coord);
        }
        assert_eq!(recorder.0.first(), Some(&GridCoord::new(0, 0)));
    }

    #[test]
    fn test_path_exists() {
        let mut map = create_test_map();
        assert!(path_exists(&map, GridCoord::new(0, 0), GridCoord::new(3, 3)));

        for neighbor in GridCoord::new(0, 0).neighbors_8() {
            map.block(neighbor);
        }
        assert!(!path_exists(&map, GridCoord::new(0, 0), GridCoord::new(3, 3)));
    }

    #[test]
    fn test_repeated_search_is_identical() {
        let mut map = create_test_map();
        add_wall(&mut map, 2, -1, 3);
        map.insert(GridCoord::new(1, -1), CellCost::new(0.25));
        let planner = AStarPlanner::with_defaults(&map);

        let first = planner
            .find_path(GridCoord::new(0, 0), GridCoord::new(5, 0))
            .unwrap();
        let second = planner
            .find_path(GridCoord::new(0, 0), GridCoord::new(5, 0))
            .unwrap();

        assert_eq!(first.cells, second.cells);
        assert_eq!(first.cost, second.cost);
        assert_eq!(first.expanded, second.expanded);
    }
}
