//! # Marga-Plan: Grid Path Search Over Sparse Cost Maps
//!
//! A best-first (A*) search engine that finds minimum-cost paths between
//! cells of an implicitly infinite 2D grid. Traversal costs are supplied
//! sparsely through a lookup trait and queried lazily; the engine never
//! materializes the grid.
//!
//! ## Features
//!
//! - **Sparse, lazy cost model**: only populated cells carry costs; absent
//!   cells are free space, or impassable outside a configured region
//! - **8-connected movement**: axis moves cost 1.0, diagonal moves sqrt(2),
//!   plus the entered cell's surcharge
//! - **Deterministic results**: frontier ties break by lowest g cost, then
//!   insertion order, so equal-cost reruns return the same path
//! - **Typed failures**: blocked endpoints, exhausted budgets, and
//!   disconnected goals are distinct [`SearchError`] variants
//!
//! ## Quick Start
//!
//! ```rust
//! use marga_plan::{find_path, GridCoord, SparseCostMap};
//!
//! let mut map = SparseCostMap::new();
//! map.block(GridCoord::new(1, 0));
//! map.block(GridCoord::new(1, 1));
//!
//! let path = find_path(&map, GridCoord::new(0, 0), GridCoord::new(3, 0)).unwrap();
//! assert_eq!(path.start(), Some(GridCoord::new(0, 0)));
//! assert_eq!(path.goal(), Some(GridCoord::new(3, 0)));
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: fundamental types (coordinates, cell costs, bounds)
//! - [`cost_map`]: the [`CostLookup`] contract and the sparse implementation
//! - [`search`]: the A* engine (frontier, node registry, planner, observer)
//! - [`config`]: serde-facing configuration section
//! - [`error`]: failure taxonomy
//!
//! ## Data Flow
//!
//! ```text
//!   ┌──────────────┐  cost(coord)   ┌──────────────────┐
//!   │  CostLookup  │◄───────────────│   AStarPlanner   │
//!   │ (sparse map) │                │   pop ── expand  │
//!   └──────────────┘                └───┬──────────┬───┘
//!                      push (f, g, seq) │          │ insert / relax
//!                                       ▼          ▼
//!                              ┌────────────┐  ┌──────────────┐
//!                              │  Frontier  │  │ NodeRegistry │
//!                              │ (min-heap) │  │ (node arena) │
//!                              └────────────┘  └──────┬───────┘
//!                                                     │ parent links
//!                                                     ▼
//!                                              ┌─────────────┐
//!                                              │ PlannedPath │
//!                                              └─────────────┘
//! ```

pub mod config;
pub mod core;
pub mod cost_map;
pub mod error;
pub mod search;

// Re-export main types at crate root
pub use crate::config::SearchSection;
pub use crate::core::{costs, CellCost, GridBounds, GridCoord};
pub use crate::cost_map::{CostLookup, SparseCostMap};
pub use crate::error::{Result, SearchError};
pub use crate::search::{
    find_path, path_exists, AStarPlanner, Expansion, Heuristic, NoopObserver, PlannedPath,
    SearchConfig, SearchObserver,
};
