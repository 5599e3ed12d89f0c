//! Hooks into the expansion loop.

use crate::core::GridCoord;

/// One finalized expansion
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Expansion {
    /// The cell whose lowest cost just became final
    pub coord: GridCoord,
    /// Cost from the start
    pub g_cost: f32,
    /// Heuristic estimate to the goal
    pub h_cost: f32,
    /// g_cost + h_cost
    pub f_cost: f32,
}

/// Receives one event per cell the search finalizes, in expansion order.
///
/// Implementations drive progress displays, search visualizations, or test
/// assertions; the search itself never prints.
pub trait SearchObserver {
    /// Called after a cell is marked visited and before its neighbors are
    /// examined
    fn expanded(&mut self, event: &Expansion);
}

/// Observer that discards all events
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {
    fn expanded(&mut self, _event: &Expansion) {}
}
