//! Error types for marga-plan

use thiserror::Error;

use crate::core::GridCoord;

/// Search error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    /// The frontier emptied with the goal unreached.
    ///
    /// This is the normal outcome when obstacles seal the goal off from the
    /// start, not a defect in the inputs.
    #[error("no path from {start} to {goal} ({expanded} cells expanded)")]
    NoPath {
        start: GridCoord,
        goal: GridCoord,
        expanded: usize,
    },

    /// Start cell is impassable or outside the configured bounds
    #[error("start cell {0} is not traversable")]
    StartBlocked(GridCoord),

    /// Goal cell is impassable or outside the configured bounds
    #[error("goal cell {0} is not traversable")]
    GoalBlocked(GridCoord),

    /// The expansion budget ran out before the goal was reached
    #[error("search budget of {budget} expansions exhausted")]
    BudgetExhausted { budget: usize },

    /// The cost map returned a negative surcharge
    #[error("negative cost {cost} at cell {coord}; cell costs must be non-negative")]
    NegativeCost { coord: GridCoord, cost: f32 },
}

pub type Result<T> = std::result::Result<T, SearchError>;
