//! Error types.
//!
//! Running out of cells to explore is not an error: a search that cannot reach its
//! goal returns a result with `found == false`. The errors here cover requests that
//! break the preconditions of a search ([SearchError]) and editing or running a
//! board in a state that does not allow it ([BoardError]).

use thiserror::Error;

use crate::cell::Cell;

/// A search request that cannot be run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("grid size must be positive, got {0}")]
    InvalidGridSize(usize),

    #[error("cell {cell} lies outside the {size}x{size} grid")]
    OutOfBounds { cell: Cell, size: usize },

    /// The start or the end of the request is a wall.
    #[error("endpoint {0} is a wall")]
    EndpointOnWall(Cell),
}

/// Failure of a board or visualizer operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("unsupported grid size {0}, expected one of 10, 20 or 30")]
    UnsupportedGridSize(usize),

    #[error("cell {cell} lies outside the {size}x{size} board")]
    OutOfBounds { cell: Cell, size: usize },

    #[error("Place both start and end nodes before running a search.")]
    MissingEndpoints,

    /// The board is locked while a replay is playing.
    #[error("a replay is still in progress")]
    ReplayInProgress,

    #[error("invalid board layout on line {line}: {reason}")]
    Layout { line: usize, reason: String },

    #[error(transparent)]
    Search(#[from] SearchError),
}
