//! # find_my_path
//!
//! Traced shortest-path search on small square grids with 4-directional,
//! uniform-cost movement. A single best-first routine implements both
//! [Dijkstra's algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm)
//! and [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) with the
//! [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) as heuristic.
//! Besides the path, every search records the order in which cells were put on the
//! frontier and finalized, so that the exploration can be replayed step by step.
//!
//! The [search] function is the core; [Board], [Replay] and [Visualizer] hold the
//! editing and playback state of an interactive front end around it.
//!
//! ```
//! use find_my_path::{search, Algorithm, Cell, SearchRequest};
//!
//! let request = SearchRequest::new(4, Cell::new(0, 0), Cell::new(0, 3), Algorithm::AStar);
//! let result = search(&request).unwrap();
//! assert!(result.found);
//! assert_eq!(result.path_length, 3);
//! ```
pub mod board;
pub mod cell;
pub mod components;
pub mod error;
pub mod replay;
pub mod search;
pub mod solver;
pub mod stats;
mod trace_search;
pub mod visualizer;

pub use board::{Board, BoardView, Edit, GridSize};
pub use cell::Cell;
pub use components::Components;
pub use error::{BoardError, SearchError};
pub use replay::{CellStatus, Overlay, Replay, ReplaySpeed, ReplayStep};
pub use search::{search, Algorithm, SearchRequest, SearchResult, TraceEvent, TraceKind};
pub use stats::{Notice, RunStats};
pub use visualizer::Visualizer;

/// Cost of a single move between two neighbouring cells.
pub const C: i32 = 1;
/// Size of the inline buffer used for neighbourhoods and successors.
pub const N_SMALLVEC_SIZE: usize = 4;
