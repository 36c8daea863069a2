//! The search entry point and the data it consumes and produces.

use core::fmt;
use fxhash::FxHashSet;
use std::time::Duration;

use crate::cell::Cell;
use crate::error::SearchError;
use crate::solver::{astar::AstarSolver, dijkstra::DijkstraSolver, GridSolver};

/// Which priority the frontier is ordered by.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// Priority is the cost from the start (Dijkstra).
    UniformCost,
    /// Priority is the cost from the start plus the Manhattan distance to the end.
    #[default]
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::AStar, Algorithm::UniformCost];

    /// The name shown to users.
    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::UniformCost => "Dijkstra",
            Algorithm::AStar => "A*",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything a single search needs. Built fresh for every run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchRequest {
    pub size: usize,
    pub start: Cell,
    pub end: Cell,
    pub walls: FxHashSet<Cell>,
    pub algorithm: Algorithm,
}

impl SearchRequest {
    /// A request on an open grid.
    pub fn new(size: usize, start: Cell, end: Cell, algorithm: Algorithm) -> SearchRequest {
        SearchRequest {
            size,
            start,
            end,
            walls: FxHashSet::default(),
            algorithm,
        }
    }

    pub fn with_walls<I: IntoIterator<Item = Cell>>(mut self, walls: I) -> SearchRequest {
        self.walls.extend(walls);
        self
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> SearchRequest {
        self.algorithm = algorithm;
        self
    }

    /// Checks that the grid is non-empty and that both endpoints are open cells on it.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.size == 0 {
            return Err(SearchError::InvalidGridSize(self.size));
        }
        for cell in [self.start, self.end] {
            if !cell.in_bounds(self.size) {
                return Err(SearchError::OutOfBounds {
                    cell,
                    size: self.size,
                });
            }
            if self.walls.contains(&cell) {
                return Err(SearchError::EndpointOnWall(cell));
            }
        }
        Ok(())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TraceKind {
    /// The cell's cost from the start was settled.
    Visited,
    /// The cell was pushed on the frontier with a new best cost.
    Frontier,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraceEvent {
    pub cell: Cell,
    pub kind: TraceKind,
}

/// Outcome of a search. Never modified after [search] returns it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    pub algorithm: Algorithm,
    /// Exploration events in the order they happened.
    pub trace: Vec<TraceEvent>,
    /// Start to end inclusive; empty if the end was not reached.
    pub path: Vec<Cell>,
    /// Number of finalized cells, start included.
    pub visited_count: usize,
    /// Number of moves along `path`.
    pub path_length: usize,
    pub found: bool,
    /// Wall-clock time spent searching. Informational only.
    pub elapsed: Duration,
}

impl SearchResult {
    pub fn visited(&self) -> impl Iterator<Item = Cell> + '_ {
        self.events(TraceKind::Visited)
    }

    pub fn frontier(&self) -> impl Iterator<Item = Cell> + '_ {
        self.events(TraceKind::Frontier)
    }

    fn events(&self, kind: TraceKind) -> impl Iterator<Item = Cell> + '_ {
        self.trace
            .iter()
            .filter(move |e| e.kind == kind)
            .map(|e| e.cell)
    }
}

/// Computes a shortest path from the request's start to its end with the requested
/// algorithm, recording every frontier push and finalization along the way.
///
/// An unreachable end is not an error: the result then has `found == false` and an
/// empty path. Requests whose endpoints are off the grid or on a wall are rejected.
pub fn search(request: &SearchRequest) -> Result<SearchResult, SearchError> {
    match request.algorithm {
        Algorithm::UniformCost => DijkstraSolver.solve(request),
        Algorithm::AStar => AstarSolver.solve(request),
    }
}
