use crate::cell::Cell;
use crate::error::SearchError;
use crate::search::{Algorithm, SearchRequest, SearchResult, TraceEvent};
use crate::trace_search::trace_search;
use crate::{C, N_SMALLVEC_SIZE};
use log::{debug, info};
use smallvec::SmallVec;
use std::time::Instant;

pub mod astar;
pub mod dijkstra;

/// A best-first grid search, characterised by its heuristic. Successor generation,
/// trace recording and path reconstruction are shared by all solvers.
pub trait GridSolver {
    fn algorithm(&self) -> Algorithm;

    fn heuristic(&self, p1: &Cell, p2: &Cell) -> i32;

    /// Cost of the cheapest unobstructed walk between two cells.
    fn cost(&self, p1: &Cell, p2: &Cell) -> i32 {
        p1.manhattan_distance(p2) * C
    }

    /// In-bounds orthogonal neighbours of `node` that are not walls.
    fn successors(
        &self,
        request: &SearchRequest,
        node: &Cell,
    ) -> SmallVec<[(Cell, i32); N_SMALLVEC_SIZE]> {
        node.neighbours_in(request.size)
            .into_iter()
            .filter(|n| !request.walls.contains(n))
            .map(|n| (n, C))
            .collect()
    }

    /// Sums the move costs along a path.
    fn get_path_cost(&self, path: &[Cell]) -> i32 {
        path.windows(2).map(|w| self.cost(&w[0], &w[1])).sum()
    }

    /// Validates the request and searches from its start to its end, recording
    /// the exploration trace.
    fn solve(&self, request: &SearchRequest) -> Result<SearchResult, SearchError> {
        request.validate()?;
        let start = request.start;
        let end = request.end;
        let mut trace = Vec::new();
        let before = Instant::now();
        let exploration = trace_search(
            &start,
            |node| self.successors(request, node),
            |point| self.heuristic(point, &end),
            |point| *point == end,
            |node, kind| trace.push(TraceEvent { cell: *node, kind }),
        );
        let elapsed = before.elapsed();
        let (path, found) = match exploration.path {
            Some((path, _cost)) => (path, true),
            None => (Vec::new(), false),
        };
        if found {
            debug!(
                "{:?}: path of {} steps from {} to {}, {} cells finalized in {:.2?}",
                self.algorithm(),
                path.len() - 1,
                start,
                end,
                exploration.finalized,
                elapsed
            );
        } else {
            info!(
                "{:?}: {} is not reachable from {}, {} cells explored",
                self.algorithm(),
                end,
                start,
                exploration.finalized
            );
        }
        Ok(SearchResult {
            algorithm: self.algorithm(),
            path_length: path.len().saturating_sub(1),
            trace,
            path,
            visited_count: exploration.finalized,
            found,
            elapsed,
        })
    }
}
