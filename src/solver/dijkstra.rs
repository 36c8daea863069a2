use crate::cell::Cell;
use crate::search::Algorithm;
use crate::solver::GridSolver;

/// Uniform-cost search: A* without a heuristic, i.e. Dijkstra's algorithm on a
/// unit-weight grid graph.
#[derive(Clone, Copy, Debug, Default)]
pub struct DijkstraSolver;

impl GridSolver for DijkstraSolver {
    fn algorithm(&self) -> Algorithm {
        Algorithm::UniformCost
    }

    fn heuristic(&self, _: &Cell, _: &Cell) -> i32 {
        0
    }
}
