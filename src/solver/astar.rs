use crate::cell::Cell;
use crate::search::Algorithm;
use crate::solver::GridSolver;

/// A* with the Manhattan distance to the goal as heuristic, which is admissible and
/// consistent for 4-directional unit-cost moves.
#[derive(Clone, Copy, Debug, Default)]
pub struct AstarSolver;

impl GridSolver for AstarSolver {
    fn algorithm(&self) -> Algorithm {
        Algorithm::AStar
    }

    /// Just the unobstructed cost.
    fn heuristic(&self, p1: &Cell, p2: &Cell) -> i32 {
        self.cost(p1, p2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{SearchRequest, TraceKind};

    /// Asserts that the case in which start and goal are equal is handled correctly.
    #[test]
    fn equal_start_goal() {
        let start = Cell::new(0, 0);
        let request = SearchRequest::new(1, start, start, Algorithm::AStar);
        let result = AstarSolver.solve(&request).unwrap();
        assert!(result.found);
        assert_eq!(result.path, vec![start]);
        assert_eq!(result.path_length, 0);
        assert!(result.trace.is_empty());
    }

    /// Asserts that the optimal 4 step solution is found around a single obstacle.
    // |S  |
    // | # |
    // |  E|
    #[test]
    fn solve_simple_problem() {
        let request = SearchRequest::new(3, Cell::new(0, 0), Cell::new(2, 2), Algorithm::AStar)
            .with_walls([Cell::new(1, 1)]);
        let result = AstarSolver.solve(&request).unwrap();
        assert!(result.found);
        assert_eq!(result.path_length, 4);
        assert_eq!(AstarSolver.get_path_cost(&result.path), 4);
    }

    /// On an open grid A* heads straight for the goal.
    #[test]
    fn straight_line_visits_only_the_line() {
        let request = SearchRequest::new(10, Cell::new(5, 0), Cell::new(5, 9), Algorithm::AStar);
        let result = AstarSolver.solve(&request).unwrap();
        assert_eq!(result.path_length, 9);
        let visited: Vec<Cell> = result
            .trace
            .iter()
            .filter(|e| e.kind == TraceKind::Visited)
            .map(|e| e.cell)
            .collect();
        assert_eq!(visited, (1..10).map(|c| Cell::new(5, c)).collect::<Vec<_>>());
        assert_eq!(result.visited_count, 10);
    }

    #[test]
    fn heuristic_is_manhattan() {
        assert_eq!(AstarSolver.heuristic(&Cell::new(0, 0), &Cell::new(3, 4)), 7);
        assert_eq!(AstarSolver.heuristic(&Cell::new(2, 2), &Cell::new(2, 2)), 0);
    }
}
