use core::fmt;
use grid_util::point::Point;
use smallvec::{smallvec, SmallVec};

use crate::N_SMALLVEC_SIZE;

/// A cell of a square grid, addressed by row and column. Coordinates are signed so
/// that positions just outside the grid can be represented and rejected.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub const fn new(row: i32, col: i32) -> Cell {
        Cell { row, col }
    }

    pub fn manhattan_distance(&self, other: &Cell) -> i32 {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }

    /// The four orthogonal neighbours, in the order down, up, right, left. Not
    /// filtered by any bounds; see [neighbours_in](Self::neighbours_in).
    pub fn neumann_neighborhood(&self) -> SmallVec<[Cell; N_SMALLVEC_SIZE]> {
        smallvec![
            Cell::new(self.row + 1, self.col),
            Cell::new(self.row - 1, self.col),
            Cell::new(self.row, self.col + 1),
            Cell::new(self.row, self.col - 1),
        ]
    }

    /// The orthogonal neighbours that lie on a grid of the given size.
    pub fn neighbours_in(&self, size: usize) -> SmallVec<[Cell; N_SMALLVEC_SIZE]> {
        self.neumann_neighborhood()
            .into_iter()
            .filter(|c| c.in_bounds(size))
            .collect()
    }

    pub fn in_bounds(&self, size: usize) -> bool {
        let size = size as i64;
        (0..size).contains(&(self.row as i64)) && (0..size).contains(&(self.col as i64))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Cell {
        Cell::new(row, col)
    }
}

/// Columns map to `x` and rows to `y`.
impl From<Cell> for Point {
    fn from(cell: Cell) -> Point {
        Point::new(cell.col, cell.row)
    }
}

impl From<Point> for Cell {
    fn from(point: Point) -> Cell {
        Cell::new(point.y, point.x)
    }
}
