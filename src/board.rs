use core::fmt;
use fxhash::FxHashSet;
use itertools::iproduct;
use log::info;
use rand::Rng;
use std::str::FromStr;

use crate::cell::Cell;
use crate::components::Components;
use crate::error::BoardError;
use crate::replay::{CellStatus, Overlay};
use crate::search::{Algorithm, SearchRequest};

/// The board sizes offered to users.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GridSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl GridSize {
    pub const ALL: [GridSize; 3] = [GridSize::Small, GridSize::Medium, GridSize::Large];

    pub fn cells(&self) -> usize {
        match self {
            GridSize::Small => 10,
            GridSize::Medium => 20,
            GridSize::Large => 30,
        }
    }

    /// Chance for a cell to become a wall when walls are randomized. Larger boards
    /// get sparser walls.
    pub fn wall_density(&self) -> f64 {
        wall_density(self.cells())
    }
}

impl TryFrom<usize> for GridSize {
    type Error = BoardError;

    fn try_from(cells: usize) -> Result<GridSize, BoardError> {
        GridSize::ALL
            .into_iter()
            .find(|g| g.cells() == cells)
            .ok_or(BoardError::UnsupportedGridSize(cells))
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{0} x {0}", self.cells())
    }
}

fn wall_density(size: usize) -> f64 {
    if size >= 25 {
        0.22
    } else {
        0.28
    }
}

/// What a click on the board changed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Edit {
    StartPlaced,
    StartRemoved,
    EndPlaced,
    EndRemoved,
    WallAdded,
    WallRemoved,
}

/// An editable square board: a size, optional start and end cells and a set of
/// walls. Start and end are never walls.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    size: usize,
    start: Option<Cell>,
    end: Option<Cell>,
    walls: FxHashSet<Cell>,
}

impl Board {
    pub fn new(size: usize) -> Board {
        Board {
            size,
            ..Board::default()
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn start(&self) -> Option<Cell> {
        self.start
    }

    pub fn end(&self) -> Option<Cell> {
        self.end
    }

    pub fn walls(&self) -> &FxHashSet<Cell> {
        &self.walls
    }

    pub fn is_wall(&self, cell: &Cell) -> bool {
        self.walls.contains(cell)
    }

    pub fn is_endpoint(&self, cell: &Cell) -> bool {
        self.start.as_ref() == Some(cell) || self.end.as_ref() == Some(cell)
    }

    /// All cells of the board in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let n = self.size as i32;
        iproduct!(0..n, 0..n).map(|(row, col)| Cell::new(row, col))
    }

    fn check_bounds(&self, cell: Cell) -> Result<(), BoardError> {
        if cell.in_bounds(self.size) {
            Ok(())
        } else {
            Err(BoardError::OutOfBounds {
                cell,
                size: self.size,
            })
        }
    }

    /// Applies a click: removes the endpoint under the cursor if there is one,
    /// otherwise places the start, then the end, and once both exist toggles walls.
    pub fn click(&mut self, cell: Cell) -> Result<Edit, BoardError> {
        self.check_bounds(cell)?;
        let edit = if self.start == Some(cell) {
            self.start = None;
            Edit::StartRemoved
        } else if self.end == Some(cell) {
            self.end = None;
            Edit::EndRemoved
        } else if self.start.is_none() {
            self.walls.remove(&cell);
            self.start = Some(cell);
            Edit::StartPlaced
        } else if self.end.is_none() {
            self.walls.remove(&cell);
            self.end = Some(cell);
            Edit::EndPlaced
        } else if self.walls.remove(&cell) {
            Edit::WallRemoved
        } else {
            self.walls.insert(cell);
            Edit::WallAdded
        };
        Ok(edit)
    }

    /// Places the start, clearing any wall on the cell.
    pub fn set_start(&mut self, cell: Cell) -> Result<(), BoardError> {
        self.check_bounds(cell)?;
        self.walls.remove(&cell);
        if self.end == Some(cell) {
            self.end = None;
        }
        self.start = Some(cell);
        Ok(())
    }

    /// Places the end, clearing any wall on the cell.
    pub fn set_end(&mut self, cell: Cell) -> Result<(), BoardError> {
        self.check_bounds(cell)?;
        self.walls.remove(&cell);
        if self.start == Some(cell) {
            self.start = None;
        }
        self.end = Some(cell);
        Ok(())
    }

    /// Sets or clears a wall. Walls cannot be put on the start or end.
    pub fn set_wall(&mut self, cell: Cell, blocked: bool) -> Result<bool, BoardError> {
        self.check_bounds(cell)?;
        if blocked && self.is_endpoint(&cell) {
            return Ok(false);
        }
        Ok(if blocked {
            self.walls.insert(cell)
        } else {
            self.walls.remove(&cell)
        })
    }

    /// Removes start, end and all walls.
    pub fn clear(&mut self) {
        self.start = None;
        self.end = None;
        self.walls.clear();
    }

    /// Replaces the walls by random ones. Every cell except start and end becomes a
    /// wall independently, with a density depending on the board size.
    pub fn randomize_walls<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let density = wall_density(self.size);
        let walls: FxHashSet<Cell> = self
            .cells()
            .filter(|c| !self.is_endpoint(c))
            .filter(|_| rng.gen_bool(density))
            .collect();
        info!(
            "Randomized {} walls on a {}x{} board",
            walls.len(),
            self.size,
            self.size
        );
        self.walls = walls;
    }

    /// Builds the search request for the current board.
    pub fn request(&self, algorithm: Algorithm) -> Result<SearchRequest, BoardError> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Ok(SearchRequest {
                size: self.size,
                start,
                end,
                walls: self.walls.clone(),
                algorithm,
            }),
            _ => Err(BoardError::MissingEndpoints),
        }
    }

    pub fn components(&self) -> Components {
        Components::generate(self.size, &self.walls)
    }

    /// Checks if the end can be reached from the start at all.
    pub fn reachable(&self) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => self.components().reachable(&start, &end),
            _ => false,
        }
    }

    /// What a cell shows without any overlay.
    pub fn status(&self, cell: &Cell) -> CellStatus {
        if self.start.as_ref() == Some(cell) {
            CellStatus::Start
        } else if self.end.as_ref() == Some(cell) {
            CellStatus::End
        } else if self.is_wall(cell) {
            CellStatus::Wall
        } else {
            CellStatus::Empty
        }
    }

    /// Renders the board with an overlay painted over its open cells.
    pub fn view<'a>(&'a self, overlay: &'a Overlay) -> BoardView<'a> {
        BoardView {
            board: self,
            overlay: Some(overlay),
        }
    }
}

/// A board together with the overlay of a replay, ready to be printed.
pub struct BoardView<'a> {
    board: &'a Board,
    overlay: Option<&'a Overlay>,
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let n = self.board.size as i32;
        for row in 0..n {
            let line: String = (0..n)
                .map(|col| {
                    let cell = Cell::new(row, col);
                    let status = match self.board.status(&cell) {
                        CellStatus::Empty => self
                            .overlay
                            .and_then(|o| o.get(&cell))
                            .unwrap_or(CellStatus::Empty),
                        s => s,
                    };
                    status.symbol()
                })
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let view = BoardView {
            board: self,
            overlay: None,
        };
        fmt::Display::fmt(&view, f)
    }
}

/// Parses the layout printed by [Board]'s `Display`: one line per row, `.` for open
/// cells, `#` for walls, `S` and `E` for the endpoints. Blank lines and surrounding
/// whitespace are ignored.
impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Board, BoardError> {
        let rows: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let size = rows.len();
        let mut board = Board::new(size);
        for (row, line) in rows.iter().enumerate() {
            let layout_error = |reason: String| BoardError::Layout {
                line: row + 1,
                reason,
            };
            if line.chars().count() != size {
                return Err(layout_error(format!(
                    "expected {} cells, found {}",
                    size,
                    line.chars().count()
                )));
            }
            for (col, symbol) in line.chars().enumerate() {
                let cell = Cell::new(row as i32, col as i32);
                match symbol {
                    '.' => {}
                    '#' => {
                        board.walls.insert(cell);
                    }
                    'S' if board.start.is_none() => board.start = Some(cell),
                    'E' if board.end.is_none() => board.end = Some(cell),
                    'S' | 'E' => {
                        return Err(layout_error(format!("second '{}' at {}", symbol, cell)))
                    }
                    other => return Err(layout_error(format!("unknown symbol '{}'", other))),
                }
            }
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn click_sequence() {
        let mut board = Board::new(3);
        assert_eq!(board.click(Cell::new(0, 0)), Ok(Edit::StartPlaced));
        assert_eq!(board.click(Cell::new(2, 2)), Ok(Edit::EndPlaced));
        assert_eq!(board.click(Cell::new(1, 1)), Ok(Edit::WallAdded));
        assert!(board.is_wall(&Cell::new(1, 1)));
        assert_eq!(board.click(Cell::new(1, 1)), Ok(Edit::WallRemoved));
        assert_eq!(board.click(Cell::new(0, 0)), Ok(Edit::StartRemoved));
        // The next click places the start again rather than a wall.
        assert_eq!(board.click(Cell::new(1, 0)), Ok(Edit::StartPlaced));
        assert_eq!(board.click(Cell::new(2, 2)), Ok(Edit::EndRemoved));
        assert_eq!(board.end(), None);
        assert_eq!(
            board.click(Cell::new(3, 0)),
            Err(BoardError::OutOfBounds {
                cell: Cell::new(3, 0),
                size: 3
            })
        );
    }

    #[test]
    fn endpoint_replaces_wall() {
        let mut board: Board = "#..\n...\n...".parse().unwrap();
        board.click(Cell::new(0, 0)).unwrap();
        assert_eq!(board.start(), Some(Cell::new(0, 0)));
        assert!(!board.is_wall(&Cell::new(0, 0)));
        assert_eq!(board.set_wall(Cell::new(0, 0), true), Ok(false));
        assert!(!board.is_wall(&Cell::new(0, 0)));
    }

    #[test]
    fn request_requires_endpoints() {
        let mut board = Board::new(5);
        assert_eq!(
            board.request(Algorithm::AStar),
            Err(BoardError::MissingEndpoints)
        );
        board.set_start(Cell::new(0, 0)).unwrap();
        assert_eq!(
            board.request(Algorithm::AStar),
            Err(BoardError::MissingEndpoints)
        );
        board.set_end(Cell::new(4, 4)).unwrap();
        let request = board.request(Algorithm::UniformCost).unwrap();
        assert_eq!(request.size, 5);
        assert_eq!(request.start, Cell::new(0, 0));
        assert_eq!(request.end, Cell::new(4, 4));
        assert_eq!(request.algorithm, Algorithm::UniformCost);
    }

    #[test]
    fn parse_and_display_round_trip() {
        let layout = "S.#\n.##\n..E\n";
        let board: Board = layout.parse().unwrap();
        assert_eq!(board.size(), 3);
        assert_eq!(board.start(), Some(Cell::new(0, 0)));
        assert_eq!(board.end(), Some(Cell::new(2, 2)));
        assert_eq!(board.walls().len(), 3);
        assert_eq!(board.to_string(), layout);
        assert!(board.reachable());
    }

    #[test]
    fn parse_errors() {
        assert!(matches!(
            "S..\n..".parse::<Board>(),
            Err(BoardError::Layout { line: 1, .. })
        ));
        assert!(matches!(
            "S.\nSE".parse::<Board>(),
            Err(BoardError::Layout { line: 2, .. })
        ));
        assert!(matches!(
            "S?\n.E".parse::<Board>(),
            Err(BoardError::Layout { line: 1, .. })
        ));
    }

    #[test]
    fn randomized_walls_spare_endpoints() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut board = Board::new(GridSize::Large.cells());
        board.set_start(Cell::new(0, 0)).unwrap();
        board.set_end(Cell::new(29, 29)).unwrap();
        for _ in 0..20 {
            board.randomize_walls(&mut rng);
            assert!(!board.is_wall(&Cell::new(0, 0)));
            assert!(!board.is_wall(&Cell::new(29, 29)));
        }
        // About 22% of 898 cells.
        let n = board.walls().len();
        assert!(n > 100 && n < 300, "{} walls", n);
    }

    #[test]
    fn grid_sizes() {
        assert_eq!(GridSize::default().cells(), 20);
        assert_eq!(GridSize::try_from(30), Ok(GridSize::Large));
        assert_eq!(
            GridSize::try_from(25),
            Err(BoardError::UnsupportedGridSize(25))
        );
        assert_eq!(GridSize::Small.wall_density(), 0.28);
        assert_eq!(GridSize::Large.wall_density(), 0.22);
        assert_eq!(GridSize::Small.to_string(), "10 x 10");
    }

    #[test]
    fn view_paints_open_cells_only() {
        let board: Board = "S.\n#E".parse().unwrap();
        let mut overlay = Overlay::new(2);
        overlay.set(&Cell::new(0, 1), CellStatus::Path);
        overlay.set(&Cell::new(0, 0), CellStatus::Visited);
        overlay.set(&Cell::new(1, 0), CellStatus::Frontier);
        assert_eq!(board.view(&overlay).to_string(), "S*\n#E\n");
    }
}
