use core::fmt;
use log::{info, warn};
use rand::Rng;

use crate::board::{Board, Edit, GridSize};
use crate::cell::Cell;
use crate::error::BoardError;
use crate::replay::{Replay, ReplaySpeed};
use crate::search::{search, Algorithm};
use crate::stats::{Notice, RunStats};

/// The state behind an interactive pathfinding page: the board being edited, the
/// chosen algorithm and replay speed, and the outcome of the last run.
///
/// At most one replay is in flight: [run](Self::run) hands out a [Replay] and locks
/// the visualizer until the replay is given back through [finish](Self::finish).
#[derive(Clone, Debug)]
pub struct Visualizer {
    board: Board,
    grid_size: GridSize,
    algorithm: Algorithm,
    speed: ReplaySpeed,
    animating: bool,
    stats: Option<RunStats>,
    notice: Option<Notice>,
}

impl Visualizer {
    pub fn new(grid_size: GridSize) -> Visualizer {
        Visualizer {
            board: Board::new(grid_size.cells()),
            grid_size,
            algorithm: Algorithm::default(),
            speed: ReplaySpeed::default(),
            animating: false,
            stats: None,
            notice: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn grid_size(&self) -> GridSize {
        self.grid_size
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn speed(&self) -> ReplaySpeed {
        self.speed
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn stats(&self) -> Option<&RunStats> {
        self.stats.as_ref()
    }

    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    /// Fails while a replay is in flight; otherwise forgets the outcome of the
    /// previous run.
    fn begin_edit(&mut self) -> Result<(), BoardError> {
        if self.animating {
            return Err(BoardError::ReplayInProgress);
        }
        self.stats = None;
        self.notice = None;
        Ok(())
    }

    pub fn click(&mut self, cell: Cell) -> Result<Edit, BoardError> {
        self.begin_edit()?;
        self.board.click(cell)
    }

    pub fn clear(&mut self) -> Result<(), BoardError> {
        self.begin_edit()?;
        self.board.clear();
        Ok(())
    }

    pub fn randomize_walls<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        self.begin_edit()?;
        self.board.randomize_walls(rng);
        Ok(())
    }

    /// Switches to another board size, starting over with an empty board.
    pub fn resize(&mut self, grid_size: GridSize) -> Result<(), BoardError> {
        self.begin_edit()?;
        self.grid_size = grid_size;
        self.board = Board::new(grid_size.cells());
        Ok(())
    }

    pub fn set_algorithm(&mut self, algorithm: Algorithm) -> Result<(), BoardError> {
        if self.animating {
            return Err(BoardError::ReplayInProgress);
        }
        self.algorithm = algorithm;
        Ok(())
    }

    pub fn set_speed(&mut self, speed: ReplaySpeed) -> Result<(), BoardError> {
        if self.animating {
            return Err(BoardError::ReplayInProgress);
        }
        self.speed = speed;
        Ok(())
    }

    /// Searches the current board and returns the replay of the search. The
    /// visualizer stays locked until the replay is passed to [finish](Self::finish).
    pub fn run(&mut self) -> Result<Replay, BoardError> {
        self.begin_edit()?;
        let request = match self.board.request(self.algorithm) {
            Ok(request) => request,
            Err(e) => {
                if e == BoardError::MissingEndpoints {
                    self.notice = Some(Notice::MissingEndpoints);
                }
                return Err(e);
            }
        };
        let reachable = self.board.components().reachable(&request.start, &request.end);
        if reachable {
            info!("{} is reachable from {}, computing path", request.end, request.start);
        } else {
            info!("{} is not reachable from {}", request.end, request.start);
        }
        let result = search(&request)?;
        if reachable && !result.found {
            warn!("Reachable goal could not be pathed to, is reachable graph correct?");
        }
        self.animating = true;
        Ok(Replay::new(
            result,
            request.start,
            request.end,
            request.size,
            self.speed,
        ))
    }

    /// Ends the replay, whether it played to the end or was cancelled, and publishes
    /// the statistics of its search.
    pub fn finish(&mut self, replay: Replay) -> &RunStats {
        self.animating = false;
        let result = replay.into_result();
        if !result.found {
            self.notice = Some(Notice::NoPath);
        }
        self.stats.insert(RunStats::from(&result))
    }
}

impl Default for Visualizer {
    fn default() -> Visualizer {
        Visualizer::new(GridSize::default())
    }
}

impl fmt::Display for Visualizer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "{} | {} | {} ms per step",
            self.algorithm,
            self.grid_size,
            self.speed.as_millis()
        )?;
        write!(f, "{}", self.board)?;
        if let Some(stats) = &self.stats {
            write!(f, "{}", stats)?;
        }
        if let Some(notice) = &self.notice {
            writeln!(f, "{}", notice)?;
        }
        Ok(())
    }
}
