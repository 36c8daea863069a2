//! Step-by-step playback of a finished search.
//!
//! A [Replay] owns the [SearchResult] it plays and hands out one [ReplayStep] at a
//! time: first the trace events in the order the search produced them, then the
//! cells of the path. Each step carries the delay the caller should wait before
//! showing the next one; the replay itself never sleeps. Steps on the start and end
//! cells are skipped so that their markers stay visible.

use grid_util::grid::{Grid, SimpleGrid};
use grid_util::point::Point;
use std::time::Duration;

use crate::cell::Cell;
use crate::search::{SearchResult, TraceKind};

/// What a cell currently shows.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellStatus {
    Empty,
    Wall,
    Start,
    End,
    Visited,
    Frontier,
    Path,
}

impl CellStatus {
    pub fn symbol(&self) -> char {
        match self {
            CellStatus::Empty => '.',
            CellStatus::Wall => '#',
            CellStatus::Start => 'S',
            CellStatus::End => 'E',
            CellStatus::Visited => 'v',
            CellStatus::Frontier => '+',
            CellStatus::Path => '*',
        }
    }
}

impl From<TraceKind> for CellStatus {
    fn from(kind: TraceKind) -> CellStatus {
        match kind {
            TraceKind::Visited => CellStatus::Visited,
            TraceKind::Frontier => CellStatus::Frontier,
        }
    }
}

/// Per-cell statuses painted over a board during playback.
#[derive(Clone, Debug)]
pub struct Overlay {
    cells: SimpleGrid<Option<CellStatus>>,
}

impl Overlay {
    pub fn new(size: usize) -> Overlay {
        Overlay {
            cells: SimpleGrid::new(size, size, None),
        }
    }

    pub fn size(&self) -> usize {
        self.cells.width()
    }

    pub fn get(&self, cell: &Cell) -> Option<CellStatus> {
        let point = Point::from(*cell);
        if self.cells.point_in_bounds(point) {
            self.cells.get_point(point)
        } else {
            None
        }
    }

    pub fn set(&mut self, cell: &Cell, status: CellStatus) {
        let point = Point::from(*cell);
        if self.cells.point_in_bounds(point) {
            self.cells.set_point(point, Some(status));
        }
    }

    pub fn clear(&mut self) {
        let rect = self.cells.rect();
        self.cells.set_rectangle(&rect, None);
    }

    pub fn is_empty(&self) -> bool {
        self.cells.values.iter().all(Option::is_none)
    }
}

/// Delay between two replay steps, between 10 and 120 ms in steps of 5.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReplaySpeed(u64);

impl ReplaySpeed {
    pub const MIN_MS: u64 = 10;
    pub const MAX_MS: u64 = 120;
    pub const STEP_MS: u64 = 5;
    pub const DEFAULT_MS: u64 = 35;
    /// No step is ever shown for less than this.
    const FLOOR: Duration = Duration::from_millis(5);
    /// Path steps are never shown for less than this.
    const PATH_FLOOR: Duration = Duration::from_millis(10);

    /// Clamps to the supported range and rounds down to a multiple of the step.
    pub fn from_millis(ms: u64) -> ReplaySpeed {
        let ms = ms.clamp(Self::MIN_MS, Self::MAX_MS);
        ReplaySpeed(ms - ms % Self::STEP_MS)
    }

    pub fn as_millis(&self) -> u64 {
        self.0
    }

    pub fn trace_delay(&self) -> Duration {
        Duration::from_millis(self.0).max(Self::FLOOR)
    }

    pub fn path_delay(&self) -> Duration {
        Duration::from_millis(self.0).max(Self::PATH_FLOOR)
    }
}

impl Default for ReplaySpeed {
    fn default() -> ReplaySpeed {
        ReplaySpeed(Self::DEFAULT_MS)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ReplayStep {
    pub cell: Cell,
    pub status: CellStatus,
    /// How long the step should stay on screen before the next one.
    pub delay: Duration,
}

/// Ordered, cancellable playback of a [SearchResult].
#[derive(Clone, Debug)]
pub struct Replay {
    result: SearchResult,
    start: Cell,
    end: Cell,
    speed: ReplaySpeed,
    overlay: Overlay,
    /// Position in the trace followed by the path.
    cursor: usize,
    cancelled: bool,
}

impl Replay {
    pub fn new(result: SearchResult, start: Cell, end: Cell, size: usize, speed: ReplaySpeed) -> Replay {
        Replay {
            result,
            start,
            end,
            speed,
            overlay: Overlay::new(size),
            cursor: 0,
            cancelled: false,
        }
    }

    pub fn result(&self) -> &SearchResult {
        &self.result
    }

    pub fn into_result(self) -> SearchResult {
        self.result
    }

    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    pub fn speed(&self) -> ReplaySpeed {
        self.speed
    }

    /// Stops the playback. Steps not yet taken are dropped.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    pub fn is_finished(&self) -> bool {
        self.cancelled || self.cursor >= self.len_raw()
    }

    /// Total delay of the steps still to come.
    pub fn remaining_delay(&self) -> Duration {
        if self.cancelled {
            return Duration::ZERO;
        }
        (self.cursor..self.len_raw())
            .filter_map(|i| self.step_at(i))
            .map(|step| step.delay)
            .sum()
    }

    fn len_raw(&self) -> usize {
        self.result.trace.len() + self.result.path.len()
    }

    fn is_endpoint(&self, cell: &Cell) -> bool {
        *cell == self.start || *cell == self.end
    }

    fn step_at(&self, i: usize) -> Option<ReplayStep> {
        let trace_len = self.result.trace.len();
        let step = if i < trace_len {
            let event = self.result.trace[i];
            ReplayStep {
                cell: event.cell,
                status: event.kind.into(),
                delay: self.speed.trace_delay(),
            }
        } else {
            ReplayStep {
                cell: *self.result.path.get(i - trace_len)?,
                status: CellStatus::Path,
                delay: self.speed.path_delay(),
            }
        };
        (!self.is_endpoint(&step.cell)).then_some(step)
    }
}

impl Iterator for Replay {
    type Item = ReplayStep;

    fn next(&mut self) -> Option<ReplayStep> {
        while !self.is_finished() {
            let i = self.cursor;
            self.cursor += 1;
            if let Some(step) = self.step_at(i) {
                self.overlay.set(&step.cell, step.status);
                return Some(step);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{search, Algorithm, SearchRequest};

    fn replay_of(request: &SearchRequest, speed: ReplaySpeed) -> Replay {
        let result = search(request).unwrap();
        Replay::new(result, request.start, request.end, request.size, speed)
    }

    #[test]
    fn speed_is_clamped_and_snapped() {
        assert_eq!(ReplaySpeed::from_millis(0).as_millis(), 10);
        assert_eq!(ReplaySpeed::from_millis(500).as_millis(), 120);
        assert_eq!(ReplaySpeed::from_millis(37).as_millis(), 35);
        assert_eq!(ReplaySpeed::default().as_millis(), 35);
        assert_eq!(
            ReplaySpeed::from_millis(10).path_delay(),
            Duration::from_millis(10)
        );
        assert_eq!(
            ReplaySpeed::from_millis(60).trace_delay(),
            Duration::from_millis(60)
        );
    }

    #[test]
    fn plays_trace_then_path_without_endpoints() {
        let request = SearchRequest::new(4, Cell::new(0, 0), Cell::new(0, 3), Algorithm::AStar);
        let replay = replay_of(&request, ReplaySpeed::default());
        let result = replay.result().clone();
        let steps: Vec<ReplayStep> = replay.collect();

        let expected: Vec<(Cell, CellStatus)> = result
            .trace
            .iter()
            .map(|e| (e.cell, CellStatus::from(e.kind)))
            .chain(result.path.iter().map(|c| (*c, CellStatus::Path)))
            .filter(|(c, _)| *c != request.start && *c != request.end)
            .collect();
        let got: Vec<(Cell, CellStatus)> = steps.iter().map(|s| (s.cell, s.status)).collect();
        assert_eq!(got, expected);
        let path_steps: Vec<Cell> = steps
            .iter()
            .filter(|s| s.status == CellStatus::Path)
            .map(|s| s.cell)
            .collect();
        assert_eq!(path_steps, vec![Cell::new(0, 1), Cell::new(0, 2)]);
    }

    #[test]
    fn overlay_tracks_latest_status() {
        let request = SearchRequest::new(4, Cell::new(0, 0), Cell::new(0, 3), Algorithm::AStar);
        let mut replay = replay_of(&request, ReplaySpeed::default());
        assert!(replay.overlay().is_empty());
        while replay.next().is_some() {}
        assert!(replay.is_finished());
        assert_eq!(replay.overlay().get(&Cell::new(0, 1)), Some(CellStatus::Path));
        assert_eq!(replay.overlay().get(&Cell::new(0, 0)), None);
        assert_eq!(replay.overlay().get(&Cell::new(0, 3)), None);
        assert_eq!(replay.overlay().get(&Cell::new(1, 0)), Some(CellStatus::Frontier));
    }

    #[test]
    fn overlay_clears_and_ignores_off_grid_cells() {
        let mut overlay = Overlay::new(3);
        assert_eq!(overlay.size(), 3);
        overlay.set(&Cell::new(3, 0), CellStatus::Path);
        overlay.set(&Cell::new(0, -1), CellStatus::Path);
        assert!(overlay.is_empty());
        assert_eq!(overlay.get(&Cell::new(-1, 0)), None);

        overlay.set(&Cell::new(2, 1), CellStatus::Visited);
        overlay.set(&Cell::new(0, 2), CellStatus::Frontier);
        assert_eq!(overlay.get(&Cell::new(2, 1)), Some(CellStatus::Visited));
        assert_eq!(overlay.get(&Cell::new(1, 2)), None);
        overlay.clear();
        assert!(overlay.is_empty());
        assert_eq!(overlay.size(), 3);
    }

    #[test]
    fn cancel_stops_playback() {
        let request = SearchRequest::new(10, Cell::new(0, 0), Cell::new(9, 9), Algorithm::UniformCost);
        let mut replay = replay_of(&request, ReplaySpeed::default());
        assert!(replay.next().is_some());
        assert!(replay.next().is_some());
        assert!(!replay.is_cancelled());
        replay.cancel();
        assert!(replay.is_cancelled());
        assert!(replay.is_finished());
        assert_eq!(replay.next(), None);
        assert_eq!(replay.remaining_delay(), Duration::ZERO);
        // The result is untouched by playback.
        assert_eq!(replay.result().path_length, 18);
    }

    #[test]
    fn remaining_delay_sums_steps() {
        let request = SearchRequest::new(4, Cell::new(0, 0), Cell::new(0, 3), Algorithm::AStar);
        let speed = ReplaySpeed::from_millis(20);
        let replay = replay_of(&request, speed);
        let total = replay.remaining_delay();
        let steps: Vec<ReplayStep> = replay.collect();
        assert_eq!(total, steps.iter().map(|s| s.delay).sum::<Duration>());
        assert!(steps.iter().all(|s| s.delay == Duration::from_millis(20)));
    }
}
