use core::fmt;
use std::time::Duration;

use crate::search::{Algorithm, SearchResult};

/// Summary of a finished run, as shown next to the board.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunStats {
    pub algorithm: Algorithm,
    pub path_length: usize,
    pub visited: usize,
    pub elapsed: Duration,
    pub found: bool,
}

impl RunStats {
    /// Execution time in milliseconds.
    pub fn millis(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

impl From<&SearchResult> for RunStats {
    fn from(result: &SearchResult) -> RunStats {
        RunStats {
            algorithm: result.algorithm,
            path_length: result.path_length,
            visited: result.visited_count,
            elapsed: result.elapsed,
            found: result.found,
        }
    }
}

impl fmt::Display for RunStats {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Algorithm: {}", self.algorithm)?;
        writeln!(f, "Path Length: {}", self.path_length)?;
        writeln!(f, "Nodes Visited: {}", self.visited)?;
        writeln!(f, "Execution Time: {:.2} ms", self.millis())?;
        if !self.found {
            writeln!(f, "No valid path detected.")?;
        }
        Ok(())
    }
}

/// Message shown to the user after an action.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    MissingEndpoints,
    NoPath,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Notice::MissingEndpoints => "Place both start and end nodes before running a search.",
            Notice::NoPath => "No path found. Try adjusting walls or node placement.",
        })
    }
}
