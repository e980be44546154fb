//! Text frames of a search in progress. Frames are plain values; writing them to a terminal is
//! left to the caller.
use crate::board::{Board, GOAL, START};
use crate::engine::SearchEngine;
use core::fmt;
use grid_util::point::Point;
use itertools::Itertools;
use std::time::Duration;

/// Marks a cell that has been expanded.
pub const EXPLORED_CELL: char = 'X';
/// Marks a cell waiting in the frontier.
pub const OPENED_CELL: char = '*';
/// Marks a cell on the retraced path.
pub const RETRACED_PATH_CELL: char = 'O';
/// Pause between two animation frames.
pub const DEFAULT_FRAME_DELAY: Duration = Duration::from_millis(200);

/// A copy of the board symbols with display markers laid over it. The start and goal are never
/// overwritten so they stay visible.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    width: usize,
    cells: Vec<char>,
}

impl Frame {
    pub fn new(board: &Board) -> Frame {
        Frame {
            width: board.width(),
            cells: board.rows().flatten().copied().collect(),
        }
    }

    /// The board with expanded cells marked, and open cells too if `show_open` is set.
    pub fn from_engine(engine: &SearchEngine, show_open: bool) -> Frame {
        let mut frame = Frame::new(engine.board());
        for position in engine.visited_positions() {
            frame.mark(position, EXPLORED_CELL);
        }
        if show_open {
            for position in engine.frontier_positions() {
                frame.mark(position, OPENED_CELL);
            }
        }
        frame
    }

    fn ix(&self, point: Point) -> Option<usize> {
        let height = self.cells.len() / self.width;
        if point.x < 0 || point.y < 0 || point.x as usize >= self.width || point.y as usize >= height
        {
            return None;
        }
        Some(point.y as usize * self.width + point.x as usize)
    }

    pub fn get(&self, point: Point) -> Option<char> {
        self.ix(point).map(|ix| self.cells[ix])
    }

    /// Overwrites the symbol at `point` with `marker`, leaving start, goal and points outside
    /// the frame alone.
    pub fn mark(&mut self, point: Point, marker: char) {
        if let Some(ix) = self.ix(point) {
            if !matches!(self.cells[ix], START | GOAL) {
                self.cells[ix] = marker;
            }
        }
    }

    pub fn mark_path<I>(&mut self, path: I)
    where
        I: IntoIterator<Item = Point>,
    {
        for point in path {
            self.mark(point, RETRACED_PATH_CELL);
        }
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.width) {
            writeln!(f, "{}", row.iter().join(" "))?;
        }
        Ok(())
    }
}
