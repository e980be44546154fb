use grid_util::point::Point;
use thiserror::Error;

/// Errors raised while ingesting a board, resolving a search variant or searching.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    // Board ingestion
    #[error("board has no rows")]
    EmptyBoard,

    #[error("row {row} has width {found}, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("board has no start cell 'A'")]
    MissingStart,

    #[error("board has no goal cell 'B'")]
    MissingGoal,

    #[error("board has more than one {symbol:?} cell: {first} and {second}")]
    DuplicateMarker {
        symbol: char,
        first: Point,
        second: Point,
    },

    // Cost lookup during expansion
    #[error("can't handle cell with value {symbol:?} at {position}")]
    UnknownCell { symbol: char, position: Point },

    /// The frontier ran dry before the goal was selected.
    #[error("no path from {start} to {goal}")]
    PathNotFound { start: Point, goal: Point },

    // Variant selection
    #[error("unknown algorithm: {0} (expected: greedy, astar, dijkstra or bfs)")]
    UnknownAlgorithm(String),

    #[error("unknown cost model: {0} (expected: unit or weighted)")]
    UnknownCostModel(String),
}

impl SearchError {
    /// Whether this error is the expected "no path" outcome rather than a fault.
    pub fn is_path_not_found(&self) -> bool {
        matches!(self, SearchError::PathNotFound { .. })
    }
}
