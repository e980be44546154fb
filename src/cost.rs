use crate::board::{Board, BLOCKED, GOAL, START};
use crate::error::SearchError;
use crate::Cost;
use core::fmt;
use core::str::FromStr;
use grid_util::point::Point;

/// Cost of entering a water cell (`w`).
pub const WATER: Cost = 100;
/// Cost of entering a mountain cell (`m`).
pub const MOUNTAIN: Cost = 50;
/// Cost of entering a forest cell (`f`).
pub const FOREST: Cost = 10;
/// Cost of entering a grass cell (`g`).
pub const GRASS: Cost = 5;
/// Cost of entering a road cell (`r`).
pub const ROAD: Cost = 1;

/// Maps cell symbols to the cost of entering them. Unknown symbols are an error rather than
/// passable ground. Blocked cells never reach the cost model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CostModel {
    /// Every recognized open cell costs 1. Also accepts `.` and space as plain ground.
    Unit,
    /// Cost classes from the terrain table, start and goal are free.
    Weighted,
}

impl CostModel {
    pub fn cost(&self, symbol: char) -> Option<Cost> {
        let weighted = match symbol {
            'w' => WATER,
            'm' => MOUNTAIN,
            'f' => FOREST,
            'g' => GRASS,
            'r' => ROAD,
            START | GOAL => 0,
            '.' | ' ' if *self == CostModel::Unit => 1,
            _ => return None,
        };
        Some(match self {
            CostModel::Unit => 1,
            CostModel::Weighted => weighted,
        })
    }

    /// Cost of entering the cell at `position`, failing on symbols outside the alphabet.
    pub fn cell_cost(&self, symbol: char, position: Point) -> Result<Cost, SearchError> {
        self.cost(symbol)
            .ok_or(SearchError::UnknownCell { symbol, position })
    }

    /// Sums the cost of every cell on `path`, start included. For a path produced by the engine
    /// this equals the cumulative cost of the goal node.
    pub fn path_cost(&self, board: &Board, path: &[Point]) -> Result<Cost, SearchError> {
        path.iter().try_fold(0, |total: Cost, &position| {
            // Off-board positions are reported like walls, which have no cost either.
            let symbol = board.get(position).unwrap_or(BLOCKED);
            Ok(total.saturating_add(self.cell_cost(symbol, position)?))
        })
    }
}

impl FromStr for CostModel {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "unit" => Ok(CostModel::Unit),
            "weighted" => Ok(CostModel::Weighted),
            _ => Err(SearchError::UnknownCostModel(s.to_owned())),
        }
    }
}

impl fmt::Display for CostModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CostModel::Unit => write!(f, "unit"),
            CostModel::Weighted => write!(f, "weighted"),
        }
    }
}
