//! # grid_search
//!
//! Step-by-step search on character grid maps. A single engine implements
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm),
//! [Dijkstra](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm),
//! [breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search) and greedy
//! best-first search over 4-connected grids, each under either unit or per-terrain cell costs.
//! The algorithms differ only in the [Policy] the engine is configured with.
//!
//! The engine advances one expansion per [SearchEngine::step] and exposes its frontier, visited
//! set and final path in between, so the search can be drawn as it runs (see [render]).
//!
//! ```
//! use grid_search::{Algorithm, Board, CostModel, SearchEngine, Variant};
//!
//! let board: Board = "A.#\n..#\n#.B".parse().unwrap();
//! let variant = Variant::new(Algorithm::Astar, CostModel::Unit);
//! let mut engine = SearchEngine::new(board, variant).unwrap();
//! let path = engine.run().unwrap();
//! assert_eq!(path.len(), 5);
//! ```
pub mod board;
pub mod cost;
pub mod engine;
pub mod error;
mod frontier;
pub mod policy;
pub mod render;
pub mod retrace;

use fxhash::FxBuildHasher;
use grid_util::point::Point;
use indexmap::IndexMap;
use itertools::Itertools;

pub use crate::board::Board;
pub use crate::cost::CostModel;
pub use crate::engine::{NodeStatus, SearchEngine, SearchNode, SearchState};
pub use crate::error::SearchError;
pub use crate::policy::{Algorithm, Discipline, Policy, Ranking, StepCost, Variant};
pub use crate::retrace::Retrace;
pub use grid_util::point::Point as Position;

pub(crate) type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Cell and path costs.
pub type Cost = u32;

/// The [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) between two points,
/// an admissible heuristic for 4-connected movement where every step costs at least 1.
pub fn manhattan(p1: &Point, p2: &Point) -> Cost {
    p1.x.abs_diff(p2.x) + p1.y.abs_diff(p2.y)
}

/// Whether consecutive points of `path` are orthogonal neighbours and no point repeats.
pub fn is_simple_path(path: &[Point]) -> bool {
    path.iter()
        .tuple_windows()
        .all(|(a, b)| manhattan(a, b) == 1)
        && path.iter().all_unique()
}
