//! Search variants. Every algorithm is the same traversal with three injected policies: the
//! cost of entering a cell ([StepCost]), the frontier priority ([Ranking]) and the way the
//! frontier hands out nodes ([Discipline]).
use crate::cost::CostModel;
use crate::error::SearchError;
use crate::Cost;
use core::fmt;
use core::str::FromStr;
use grid_util::point::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Best-first on the heuristic alone: A* with every step costing nothing.
    Greedy,
    Astar,
    Dijkstra,
    Bfs,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Greedy,
        Algorithm::Astar,
        Algorithm::Dijkstra,
        Algorithm::Bfs,
    ];
}

impl FromStr for Algorithm {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "greedy" | "standard" => Ok(Algorithm::Greedy),
            "astar" | "a*" => Ok(Algorithm::Astar),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "bfs" => Ok(Algorithm::Bfs),
            _ => Err(SearchError::UnknownAlgorithm(s.to_owned())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Algorithm::Greedy => "greedy",
            Algorithm::Astar => "astar",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::Bfs => "bfs",
        };
        write!(f, "{}", name)
    }
}

/// The cost of entering a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepCost {
    /// Symbols are still validated against the model, but every step is free.
    Zero(CostModel),
    Model(CostModel),
}

impl StepCost {
    pub fn cost(&self, symbol: char, position: Point) -> Result<Cost, SearchError> {
        match self {
            StepCost::Zero(model) => model.cell_cost(symbol, position).map(|_| 0),
            StepCost::Model(model) => model.cell_cost(symbol, position),
        }
    }
}

/// How a node's frontier priority is derived from its cumulative cost and heuristic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ranking {
    CostPlusHeuristic,
    CostOnly,
    /// Order of discovery, realized by a FIFO [Discipline] rather than a number.
    Insertion,
}

impl Ranking {
    pub fn priority(&self, cost: Cost, heuristic: Cost) -> Cost {
        match self {
            Ranking::CostPlusHeuristic => cost.saturating_add(heuristic),
            Ranking::CostOnly => cost,
            Ranking::Insertion => 0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Discipline {
    /// Lowest priority first, earliest discovery among equal priorities. Frontier entries are
    /// relaxed when a cheaper path to them turns up.
    MinPriority,
    /// Oldest discovery first. The first path found to a position is kept.
    Fifo,
}

impl Discipline {
    pub fn relaxes(&self) -> bool {
        matches!(self, Discipline::MinPriority)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Policy {
    pub step_cost: StepCost,
    pub ranking: Ranking,
    pub discipline: Discipline,
}

/// An [Algorithm] combined with the [CostModel] it runs under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Variant {
    pub algorithm: Algorithm,
    pub costs: CostModel,
}

impl Variant {
    pub fn new(algorithm: Algorithm, costs: CostModel) -> Variant {
        Variant { algorithm, costs }
    }

    /// Every algorithm under every cost model.
    pub fn all() -> impl Iterator<Item = Variant> {
        Algorithm::ALL.into_iter().flat_map(|algorithm| {
            [CostModel::Unit, CostModel::Weighted]
                .into_iter()
                .map(move |costs| Variant::new(algorithm, costs))
        })
    }

    pub fn policy(&self) -> Policy {
        let (step_cost, ranking, discipline) = match self.algorithm {
            Algorithm::Greedy => (
                StepCost::Zero(self.costs),
                Ranking::CostPlusHeuristic,
                Discipline::MinPriority,
            ),
            Algorithm::Astar => (
                StepCost::Model(self.costs),
                Ranking::CostPlusHeuristic,
                Discipline::MinPriority,
            ),
            Algorithm::Dijkstra => (
                StepCost::Model(self.costs),
                Ranking::CostOnly,
                Discipline::MinPriority,
            ),
            Algorithm::Bfs => (
                StepCost::Model(self.costs),
                Ranking::Insertion,
                Discipline::Fifo,
            ),
        };
        Policy {
            step_cost,
            ranking,
            discipline,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({} cost)", self.algorithm, self.costs)
    }
}
