use crate::board::Board;
use crate::error::SearchError;
use crate::frontier::Frontier;
use crate::policy::{Policy, Variant};
use crate::retrace::Retrace;
use crate::{manhattan, Cost, FxIndexMap};
use grid_util::point::Point;
use indexmap::map::Entry::{Occupied, Vacant};
use log::{debug, info, warn};

/// Parent index of the start node.
pub(crate) const NO_PARENT: usize = usize::MAX;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeStatus {
    /// Discovered, waiting in the frontier.
    Open,
    /// Expanded. Never reopened.
    Closed,
}

/// A discovered position. The predecessor is stored as an index into the engine's node arena
/// and is only ever set by the engine while expanding, so predecessor chains always end at the
/// start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchNode {
    pub(crate) position: Point,
    pub(crate) parent: usize,
    cost: Cost,
    heuristic: Cost,
    priority: Cost,
    status: NodeStatus,
}

impl SearchNode {
    pub fn position(&self) -> Point {
        self.position
    }

    /// Sum of the step costs from the start up to and including this node.
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// Manhattan distance to the goal.
    pub fn heuristic(&self) -> Cost {
        self.heuristic
    }

    pub fn priority(&self) -> Cost {
        self.priority
    }

    pub fn status(&self) -> NodeStatus {
        self.status
    }

    pub fn has_parent(&self) -> bool {
        self.parent != NO_PARENT
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchState {
    Initialized,
    Running,
    Succeeded,
    /// The frontier ran dry: the goal cannot be reached.
    Exhausted,
}

impl SearchState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, SearchState::Succeeded | SearchState::Exhausted)
    }
}

/// One run of a search [Variant] over a [Board]. The engine owns the board, every node it has
/// discovered and the frontier, and advances one expansion per [step](Self::step) so that a
/// caller can observe and draw the search as it goes.
#[derive(Clone, Debug)]
pub struct SearchEngine {
    board: Board,
    variant: Variant,
    policy: Policy,
    nodes: FxIndexMap<Point, SearchNode>,
    frontier: Frontier,
    state: SearchState,
    current: Option<Point>,
    steps: usize,
    failure: Option<SearchError>,
}

impl SearchEngine {
    /// Prepares a search from the board's start to its goal with the start node already open.
    pub fn new(board: Board, variant: Variant) -> Result<SearchEngine, SearchError> {
        let policy = variant.policy();
        let start = board.start();
        let goal = board.goal();
        let mut nodes = FxIndexMap::default();
        let mut frontier = Frontier::new(policy.discipline);
        let symbol = board.get(start).ok_or(SearchError::MissingStart)?;
        let cost = policy.step_cost.cost(symbol, start)?;
        let heuristic = manhattan(&start, &goal);
        let priority = policy.ranking.priority(cost, heuristic);
        nodes.insert(
            start,
            SearchNode {
                position: start,
                parent: NO_PARENT,
                cost,
                heuristic,
                priority,
                status: NodeStatus::Open,
            },
        );
        frontier.push(0, priority);
        debug!("Searching {} to {} with {}", start, goal, variant);
        Ok(SearchEngine {
            board,
            variant,
            policy,
            nodes,
            frontier,
            state: SearchState::Initialized,
            current: None,
            steps: 0,
            failure: None,
        })
    }

    /// Expands one node. Terminal states are sticky: stepping a finished search returns the same
    /// state again. An unknown cell symbol aborts the run, and every later call returns the
    /// same error.
    pub fn step(&mut self) -> Result<SearchState, SearchError> {
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        if self.state.is_terminal() {
            return Ok(self.state);
        }
        self.state = SearchState::Running;
        self.steps += 1;
        match self.expand_next() {
            Ok(state) => {
                self.state = state;
                Ok(state)
            }
            Err(err) => {
                warn!("Search aborted after {} steps: {}", self.steps, err);
                self.failure = Some(err.clone());
                Err(err)
            }
        }
    }

    fn expand_next(&mut self) -> Result<SearchState, SearchError> {
        let nodes = &self.nodes;
        let next = self.frontier.pop(|index, priority| {
            let node = &nodes[index];
            node.status == NodeStatus::Open && node.priority == priority
        });
        let Some(index) = next else {
            self.current = None;
            info!(
                "Frontier exhausted after {} steps: {} is not reachable from {}",
                self.steps,
                self.board.goal(),
                self.board.start()
            );
            return Ok(SearchState::Exhausted);
        };
        let current = self.nodes[index];
        self.current = Some(current.position);
        if current.position == self.board.goal() {
            self.nodes[index].status = NodeStatus::Closed;
            info!(
                "Reached {} after {} steps with cost {}",
                current.position, self.steps, current.cost
            );
            return Ok(SearchState::Succeeded);
        }
        let goal = self.board.goal();
        for neighbour in self.board.neighborhood_points(&current.position) {
            let symbol = match self.board.get(neighbour) {
                Some(symbol) if !self.board.is_blocked(neighbour) => symbol,
                _ => continue,
            };
            let cost = current
                .cost
                .saturating_add(self.policy.step_cost.cost(symbol, neighbour)?);
            match self.nodes.entry(neighbour) {
                Vacant(e) => {
                    let heuristic = manhattan(&neighbour, &goal);
                    let priority = self.policy.ranking.priority(cost, heuristic);
                    let n = e.index();
                    e.insert(SearchNode {
                        position: neighbour,
                        parent: index,
                        cost,
                        heuristic,
                        priority,
                        status: NodeStatus::Open,
                    });
                    self.frontier.push(n, priority);
                }
                Occupied(mut e) => {
                    let n = e.index();
                    let node = e.get_mut();
                    if node.status == NodeStatus::Closed
                        || !self.policy.discipline.relaxes()
                        || cost >= node.cost
                    {
                        continue;
                    }
                    node.parent = index;
                    node.cost = cost;
                    node.priority = self.policy.ranking.priority(cost, node.heuristic);
                    self.frontier.push(n, node.priority);
                }
            }
        }
        self.nodes[index].status = NodeStatus::Closed;
        Ok(SearchState::Running)
    }

    /// Steps until the search finishes and returns the path from start to goal.
    pub fn run(&mut self) -> Result<Vec<Point>, SearchError> {
        while !self.step()?.is_terminal() {}
        self.reconstructed_path()
            .ok_or(SearchError::PathNotFound {
                start: self.board.start(),
                goal: self.board.goal(),
            })
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Number of [step](Self::step) calls that did work.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// The position selected by the most recent step.
    pub fn current(&self) -> Option<Point> {
        self.current
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    pub fn start(&self) -> Point {
        self.board.start()
    }

    pub fn goal(&self) -> Point {
        self.board.goal()
    }

    pub fn node(&self, position: &Point) -> Option<&SearchNode> {
        self.nodes.get(position)
    }

    /// The predecessor of `position` on its current best path.
    pub fn parent_of(&self, position: &Point) -> Option<Point> {
        self.nodes
            .get(position)
            .and_then(|node| self.nodes.get_index(node.parent))
            .map(|(p, _)| *p)
    }

    pub fn is_open(&self, position: &Point) -> bool {
        self.has_status(position, NodeStatus::Open)
    }

    pub fn is_visited(&self, position: &Point) -> bool {
        self.has_status(position, NodeStatus::Closed)
    }

    fn has_status(&self, position: &Point, status: NodeStatus) -> bool {
        self.nodes
            .get(position)
            .is_some_and(|node| node.status == status)
    }

    fn positions_with(&self, status: NodeStatus) -> Vec<Point> {
        self.nodes
            .values()
            .filter(|node| node.status == status)
            .map(|node| node.position)
            .collect()
    }

    /// Positions discovered but not yet expanded, in discovery order.
    pub fn frontier_positions(&self) -> Vec<Point> {
        self.positions_with(NodeStatus::Open)
    }

    /// Positions already expanded, in discovery order.
    pub fn visited_positions(&self) -> Vec<Point> {
        self.positions_with(NodeStatus::Closed)
    }

    /// Walks the path backwards from the goal, one position at a time. Only available once the
    /// search has succeeded.
    pub fn retrace(&self) -> Option<Retrace<'_>> {
        if self.state != SearchState::Succeeded {
            return None;
        }
        let goal = self.nodes.get_index_of(&self.board.goal())?;
        Some(Retrace::new(&self.nodes, goal))
    }

    /// The path from start to goal, or [None] unless the search has succeeded.
    pub fn reconstructed_path(&self) -> Option<Vec<Point>> {
        self.retrace().map(Retrace::into_path)
    }

    /// Cumulative cost of the goal node once the search has succeeded.
    pub fn path_cost(&self) -> Option<Cost> {
        if self.state != SearchState::Succeeded {
            return None;
        }
        self.nodes.get(&self.board.goal()).map(|node| node.cost)
    }
}
