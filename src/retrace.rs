use crate::engine::SearchNode;
use crate::FxIndexMap;
use grid_util::point::Point;
use std::iter::FusedIterator;

/// Follows predecessor links from a node back to the start, yielding one position at a time.
/// Obtained from [SearchEngine::retrace](crate::SearchEngine::retrace) once the goal is found.
#[derive(Clone, Debug)]
pub struct Retrace<'a> {
    nodes: &'a FxIndexMap<Point, SearchNode>,
    next: usize,
}

impl<'a> Retrace<'a> {
    pub(crate) fn new(nodes: &'a FxIndexMap<Point, SearchNode>, from: usize) -> Retrace<'a> {
        Retrace { nodes, next: from }
    }

    /// Collects the remaining positions into a path ordered from start to goal.
    pub fn into_path(self) -> Vec<Point> {
        let mut path = self.collect::<Vec<Point>>();
        path.reverse();
        path
    }
}

impl Iterator for Retrace<'_> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        // The start's parent index is out of range, which ends the walk.
        let (_, node) = self.nodes.get_index(self.next)?;
        self.next = node.parent;
        Some(node.position)
    }
}

impl FusedIterator for Retrace<'_> {}
