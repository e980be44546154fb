use crate::policy::Discipline;
use crate::Cost;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

/// Heap key for a frontier node. `index` is the node's position in the arena, which is also its
/// discovery order.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SmallestCostHolder {
    pub priority: Cost,
    pub index: usize,
}

impl Eq for SmallestCostHolder {}

impl PartialEq for SmallestCostHolder {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.index == other.index
    }
}

impl PartialOrd for SmallestCostHolder {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SmallestCostHolder {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the max-heap hands out the smallest priority, ties going to the node
        // discovered first.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.index.cmp(&self.index))
    }
}

/// The selection structure of the open set. Membership and the authoritative priority of an
/// open node live in the node arena; this only decides which node comes out next.
#[derive(Clone, Debug)]
pub(crate) enum Frontier {
    /// A relaxed node is pushed again with its lower priority. The superseded key stays in the
    /// heap and is dropped when popped.
    Heap(BinaryHeap<SmallestCostHolder>),
    Fifo(VecDeque<usize>),
}

impl Frontier {
    pub fn new(discipline: Discipline) -> Frontier {
        match discipline {
            Discipline::MinPriority => Frontier::Heap(BinaryHeap::new()),
            Discipline::Fifo => Frontier::Fifo(VecDeque::new()),
        }
    }

    pub fn push(&mut self, index: usize, priority: Cost) {
        match self {
            Frontier::Heap(heap) => heap.push(SmallestCostHolder { priority, index }),
            Frontier::Fifo(queue) => queue.push_back(index),
        }
    }

    /// Removes and returns the next node to expand. `is_live` tells whether a heap key still
    /// matches an open node with that priority.
    pub fn pop<F>(&mut self, mut is_live: F) -> Option<usize>
    where
        F: FnMut(usize, Cost) -> bool,
    {
        match self {
            Frontier::Heap(heap) => {
                while let Some(SmallestCostHolder { priority, index }) = heap.pop() {
                    if is_live(index, priority) {
                        return Some(index);
                    }
                }
                None
            }
            Frontier::Fifo(queue) => queue.pop_front(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heap_pops_smallest_then_oldest() {
        let mut frontier = Frontier::new(Discipline::MinPriority);
        frontier.push(0, 5);
        frontier.push(1, 3);
        frontier.push(2, 3);
        frontier.push(3, 4);
        let order = std::iter::from_fn(|| frontier.pop(|_, _| true)).collect::<Vec<_>>();
        assert_eq!(order, vec![1, 2, 3, 0]);
    }

    #[test]
    fn heap_skips_superseded_keys() {
        let mut frontier = Frontier::new(Discipline::MinPriority);
        frontier.push(0, 9);
        frontier.push(1, 6);
        // Node 0 relaxed to priority 2
        frontier.push(0, 2);
        let mut popped = vec![];
        let mut is_live = |index: usize, priority: Cost| {
            let live = !popped.contains(&index) && (index != 0 || priority == 2);
            if live {
                popped.push(index);
            }
            live
        };
        assert_eq!(frontier.pop(&mut is_live), Some(0));
        assert_eq!(frontier.pop(&mut is_live), Some(1));
        assert_eq!(frontier.pop(&mut is_live), None);
    }

    #[test]
    fn fifo_ignores_priority() {
        let mut frontier = Frontier::new(Discipline::Fifo);
        frontier.push(4, 10);
        frontier.push(2, 0);
        assert_eq!(frontier.pop(|_, _| false), Some(4));
        assert_eq!(frontier.pop(|_, _| false), Some(2));
        assert_eq!(frontier.pop(|_, _| false), None);
    }
}
