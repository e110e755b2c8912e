use ordered_float::OrderedFloat;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Min-cost frontier for the constrained search
///
/// A binary heap over (cost, node) entries, popped cheapest first. The
/// frontier may hold several entries for the same node: improving a label
/// pushes a fresh entry rather than reordering the old one, and the caller
/// discards stale entries on pop by comparing against the node's current
/// best cost.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<Reverse<(OrderedFloat<f64>, usize)>>,
}

impl Frontier {
    /// Creates a new empty frontier
    pub fn new() -> Self {
        Frontier {
            heap: BinaryHeap::new(),
        }
    }

    /// Returns true if the frontier is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of queued entries, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Queues a node at the given cumulative cost
    pub fn push(&mut self, node: usize, cost: f64) {
        self.heap.push(Reverse((OrderedFloat(cost), node)));
    }

    /// Removes and returns the cheapest queued entry
    pub fn pop(&mut self) -> Option<(usize, f64)> {
        self.heap
            .pop()
            .map(|Reverse((cost, node))| (node, cost.into_inner()))
    }

    /// Returns the cheapest queued entry without removing it
    pub fn peek(&self) -> Option<(usize, f64)> {
        self.heap
            .peek()
            .map(|Reverse((cost, node))| (*node, cost.into_inner()))
    }
}
