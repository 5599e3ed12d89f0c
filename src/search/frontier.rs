//! Open frontier ordered by estimated total cost.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::node::NodeId;

/// One frontier entry.
///
/// A cell may have several live entries at once; relaxation pushes a new
/// entry instead of rewriting the old one, and outdated entries are skipped
/// at pop time by checking the visited set.
#[derive(Clone, Copy, Debug)]
struct FrontierEntry {
    f_cost: f32,
    g_cost: f32,
    seq: u64,
    node: NodeId,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior: lowest f first, ties by
        // lowest g, remaining ties by earliest insertion
        other
            .f_cost
            .total_cmp(&self.f_cost)
            .then_with(|| other.g_cost.total_cmp(&self.g_cost))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-ordered priority queue over search nodes.
///
/// Pop order is deterministic: ascending f cost, then ascending g cost,
/// then insertion order. Equal-cost searches therefore always expand cells
/// in the same sequence.
pub(super) struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    next_seq: u64,
}

impl Frontier {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    pub fn push(&mut self, f_cost: f32, g_cost: f32, node: NodeId) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(FrontierEntry {
            f_cost,
            g_cost,
            seq,
            node,
        });
    }

    pub fn pop(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|entry| entry.node)
    }
}
