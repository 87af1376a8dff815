//! Per-pass mutable partition state: cell locks/gains, the intrusive bucket-list
//! node per cell, and per-net side counts. Rebuilt from scratch at the start of
//! every pass (see `reset`); the only thing that survives a pass is the
//! session's canonical assignment, which seeds the next pass's `part`.

use crate::hypergraph::{CellId, Hypergraph, NetId, Side};

/// One slot of the intrusive doubly-linked list backing the bucket list. A cell
/// owns exactly one `ListNode`, reused across passes, so splicing a cell in or
/// out of a bucket never allocates.
#[derive(Clone, Copy, Debug, Default)]
pub struct ListNode {
    pub prev: Option<CellId>,
    pub next: Option<CellId>,
}

pub struct PartitionState {
    /// Side assignment as of the start of this pass. Never mutated mid-pass:
    /// a cell's own side is only read before it is locked, and nothing reads a
    /// locked cell's side again until the session driver commits the next
    /// canonical assignment between passes.
    pub part: Vec<Side>,
    pub locked: Vec<bool>,
    pub gain: Vec<i32>,
    pub nodes: Vec<ListNode>,
    /// `net_part_count[net][side.idx()]` = cells of `net` currently on `side`.
    pub(crate) net_part_count: Vec<[u32; 2]>,
    pub part_size: [u32; 2],
    pub unlocked: [u32; 2],
    pub max_pin: u32,
}

impl PartitionState {
    /// Builds a fresh per-pass state from the hypergraph and the canonical
    /// assignment going into this pass (§4.2 "Per-pass reset").
    pub fn new(hg: &Hypergraph, assignment: &[Side]) -> Self {
        let n = hg.cell_count();
        let m = hg.net_count();

        let mut net_part_count = vec![[0u32; 2]; m];
        let mut part_size = [0u32; 2];
        for (cell, &side) in assignment.iter().enumerate() {
            part_size[side.idx()] += 1;
            for &net in hg.cell_nets(cell) {
                net_part_count[net][side.idx()] += 1;
            }
        }

        PartitionState {
            part: assignment.to_vec(),
            locked: vec![false; n],
            gain: vec![0; n],
            nodes: vec![ListNode::default(); n],
            net_part_count,
            unlocked: part_size,
            part_size,
            max_pin: hg.max_pin_count(),
        }
    }

    #[inline]
    pub fn part_count(&self, net: NetId, side: Side) -> u32 {
        self.net_part_count[net][side.idx()]
    }

    #[inline]
    pub fn dec_part_count(&mut self, net: NetId, side: Side) {
        self.net_part_count[net][side.idx()] -= 1;
    }

    #[inline]
    pub fn inc_part_count(&mut self, net: NetId, side: Side) {
        self.net_part_count[net][side.idx()] += 1;
    }

    /// The change in cut size moving `cell` alone would cause; valid only for
    /// unlocked cells.
    #[inline]
    pub fn gain_of(&self, cell: CellId) -> i32 {
        debug_assert!(!self.locked[cell], "gain read on a locked cell");
        self.gain[cell]
    }
}
