//! The gain computation and the four-case update rule triggered by each cell
//! move (§4.3, §4.6). This is the hand-tuned heart of the FM engine: every net
//! incident to a moved cell is visited exactly once, and each visit touches at
//! most two other cells' buckets, giving the required O(P) work per pass.

use crate::hypergraph::{CellId, Hypergraph, Side};
use crate::partition::bucket::BucketSet;
use crate::partition::state::PartitionState;

/// Computes the initial gain of `cell` on its current side (§4.3), summing the
/// F(n)=1 / T(n)=0 contribution of each incident net.
pub fn initial_gain(hg: &Hypergraph, state: &PartitionState, cell: CellId) -> i32 {
    let from = state.part[cell];
    let to = from.other();
    let mut gain = 0;
    for &net in hg.cell_nets(cell) {
        if state.part_count(net, from) == 1 {
            gain += 1;
        }
        if state.part_count(net, to) == 0 {
            gain -= 1;
        }
    }
    gain
}

/// Removes `cell` from its bucket, applies `delta` to its gain, and reinserts
/// it. Every gain change in the update rule below goes through this, so the
/// bucket list is never observed inconsistent with a cell's recorded gain.
fn adjust_gain(state: &mut PartitionState, buckets: &mut BucketSet, cell: CellId, delta: i32) {
    let side = state.part[cell];
    let old_gain = state.gain[cell];
    buckets.side_mut(side).remove(state, cell, old_gain);
    state.gain[cell] = old_gain + delta;
    buckets.side_mut(side).insert(state, cell, old_gain + delta);
}

/// The unique unlocked cell on `net` sitting on `side`, other than `skip`, if
/// any. The four-case rule only ever calls this when §4.6 guarantees at most
/// one such cell exists; the `debug_assert!` below documents that invariant
/// rather than changes behavior.
fn unique_unlocked_neighbor(
    hg: &Hypergraph,
    state: &PartitionState,
    net: usize,
    side: Side,
    skip: CellId,
) -> Option<CellId> {
    let mut found = None;
    for &c in hg.net_cells(net) {
        if c != skip && !state.locked[c] && state.part[c] == side {
            debug_assert!(found.is_none(), "more than one unlocked neighbor on {:?}", side);
            found = Some(c);
            break;
        }
    }
    found
}

/// Applies the move of `cell` from its current side to the other side: locks
/// it, runs the four-case gain update over every incident net, removes it from
/// its own bucket, and updates the running `part_size`/`unlocked` counters.
/// Returns the cell's gain at the moment it was locked (what the pass driver
/// records in its move log).
pub fn apply_move(hg: &Hypergraph, state: &mut PartitionState, buckets: &mut BucketSet, cell: CellId) -> i32 {
    // Lock first: every "every unlocked cell on net n" scan below then skips
    // `cell` for free, with no separate identity check needed.
    state.locked[cell] = true;

    let from = state.part[cell];
    let to = from.other();

    for &net in hg.cell_nets(cell) {
        let t_before = state.part_count(net, to);
        if t_before == 0 {
            for &nb in hg.net_cells(net) {
                if !state.locked[nb] {
                    adjust_gain(state, buckets, nb, 1);
                }
            }
        } else if t_before == 1 {
            if let Some(nb) = unique_unlocked_neighbor(hg, state, net, to, cell) {
                adjust_gain(state, buckets, nb, -1);
            }
        }

        state.dec_part_count(net, from);
        state.inc_part_count(net, to);

        let f_after = state.part_count(net, from);
        if f_after == 0 {
            for &nb in hg.net_cells(net) {
                if !state.locked[nb] {
                    adjust_gain(state, buckets, nb, -1);
                }
            }
        } else if f_after == 1 {
            if let Some(nb) = unique_unlocked_neighbor(hg, state, net, from, cell) {
                adjust_gain(state, buckets, nb, 1);
            }
        }
    }

    let gain_at_move = state.gain[cell];
    buckets.side_mut(from).remove(state, cell, gain_at_move);

    state.unlocked[from.idx()] -= 1;
    state.part_size[from.idx()] -= 1;
    state.part_size[to.idx()] += 1;

    gain_at_move
}
