//! One FM pass: initialize gains and buckets, repeatedly pick the best
//! balanced move until no unlocked cell remains, then find the prefix of moves
//! with maximum cumulative gain (§4.8).


use crate::hypergraph::{CellId, Hypergraph, Side};
use crate::partition::bucket::BucketSet;
use crate::partition::gain::{apply_move, initial_gain};
use crate::partition::state::PartitionState;
use crate::PartitionError;

/// The balance window `[lo, hi]` a side's cell count must stay within (§4.7).
pub fn balance_window(n: usize, balance_factor: f64) -> (i64, i64) {
    let n = n as f64;
    let lo = (((1.0 - balance_factor) / 2.0) * n).ceil() as i64;
    let hi = (((1.0 + balance_factor) / 2.0) * n).floor() as i64;
    (lo, hi)
}

/// Fails fast if no split of `n` cells can satisfy `balance_factor` (§4.2
/// "Feasibility check"): the achievable split range `[max(lo, n-hi), min(hi, n-lo)]`
/// must be non-empty.
pub fn check_feasibility(n: usize, balance_factor: f64) -> Result<(), PartitionError> {
    let (lo, hi) = balance_window(n, balance_factor);
    let n = n as i64;
    let achievable_lo = lo.max(n - hi);
    let achievable_hi = hi.min(n - lo);
    if achievable_lo > achievable_hi {
        return Err(PartitionError::Infeasible(format!(
            "no split of {} cells keeps both sides in [{}, {}]",
            n, lo, hi
        )));
    }
    Ok(())
}

/// Whether moving the current occupant of `side` out (and the other side's
/// occupant in) would keep both sides inside the balance window.
fn is_balanced_move(part_size: &[u32; 2], side: Side, lo: i64, hi: i64) -> bool {
    let from_after = part_size[side.idx()] as i64 - 1;
    let to_after = part_size[side.other().idx()] as i64 + 1;
    (lo..=hi).contains(&from_after) && (lo..=hi).contains(&to_after)
}

/// Outcome of a single pass: the full move log (in selection order) and,
/// if the pass found a strictly improving prefix, the index of its last move.
pub struct PassResult {
    pub moves: Vec<(CellId, i32)>,
    pub commit_through: Option<usize>,
}

impl PassResult {
    /// Total gain of the committed prefix, or 0 if nothing was committed.
    pub fn committed_gain(&self) -> i64 {
        match self.commit_through {
            Some(k) => self.moves[..=k].iter().map(|&(_, g)| g as i64).sum(),
            None => 0,
        }
    }
}

/// Runs one full FM pass starting from `assignment` (the canonical assignment
/// going into this pass). Does not mutate `assignment`; the caller applies the
/// committed prefix itself, per §4.8 step 3 / §4.9.
pub fn run_pass(hg: &Hypergraph, assignment: &[Side], balance_factor: f64) -> PassResult {
    let n = hg.cell_count();
    let (lo, hi) = balance_window(n, balance_factor);

    let mut state = PartitionState::new(hg, assignment);
    let mut buckets = BucketSet::default();

    for cell in 0..n {
        let g = initial_gain(hg, &state, cell);
        state.gain[cell] = g;
        buckets.side_mut(state.part[cell]).insert(&mut state, cell, g);
    }

    let mut moves = Vec::with_capacity(n);
    while state.unlocked[Side::A.idx()] + state.unlocked[Side::B.idx()] > 0 {
        let part_size = state.part_size;
        let chosen = buckets.find_balanced_move(|side| is_balanced_move(&part_size, side, lo, hi));
        let cell = match chosen {
            Some(c) => c,
            None => break,
        };
        let gain = apply_move(hg, &mut state, &mut buckets, cell);
        moves.push((cell, gain));
    }

    let commit_through = best_prefix(&moves);

    PassResult {
        moves,
        commit_through,
    }
}

/// Finds the smallest `k` maximizing the cumulative gain `C_k` of `moves[..=k]`
/// (§4.8 step 3): the running maximum is always accepted on the very first
/// move regardless of sign, then only updated on a strictly greater cumulative
/// gain thereafter, so the first index attaining the eventual maximum is kept.
/// Returns `None` if no prefix has positive cumulative gain.
fn best_prefix(moves: &[(CellId, i32)]) -> Option<usize> {
    let mut acc: i64 = 0;
    let mut best_acc: i64 = 0;
    let mut best_k: Option<usize> = None;

    for (i, &(_, g)) in moves.iter().enumerate() {
        acc += g as i64;
        if best_k.is_none() || acc > best_acc {
            best_acc = acc;
            best_k = Some(i);
        }
    }

    if best_acc > 0 {
        best_k
    } else {
        None
    }
}
