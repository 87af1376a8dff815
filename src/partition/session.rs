//! The session driver: repeats passes against the canonical assignment until a
//! pass commits no moves, and reports the final result (§4.9).


use std::time::Duration;

use crate::hypergraph::{Hypergraph, Side};
use crate::partition::pass::run_pass;

/// Summary of a completed partitioning session.
pub struct SessionReport {
    pub initial_cutsize: usize,
    pub final_cutsize: usize,
    pub part_size: [u32; 2],
    pub pass_count: u32,
    pub elapsed: Duration,
    pub assignment: Vec<Side>,
}

/// The number of nets spanning both sides under `assignment`.
pub fn cutsize(hg: &Hypergraph, assignment: &[Side]) -> usize {
    (0..hg.net_count())
        .filter(|&net| {
            let cells = hg.net_cells(net);
            let first = assignment[cells[0]];
            cells.iter().any(|&c| assignment[c] != first)
        })
        .count()
}

/// Runs passes against `assignment` until one commits no moves, returning the
/// improved assignment alongside a report. `elapsed` is supplied by the caller
/// since this module never reads the clock directly.
pub fn run(
    hg: &Hypergraph,
    mut assignment: Vec<Side>,
    balance_factor: f64,
    elapsed: Duration,
) -> SessionReport {
    let initial_cutsize = cutsize(hg, &assignment);
    let mut pass_count = 0;

    loop {
        let result = run_pass(hg, &assignment, balance_factor);
        let commit_through = match result.commit_through {
            Some(k) => k,
            None => break,
        };
        for &(cell, _) in &result.moves[..=commit_through] {
            assignment[cell] = assignment[cell].other();
        }
        pass_count += 1;
    }

    let final_cutsize = cutsize(hg, &assignment);
    let mut part_size = [0u32; 2];
    for &side in &assignment {
        part_size[side.idx()] += 1;
    }

    SessionReport {
        initial_cutsize,
        final_cutsize,
        part_size,
        pass_count,
        elapsed,
        assignment,
    }
}
