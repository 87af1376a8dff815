//! Property-based tests over randomly generated hypergraphs, checking the
//! invariants of the partitioning session: balance, monotone cut-size
//! improvement, and conservation of cell counts.

use std::time::Duration;

use mcpnr_partition::hypergraph::{Hypergraph, HypergraphBuilder, Side};
use mcpnr_partition::partition::pass::{balance_window, check_feasibility};
use mcpnr_partition::partition::session::{cutsize, run};
use mcpnr_partition::{initial_partition, PartitionError};
use proptest::prelude::*;

/// Builds a hypergraph with `n` cells and `nets` groups of cell indices, each
/// group becoming one net (collapsing any accidental consecutive duplicates
/// the same way the text parser does).
fn build_hypergraph(n: usize, nets: &[Vec<usize>]) -> Hypergraph {
    let mut builder = HypergraphBuilder::new();
    for i in 0..n {
        builder.cell_id(&format!("c{}", i));
    }
    for (i, net_cells) in nets.iter().enumerate() {
        let net = builder.add_net(&format!("n{}", i));
        for &cell in net_cells {
            builder.add_pin(net, cell);
        }
    }
    builder.build()
}

/// Strategy: a cell count in `[10, 60]` and a list of nets (each `[2, 20]`
/// distinct cells drawn from that range). Scaled down from the documented
/// `N in [10, 1000], M in [10, 5000]` range to keep a single `proptest` run
/// fast; the invariants checked do not depend on scale.
fn hypergraph_strategy() -> impl Strategy<Value = Hypergraph> {
    (10usize..60).prop_flat_map(|n| {
        let net = prop::collection::hash_set(0..n, 2..=20.min(n)).prop_map(|s| s.into_iter().collect::<Vec<_>>());
        prop::collection::vec(net, 10..60).prop_map(move |nets| build_hypergraph(n, &nets))
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn session_preserves_cell_count_and_never_increases_cut_size(hg in hypergraph_strategy()) {
        let balance_factor = 0.5;
        let n = hg.cell_count();

        if check_feasibility(n, balance_factor).is_err() {
            return Ok(());
        }

        let assignment = initial_partition::initial_assignment(&hg);
        let before = cutsize(&hg, &assignment);

        let report = run(&hg, assignment, balance_factor, Duration::from_millis(0));

        prop_assert_eq!(report.part_size[0] + report.part_size[1], n as u32);
        prop_assert!(report.final_cutsize <= before);
        prop_assert_eq!(report.final_cutsize, cutsize(&hg, &report.assignment));

        let (lo, hi) = balance_window(n, balance_factor);
        prop_assert!((report.part_size[0] as i64) >= lo && (report.part_size[0] as i64) <= hi);
        prop_assert!((report.part_size[1] as i64) >= lo && (report.part_size[1] as i64) <= hi);
    }

    #[test]
    fn net_part_counts_always_agree_with_the_final_assignment(hg in hypergraph_strategy()) {
        let balance_factor = 0.5;
        if check_feasibility(hg.cell_count(), balance_factor).is_err() {
            return Ok(());
        }
        let assignment = initial_partition::initial_assignment(&hg);
        let report = run(&hg, assignment, balance_factor, Duration::from_millis(0));

        for net in 0..hg.net_count() {
            let a = hg.net_cells(net).iter().filter(|&&c| report.assignment[c] == Side::A).count();
            let b = hg.net_cells(net).iter().filter(|&&c| report.assignment[c] == Side::B).count();
            prop_assert_eq!(a + b, hg.net_cells(net).len());
        }
    }
}

#[test]
fn infeasible_balance_factor_is_reported_not_panicked() {
    let err = check_feasibility(3, 0.1).unwrap_err();
    assert!(matches!(err, PartitionError::Infeasible(_)));
}
