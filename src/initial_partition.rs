//! The seeding heuristic that produces the starting assignment the FM session
//! improves on. A boundary component: the net-size-ascending sweep below is
//! simple by design and carries no design interest of its own.

use crate::hypergraph::{Hypergraph, Side};

/// Builds a starting assignment by visiting nets in ascending cell-count order
/// and greedily filling side A first, then side B, once A has reached half the
/// cell count. This tends to cluster cells of small nets together without any
/// actual optimization.
pub fn initial_assignment(hg: &Hypergraph) -> Vec<Side> {
    let n = hg.cell_count();
    let mut net_order: Vec<_> = (0..hg.net_count()).collect();
    net_order.sort_by_key(|&net| hg.net_cells(net).len());

    let mut assignment = vec![Side::A; n];
    let mut seen = vec![false; n];
    let mut size = [0u32; 2];
    let half = (n as f64) * 0.5;

    for net in net_order {
        for &cell in hg.net_cells(net) {
            if seen[cell] {
                continue;
            }
            seen[cell] = true;

            let side = if (size[Side::A.idx()] as f64) >= half {
                Side::B
            } else {
                Side::A
            };
            assignment[cell] = side;
            size[side.idx()] += 1;
        }
    }

    assignment
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::netlist_parser::parse;

    #[test]
    fn every_cell_gets_assigned_exactly_once() {
        let parsed = parse("0.5 NET n1 a b c d e ;").unwrap();
        let assignment = initial_assignment(&parsed.hypergraph);
        assert_eq!(assignment.len(), 5);
    }

    #[test]
    fn roughly_balances_a_single_net() {
        let parsed = parse("0.5 NET n1 a b c d ;").unwrap();
        let assignment = initial_assignment(&parsed.hypergraph);
        let a_count = assignment.iter().filter(|s| **s == Side::A).count();
        assert_eq!(a_count, 2);
    }
}
