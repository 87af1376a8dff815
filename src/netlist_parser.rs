//! Reads the textual netlist grammar described in the external interface:
//!
//! ```text
//! <balance_factor>  { NET  <net_name>  { <cell_name> }+  ; }*
//! ```
//!
//! This is a boundary component: straightforward, and carries no design interest
//! beyond getting the grammar and its edge cases (missing `;`, duplicate pins)
//! right.

use crate::hypergraph::{Hypergraph, HypergraphBuilder};
use crate::PartitionError;

/// Parsed netlist: the hypergraph plus the balance factor that preceded it.
pub struct ParsedNetlist {
    pub hypergraph: Hypergraph,
    pub balance_factor: f64,
}

/// Parses `text` per the grammar above.
pub fn parse(text: &str) -> Result<ParsedNetlist, PartitionError> {
    let mut tokens = text.split_whitespace();

    let balance_factor: f64 = tokens
        .next()
        .ok_or_else(|| PartitionError::Parse("empty input, expected balance factor".into()))?
        .parse()
        .map_err(|e| PartitionError::Parse(format!("balance factor is not a real number: {}", e)))?;

    if !(balance_factor > 0.0 && balance_factor < 1.0) {
        return Err(PartitionError::Parse(format!(
            "balance factor {} is not in (0, 1)",
            balance_factor
        )));
    }

    let mut builder = HypergraphBuilder::new();

    loop {
        let keyword = match tokens.next() {
            Some(k) => k,
            None => break,
        };
        if keyword != "NET" {
            return Err(PartitionError::Parse(format!(
                "expected NET, found {:?}",
                keyword
            )));
        }

        let net_name = tokens
            .next()
            .ok_or_else(|| PartitionError::Parse("NET missing a name".into()))?;
        let net_id = builder.add_net(net_name);

        loop {
            let tok = tokens.next().ok_or_else(|| {
                PartitionError::Parse(format!("NET {:?} is missing a terminating ;", net_name))
            })?;
            if tok == ";" {
                break;
            }
            let cell_id = builder.cell_id(tok);
            builder.add_pin(net_id, cell_id);
        }

        if builder.net_cells(net_id).len() < 2 {
            return Err(PartitionError::Parse(format!(
                "NET {:?} has fewer than two distinct cells",
                net_name
            )));
        }
    }

    let hypergraph = builder.build();
    if hypergraph.net_count() == 0 {
        return Err(PartitionError::Parse("netlist has no nets".into()));
    }

    Ok(ParsedNetlist {
        hypergraph,
        balance_factor,
    })
}
