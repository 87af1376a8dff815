//! Two-way balanced min-cut hypergraph partitioning via Fiduccia-Mattheyses.
//! `partition` is the iterative-improvement core; everything else is the
//! boundary that makes it a runnable tool (netlist parsing, an initial seed,
//! report writing). Exposed as a library, in addition to the `mcpnr-partition`
//! binary, so integration tests can drive the pipeline directly.

pub mod config;
pub mod error;
pub mod hypergraph;
pub mod initial_partition;
pub mod netlist_parser;
pub mod partition;
pub mod writer;

pub use error::PartitionError;
pub use hypergraph::{CellId, Hypergraph, NetId, Side};
