use std::fmt::{Display, Formatter};

/// Errors reported at the boundary of the partitioner. Every variant here is a fatal,
/// reportable condition; anything that would instead indicate a bug in the core (a
/// broken bucket-list or lock invariant) is caught by `debug_assert!` instead, since it
/// must never occur on well-formed input.
#[derive(Debug)]
pub enum PartitionError {
    /// The input file could not be read.
    InputIo(std::io::Error),
    /// The netlist text did not match the expected grammar.
    Parse(String),
    /// No partition satisfies the requested balance factor for this cell count.
    Infeasible(String),
}

impl Display for PartitionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            Self::InputIo(e) => write!(f, "failed to read input: {}", e),
            Self::Parse(msg) => write!(f, "malformed netlist: {}", msg),
            Self::Infeasible(msg) => write!(f, "infeasible balance request: {}", msg),
        }
    }
}

impl std::error::Error for PartitionError {}

impl From<std::io::Error> for PartitionError {
    fn from(e: std::io::Error) -> Self {
        Self::InputIo(e)
    }
}
