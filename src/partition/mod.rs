//! The Fiduccia-Mattheyses core: per-pass state, the bucket list, the gain-update
//! engine, the pass driver, and the session driver that repeats passes.

pub mod bucket;
pub mod gain;
pub mod pass;
pub mod session;
pub mod state;

pub use session::{run, SessionReport};
pub use state::PartitionState;
