//! Graph intermediate representation and its referential invariants.

pub mod graph;

pub use graph::{GraphError, TopologyIR};
