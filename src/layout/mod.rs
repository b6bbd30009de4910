//! Automatic placement: layered engine plus the adapter the view consumes.

pub mod adapter;
pub mod sugiyama;

pub use adapter::{anchor_sides, layout_graph};
pub use sugiyama::{NODE_HEIGHT, NODE_SEP, NODE_WIDTH, PlacedNode, RANK_SEP, SugiyamaLayout};
