//! Layout adapter: annotates fetched nodes with placement and anchor sides.
//!
//! This is the seam between the raw graph payload and the render surface.
//! It validates the payload, runs the layered placement engine, and rewrites
//! each node's `position` (top-left of its uniform box) and connector anchor
//! sides for the chosen flow direction. Edges pass through unchanged.
//!
//! The function is pure: rank assignment depends only on the (nodes, edges)
//! topology, never on incoming positions, so re-running it on its own output
//! reproduces the same placement.

use std::collections::HashMap;

use tracing::warn;

use crate::model::{AnchorSide, FlowDirection, Position, ServiceEdge, ServiceNode};
use crate::topology::{GraphError, TopologyIR};

use super::sugiyama::{NODE_HEIGHT, NODE_WIDTH, PlacedNode, SugiyamaLayout};

/// Anchor sides implied by a flow direction: (source side, target side).
pub fn anchor_sides(direction: FlowDirection) -> (AnchorSide, AnchorSide) {
    match direction {
        FlowDirection::LeftToRight => (AnchorSide::Right, AnchorSide::Left),
        FlowDirection::TopToBottom => (AnchorSide::Bottom, AnchorSide::Top),
    }
}

/// Lay out a fetched graph.
///
/// Returns the same nodes (same ids, same length) annotated with absolute
/// top-left positions and anchor sides. Fails if the payload violates the
/// referential invariants (duplicate node id, edge naming a missing node) —
/// a silent drop would hide topology bugs upstream.
///
/// A node the engine produced no coordinate for keeps its original entry;
/// that is a defensive fallback, logged as a non-fatal anomaly, since the
/// engine is total over the supplied node set.
pub fn layout_graph(
    nodes: &[ServiceNode],
    edges: &[ServiceEdge],
    direction: FlowDirection,
) -> Result<Vec<ServiceNode>, GraphError> {
    let ir = TopologyIR::from_parts(nodes, edges)?;

    if nodes.is_empty() {
        return Ok(Vec::new());
    }

    let placed = SugiyamaLayout::layout(&ir, direction);
    let centers: HashMap<&str, &PlacedNode> =
        placed.iter().map(|p| (p.id.as_str(), p)).collect();

    let (source_anchor, target_anchor) = anchor_sides(direction);

    let result = nodes
        .iter()
        .map(|node| match centers.get(node.id.as_str()) {
            Some(p) => {
                let mut out = node.clone();
                // Engine centers → top-left, matching the render surface's
                // box anchor point.
                out.position = Position::new(
                    p.center_x - NODE_WIDTH / 2.0,
                    p.center_y - NODE_HEIGHT / 2.0,
                );
                out.source_anchor = Some(source_anchor);
                out.target_anchor = Some(target_anchor);
                out
            }
            None => {
                warn!(node_id = %node.id, "placement engine returned no coordinate; keeping prior position");
                node.clone()
            }
        })
        .collect();

    Ok(result)
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_adapter.rs"]
mod tests;
