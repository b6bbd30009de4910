use super::*;
use crate::layout::sugiyama::NODE_SEP;
use crate::model::{Position, ServiceSpec};
use crate::topology::GraphError;

fn nodes(ids: &[&str]) -> Vec<ServiceNode> {
    ids.iter().map(|id| ServiceNode::bare(*id)).collect()
}

fn edges(pairs: &[(&str, &str)]) -> Vec<ServiceEdge> {
    pairs
        .iter()
        .map(|(a, b)| ServiceEdge::new(format!("e-{a}-{b}"), *a, *b))
        .collect()
}

fn position_of<'a>(laid: &'a [ServiceNode], id: &str) -> &'a Position {
    &laid.iter().find(|n| n.id == id).unwrap().position
}

// ── Contract: shape of the output ────────────────────────────────────────

#[test]
fn test_same_ids_same_length_same_order() {
    let ns = nodes(&["c", "a", "b"]);
    let es = edges(&[("a", "b")]);
    let laid = layout_graph(&ns, &es, FlowDirection::LeftToRight).unwrap();
    assert_eq!(laid.len(), 3);
    let ids: Vec<&str> = laid.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["c", "a", "b"]);
}

#[test]
fn test_empty_node_list_yields_empty_output() {
    let laid = layout_graph(&[], &[], FlowDirection::LeftToRight).unwrap();
    assert!(laid.is_empty());
}

#[test]
fn test_attribute_data_is_preserved() {
    let mut ns = nodes(&["a"]);
    ns[0].data = ServiceSpec {
        name: "Frontend LB".to_string(),
        replicas: 3,
        ..ServiceSpec::default()
    };
    let laid = layout_graph(&ns, &[], FlowDirection::LeftToRight).unwrap();
    assert_eq!(laid[0].data.name, "Frontend LB");
    assert_eq!(laid[0].data.replicas, 3);
}

// ── Placement ────────────────────────────────────────────────────────────

#[test]
fn test_single_node_sits_at_origin() {
    // Center (170, 100) shifted by half a box lands the top-left at (0, 0).
    let laid = layout_graph(&nodes(&["a"]), &[], FlowDirection::LeftToRight).unwrap();
    assert_eq!(laid[0].position, Position::new(0.0, 0.0));
}

#[test]
fn test_chain_ranks_increase_along_flow_axis() {
    let ns = nodes(&["a", "b", "c"]);
    let es = edges(&[("a", "b"), ("b", "c")]);
    let laid = layout_graph(&ns, &es, FlowDirection::LeftToRight).unwrap();
    let (a, b, c) = (
        position_of(&laid, "a"),
        position_of(&laid, "b"),
        position_of(&laid, "c"),
    );
    assert!(a.x < b.x && b.x < c.x);
    assert_eq!(b.x - a.x, NODE_WIDTH + crate::layout::sugiyama::RANK_SEP);
}

#[test]
fn test_chain_top_to_bottom_increases_y() {
    let ns = nodes(&["a", "b"]);
    let es = edges(&[("a", "b")]);
    let laid = layout_graph(&ns, &es, FlowDirection::TopToBottom).unwrap();
    assert!(position_of(&laid, "a").y < position_of(&laid, "b").y);
}

#[test]
fn test_isolated_nodes_share_a_rank() {
    let laid = layout_graph(&nodes(&["a", "b"]), &[], FlowDirection::LeftToRight).unwrap();
    let (a, b) = (position_of(&laid, "a"), position_of(&laid, "b"));
    assert_eq!(a.x, b.x);
    assert_eq!((b.y - a.y).abs(), NODE_HEIGHT + NODE_SEP);
}

#[test]
fn test_no_box_overlap() {
    let ns = nodes(&["a", "b", "c", "d", "e"]);
    let es = edges(&[("a", "b"), ("a", "c"), ("b", "d"), ("c", "d")]);
    let laid = layout_graph(&ns, &es, FlowDirection::LeftToRight).unwrap();
    for i in 0..laid.len() {
        for j in (i + 1)..laid.len() {
            let (p, q) = (&laid[i].position, &laid[j].position);
            let overlap = (p.x - q.x).abs() < NODE_WIDTH && (p.y - q.y).abs() < NODE_HEIGHT;
            assert!(!overlap, "boxes {} and {} overlap", laid[i].id, laid[j].id);
        }
    }
}

// ── Anchors ──────────────────────────────────────────────────────────────

#[test]
fn test_left_to_right_anchors() {
    let laid = layout_graph(
        &nodes(&["a", "b"]),
        &edges(&[("a", "b")]),
        FlowDirection::LeftToRight,
    )
    .unwrap();
    for node in &laid {
        assert_eq!(node.source_anchor, Some(AnchorSide::Right));
        assert_eq!(node.target_anchor, Some(AnchorSide::Left));
    }
}

#[test]
fn test_top_to_bottom_anchors() {
    let laid = layout_graph(
        &nodes(&["a", "b"]),
        &edges(&[("a", "b")]),
        FlowDirection::TopToBottom,
    )
    .unwrap();
    for node in &laid {
        assert_eq!(node.source_anchor, Some(AnchorSide::Bottom));
        assert_eq!(node.target_anchor, Some(AnchorSide::Top));
    }
}

// ── Purity ───────────────────────────────────────────────────────────────

#[test]
fn test_deterministic() {
    let ns = nodes(&["a", "b", "c", "d"]);
    let es = edges(&[("a", "b"), ("a", "c"), ("c", "d")]);
    let first = layout_graph(&ns, &es, FlowDirection::LeftToRight).unwrap();
    let second = layout_graph(&ns, &es, FlowDirection::LeftToRight).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_idempotent_over_own_output() {
    let ns = nodes(&["a", "b", "c"]);
    let es = edges(&[("a", "b"), ("a", "c")]);
    let first = layout_graph(&ns, &es, FlowDirection::LeftToRight).unwrap();

    // Strip positions: placement must not depend on them.
    let mut stripped = first.clone();
    for n in &mut stripped {
        n.position = Position::default();
    }
    let second = layout_graph(&stripped, &es, FlowDirection::LeftToRight).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_incoming_positions_are_ignored() {
    let mut ns = nodes(&["a", "b"]);
    ns[0].position = Position::new(9999.0, -42.0);
    let es = edges(&[("a", "b")]);
    let laid = layout_graph(&ns, &es, FlowDirection::LeftToRight).unwrap();
    assert_eq!(*position_of(&laid, "a"), Position::new(0.0, 0.0));
}

// ── Failure modes ────────────────────────────────────────────────────────

#[test]
fn test_edge_to_missing_node_fails_loudly() {
    let err = layout_graph(
        &nodes(&["a"]),
        &edges(&[("a", "missing")]),
        FlowDirection::LeftToRight,
    )
    .unwrap_err();
    assert!(matches!(err, GraphError::UnknownEndpoint { .. }));
}

#[test]
fn test_duplicate_node_id_fails() {
    let err = layout_graph(&nodes(&["a", "a"]), &[], FlowDirection::LeftToRight).unwrap_err();
    assert_eq!(err, GraphError::DuplicateNode("a".to_string()));
}

#[test]
fn test_cyclic_graph_still_lays_out() {
    let ns = nodes(&["a", "b", "c"]);
    let es = edges(&[("a", "b"), ("b", "c"), ("c", "a")]);
    let laid = layout_graph(&ns, &es, FlowDirection::LeftToRight).unwrap();
    assert_eq!(laid.len(), 3);
    for node in &laid {
        assert!(node.source_anchor.is_some());
    }
}
