use super::*;
use crate::model::{ServiceEdge, ServiceNode};

fn nodes(ids: &[&str]) -> Vec<ServiceNode> {
    ids.iter().map(|id| ServiceNode::bare(*id)).collect()
}

fn edges(pairs: &[(&str, &str)]) -> Vec<ServiceEdge> {
    pairs
        .iter()
        .map(|(a, b)| ServiceEdge::new(format!("e-{a}-{b}"), *a, *b))
        .collect()
}

// ── Construction and invariants ──────────────────────────────────────────

#[test]
fn test_from_parts_counts() {
    let ir = TopologyIR::from_parts(&nodes(&["a", "b", "c"]), &edges(&[("a", "b"), ("b", "c")]))
        .unwrap();
    assert_eq!(ir.node_count(), 3);
    assert_eq!(ir.edge_count(), 2);
}

#[test]
fn test_duplicate_node_id_rejected() {
    let err = TopologyIR::from_parts(&nodes(&["a", "a"]), &[]).unwrap_err();
    assert_eq!(err, GraphError::DuplicateNode("a".to_string()));
}

#[test]
fn test_edge_with_missing_endpoint_rejected() {
    let err =
        TopologyIR::from_parts(&nodes(&["a"]), &edges(&[("a", "missing")])).unwrap_err();
    assert_eq!(
        err,
        GraphError::UnknownEndpoint {
            edge: "e-a-missing".to_string(),
            node: "missing".to_string(),
        }
    );
}

#[test]
fn test_missing_source_endpoint_rejected() {
    assert!(TopologyIR::from_parts(&nodes(&["b"]), &edges(&[("ghost", "b")])).is_err());
}

#[test]
fn test_empty_graph() {
    let ir = TopologyIR::from_parts(&[], &[]).unwrap();
    assert_eq!(ir.node_count(), 0);
    assert!(ir.is_dag());
}

// ── Queries ──────────────────────────────────────────────────────────────

#[test]
fn test_is_dag_and_toposort() {
    let ir = TopologyIR::from_parts(&nodes(&["a", "b", "c"]), &edges(&[("a", "b"), ("b", "c")]))
        .unwrap();
    assert!(ir.is_dag());
    assert_eq!(
        ir.topological_order(),
        Some(vec!["a".to_string(), "b".to_string(), "c".to_string()])
    );
}

#[test]
fn test_cycle_detected() {
    let ir =
        TopologyIR::from_parts(&nodes(&["a", "b"]), &edges(&[("a", "b"), ("b", "a")])).unwrap();
    assert!(!ir.is_dag());
    assert_eq!(ir.topological_order(), None);
}

#[test]
fn test_degrees() {
    let ir = TopologyIR::from_parts(
        &nodes(&["a", "b", "c"]),
        &edges(&[("a", "b"), ("a", "c"), ("b", "c")]),
    )
    .unwrap();
    assert_eq!(ir.out_degree("a"), 2);
    assert_eq!(ir.in_degree("a"), 0);
    assert_eq!(ir.in_degree("c"), 2);
    assert_eq!(ir.out_degree("nope"), 0);
}

#[test]
fn test_adjacency_list_sorted() {
    let ir = TopologyIR::from_parts(
        &nodes(&["b", "a", "c"]),
        &edges(&[("a", "c"), ("a", "b")]),
    )
    .unwrap();
    assert_eq!(
        ir.adjacency_list(),
        vec![
            ("a".to_string(), vec!["b".to_string(), "c".to_string()]),
            ("b".to_string(), vec![]),
            ("c".to_string(), vec![]),
        ]
    );
}
