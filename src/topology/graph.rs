//! TopologyIR — converts a graph payload into a petgraph DiGraph for layout
//! and analysis.
//!
//! Construction is where the referential invariants are enforced: node ids
//! must be unique within the graph, and every edge endpoint must resolve to
//! a node in the same payload. An edge naming a missing node is a caller
//! contract violation and fails construction rather than being dropped.

use std::collections::HashMap;

use petgraph::algo::{is_cyclic_directed, toposort};
use petgraph::graph::{DiGraph, NodeIndex};
use thiserror::Error;

use crate::model::{ServiceEdge, ServiceNode};

/// Node data stored in the petgraph DiGraph.
#[derive(Debug, Clone)]
pub struct NodeData {
    pub id: String,
    pub name: String,
}

/// Edge data stored in the petgraph DiGraph.
#[derive(Debug, Clone)]
pub struct EdgeData {
    pub id: String,
    pub animated: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("duplicate node id '{0}' in graph")]
    DuplicateNode(String),
    #[error("edge '{edge}' references unknown node '{node}'")]
    UnknownEndpoint { edge: String, node: String },
}

/// Graph intermediate representation.
///
/// Wraps petgraph DiGraph and keeps the id → index map for lookups.
#[derive(Debug)]
pub struct TopologyIR {
    pub digraph: DiGraph<NodeData, EdgeData>,
    /// Maps node id → petgraph NodeIndex.
    pub node_index: HashMap<String, NodeIndex>,
}

impl TopologyIR {
    /// Build a TopologyIR from a payload's nodes and edges.
    pub fn from_parts(nodes: &[ServiceNode], edges: &[ServiceEdge]) -> Result<Self, GraphError> {
        let mut digraph: DiGraph<NodeData, EdgeData> = DiGraph::new();
        let mut node_index: HashMap<String, NodeIndex> = HashMap::new();

        for node in nodes {
            if node_index.contains_key(&node.id) {
                return Err(GraphError::DuplicateNode(node.id.clone()));
            }
            let idx = digraph.add_node(NodeData {
                id: node.id.clone(),
                name: node.data.name.clone(),
            });
            node_index.insert(node.id.clone(), idx);
        }

        for edge in edges {
            let src_idx = resolve(&node_index, &edge.id, &edge.source)?;
            let tgt_idx = resolve(&node_index, &edge.id, &edge.target)?;
            digraph.add_edge(
                src_idx,
                tgt_idx,
                EdgeData {
                    id: edge.id.clone(),
                    animated: edge.animated,
                },
            );
        }

        Ok(Self {
            digraph,
            node_index,
        })
    }

    pub fn node_count(&self) -> usize {
        self.digraph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.digraph.edge_count()
    }

    /// Returns true if the graph is a directed acyclic graph (no cycles).
    pub fn is_dag(&self) -> bool {
        !is_cyclic_directed(&self.digraph)
    }

    /// Returns topological order of node ids, or None if the graph has cycles.
    pub fn topological_order(&self) -> Option<Vec<String>> {
        match toposort(&self.digraph, None) {
            Ok(indices) => Some(
                indices
                    .into_iter()
                    .map(|idx| self.digraph[idx].id.clone())
                    .collect(),
            ),
            Err(_) => None,
        }
    }

    pub fn in_degree(&self, id: &str) -> usize {
        match self.node_index.get(id) {
            None => 0,
            Some(&idx) => self
                .digraph
                .edges_directed(idx, petgraph::Direction::Incoming)
                .count(),
        }
    }

    pub fn out_degree(&self, id: &str) -> usize {
        match self.node_index.get(id) {
            None => 0,
            Some(&idx) => self
                .digraph
                .edges_directed(idx, petgraph::Direction::Outgoing)
                .count(),
        }
    }

    /// Returns sorted adjacency list: Vec<(node_id, sorted_successor_ids)>.
    pub fn adjacency_list(&self) -> Vec<(String, Vec<String>)> {
        let mut result: Vec<(String, Vec<String>)> = self
            .digraph
            .node_indices()
            .map(|idx| {
                let id = self.digraph[idx].id.clone();
                let mut neighbors: Vec<String> = self
                    .digraph
                    .neighbors(idx)
                    .map(|n| self.digraph[n].id.clone())
                    .collect();
                neighbors.sort();
                (id, neighbors)
            })
            .collect();
        result.sort_by(|a, b| a.0.cmp(&b.0));
        result
    }
}

fn resolve(
    node_index: &HashMap<String, NodeIndex>,
    edge_id: &str,
    node_id: &str,
) -> Result<NodeIndex, GraphError> {
    node_index
        .get(node_id)
        .copied()
        .ok_or_else(|| GraphError::UnknownEndpoint {
            edge: edge_id.to_string(),
            node: node_id.to_string(),
        })
}

#[cfg(test)]
#[path = "../../tests/rust/test_topology_graph.rs"]
mod tests;
