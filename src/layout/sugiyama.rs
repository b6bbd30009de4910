//! Sugiyama layered graph placement.
//!
//! Phases:
//!   1. Cycle removal (greedy-FAS)
//!   2. Rank assignment (longest path from sources)
//!   3. Crossing minimisation (barycenter sweeps)
//!   4. Coordinate assignment over uniform node boxes
//!
//! Every node is treated as the same fixed-size box; the engine knows
//! nothing about rendered content. All tie-breaks are by node id so that
//! repeated runs over the same topology produce identical coordinates.

use std::collections::{HashMap, HashSet};

use crate::model::FlowDirection;
use crate::topology::TopologyIR;

// ─── Geometry constants ──────────────────────────────────────────────────────

/// Uniform node box width in layout units (card width + breathing room).
pub const NODE_WIDTH: f64 = 340.0;
/// Uniform node box height in layout units.
pub const NODE_HEIGHT: f64 = 200.0;
/// Gap between consecutive ranks along the flow axis.
pub const RANK_SEP: f64 = 50.0;
/// Gap between neighbouring nodes within a rank.
pub const NODE_SEP: f64 = 50.0;

// ─── Mini-graph helpers ──────────────────────────────────────────────────────

/// Lightweight adjacency representation used inside the engine.
/// Node order is insertion order, which the caller keeps stable.
pub struct AdjGraph {
    nodes: Vec<String>,
    successors: HashMap<String, Vec<String>>,
    predecessors: HashMap<String, Vec<String>>,
    edges: Vec<(String, String)>,
}

impl AdjGraph {
    fn new() -> Self {
        Self {
            nodes: Vec::new(),
            successors: HashMap::new(),
            predecessors: HashMap::new(),
            edges: Vec::new(),
        }
    }

    fn add_node(&mut self, id: &str) {
        if !self.successors.contains_key(id) {
            self.nodes.push(id.to_string());
            self.successors.insert(id.to_string(), Vec::new());
            self.predecessors.insert(id.to_string(), Vec::new());
        }
    }

    fn add_edge(&mut self, src: &str, tgt: &str) {
        self.successors
            .entry(src.to_string())
            .or_default()
            .push(tgt.to_string());
        self.predecessors
            .entry(tgt.to_string())
            .or_default()
            .push(src.to_string());
        self.edges.push((src.to_string(), tgt.to_string()));
    }

    fn out_degree(&self, id: &str) -> usize {
        self.successors.get(id).map(|v| v.len()).unwrap_or(0)
    }

    fn in_degree(&self, id: &str) -> usize {
        self.predecessors.get(id).map(|v| v.len()).unwrap_or(0)
    }

    fn successors_of(&self, id: &str) -> &[String] {
        self.successors.get(id).map(|v| v.as_slice()).unwrap_or(&[])
    }

    fn predecessors_of(&self, id: &str) -> &[String] {
        self.predecessors
            .get(id)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }
}

/// Build an AdjGraph from the petgraph-backed TopologyIR.
pub fn topology_to_adj(ir: &TopologyIR) -> AdjGraph {
    let mut ag = AdjGraph::new();

    for idx in ir.digraph.node_indices() {
        ag.add_node(&ir.digraph[idx].id);
    }

    for eidx in ir.digraph.edge_indices() {
        if let Some((src_idx, tgt_idx)) = ir.digraph.edge_endpoints(eidx) {
            let src = ir.digraph[src_idx].id.clone();
            let tgt = ir.digraph[tgt_idx].id.clone();
            ag.add_edge(&src, &tgt);
        }
    }

    ag
}

// ─── Cycle Removal (Greedy-FAS) ──────────────────────────────────────────────

/// Compute a node ordering using the greedy-FAS heuristic.
///
/// Scans run over `ag.nodes` in insertion order rather than a hash set, so
/// the ordering is a pure function of the input sequence.
fn greedy_fas_ordering(ag: &AdjGraph) -> Vec<String> {
    let mut active: HashSet<String> = ag.nodes.iter().cloned().collect();
    let mut out_deg: HashMap<String, i64> = HashMap::new();
    let mut in_deg: HashMap<String, i64> = HashMap::new();

    for node in &ag.nodes {
        out_deg.insert(node.clone(), ag.out_degree(node) as i64);
        in_deg.insert(node.clone(), ag.in_degree(node) as i64);
    }

    let mut s1: Vec<String> = Vec::new();
    let mut s2: Vec<String> = Vec::new();

    while !active.is_empty() {
        let mut changed = true;
        while changed {
            changed = false;
            let sinks: Vec<String> = ag
                .nodes
                .iter()
                .filter(|n| active.contains(*n) && *out_deg.get(*n).unwrap_or(&0) == 0)
                .cloned()
                .collect();
            if !sinks.is_empty() {
                changed = true;
                for sink in &sinks {
                    active.remove(sink);
                    s2.push(sink.clone());
                    for pred in ag.predecessors_of(sink) {
                        if active.contains(pred) {
                            *out_deg.entry(pred.clone()).or_insert(0) -= 1;
                        }
                    }
                }
            }
        }

        let mut changed = true;
        while changed {
            changed = false;
            let sources: Vec<String> = ag
                .nodes
                .iter()
                .filter(|n| active.contains(*n) && *in_deg.get(*n).unwrap_or(&0) == 0)
                .cloned()
                .collect();
            if !sources.is_empty() {
                changed = true;
                for source in &sources {
                    active.remove(source);
                    s1.push(source.clone());
                    for succ in ag.successors_of(source) {
                        if active.contains(succ) {
                            *in_deg.entry(succ.clone()).or_insert(0) -= 1;
                        }
                    }
                }
            }
        }

        if !active.is_empty() {
            // Pick the node maximising out-degree minus in-degree; first in
            // insertion order wins ties.
            let mut best: Option<(&String, i64)> = None;
            for n in &ag.nodes {
                if !active.contains(n) {
                    continue;
                }
                let score =
                    out_deg.get(n).copied().unwrap_or(0) - in_deg.get(n).copied().unwrap_or(0);
                match best {
                    Some((_, bs)) if bs >= score => {}
                    _ => best = Some((n, score)),
                }
            }
            if let Some((best_id, _)) = best {
                let best_id = best_id.clone();
                active.remove(&best_id);
                s1.push(best_id.clone());
                for succ in ag.successors_of(&best_id).to_vec() {
                    if active.contains(&succ) {
                        *in_deg.entry(succ).or_insert(0) -= 1;
                    }
                }
                for pred in ag.predecessors_of(&best_id).to_vec() {
                    if active.contains(&pred) {
                        *out_deg.entry(pred).or_insert(0) -= 1;
                    }
                }
            }
        }
    }

    s2.reverse();
    s1.extend(s2);
    s1
}

/// Remove cycles using greedy-FAS: edges pointing backwards against the FAS
/// ordering are reversed, self-loops are dropped. Rank assignment requires
/// the result to be a DAG; the original edge set is untouched.
pub fn remove_cycles(ag: &AdjGraph) -> AdjGraph {
    if ag.nodes.is_empty() {
        return AdjGraph::new();
    }

    let ordering = greedy_fas_ordering(ag);
    let position: HashMap<&str, usize> = ordering
        .iter()
        .enumerate()
        .map(|(i, n)| (n.as_str(), i))
        .collect();

    let mut dag = AdjGraph::new();
    for node_id in &ag.nodes {
        dag.add_node(node_id);
    }

    for (src, tgt) in &ag.edges {
        if src == tgt {
            continue;
        }
        let src_pos = position.get(src.as_str()).copied().unwrap_or(0);
        let tgt_pos = position.get(tgt.as_str()).copied().unwrap_or(0);
        if src_pos > tgt_pos {
            dag.add_edge(tgt, src);
        } else {
            dag.add_edge(src, tgt);
        }
    }

    dag
}

// ─── Rank Assignment ─────────────────────────────────────────────────────────

pub struct RankAssignment {
    pub ranks: HashMap<String, usize>,
    pub rank_count: usize,
}

impl RankAssignment {
    /// Longest-path ranking: every node starts at rank 0 and edges push
    /// their target at least one rank past their source until fixpoint.
    pub fn assign(dag: &AdjGraph) -> Self {
        let mut ranks: HashMap<String, usize> =
            dag.nodes.iter().map(|n| (n.clone(), 0)).collect();

        let mut changed = true;
        while changed {
            changed = false;
            for (src, tgt) in &dag.edges {
                let src_rank = *ranks.get(src).unwrap_or(&0);
                let tgt_rank = ranks.entry(tgt.clone()).or_insert(0);
                if *tgt_rank < src_rank + 1 {
                    *tgt_rank = src_rank + 1;
                    changed = true;
                }
            }
        }

        let rank_count = if ranks.is_empty() {
            1
        } else {
            ranks.values().copied().max().unwrap_or(0) + 1
        };

        Self { ranks, rank_count }
    }
}

// ─── Crossing Minimisation ───────────────────────────────────────────────────

fn barycenter(
    node_id: &str,
    dag: &AdjGraph,
    neighbor_pos: &HashMap<String, f64>,
    direction: &str,
) -> f64 {
    let neighbors: &[String] = if direction == "incoming" {
        dag.predecessors_of(node_id)
    } else {
        dag.successors_of(node_id)
    };
    let positions: Vec<f64> = neighbors
        .iter()
        .filter_map(|nb| neighbor_pos.get(nb).copied())
        .collect();
    if positions.is_empty() {
        f64::INFINITY
    } else {
        positions.iter().sum::<f64>() / positions.len() as f64
    }
}

fn count_crossings(ordering: &[Vec<String>], dag: &AdjGraph) -> usize {
    let mut total = 0usize;
    for r_idx in 0..ordering.len().saturating_sub(1) {
        let tgt_pos: HashMap<&str, usize> = ordering[r_idx + 1]
            .iter()
            .enumerate()
            .map(|(i, nid)| (nid.as_str(), i))
            .collect();
        let mut edges: Vec<(usize, usize)> = Vec::new();
        for (sp, src_id) in ordering[r_idx].iter().enumerate() {
            for nb in dag.successors_of(src_id) {
                if let Some(&tp) = tgt_pos.get(nb.as_str()) {
                    edges.push((sp, tp));
                }
            }
        }
        for i in 0..edges.len() {
            for j in (i + 1)..edges.len() {
                let (ei0, ei1) = edges[i];
                let (ej0, ej1) = edges[j];
                if (ei0 < ej0 && ei1 > ej1) || (ei0 > ej0 && ei1 < ej1) {
                    total += 1;
                }
            }
        }
    }
    total
}

/// Order nodes within each rank via alternating barycenter sweeps,
/// keeping the best ordering seen. Initial ordering is sorted by id.
pub fn minimise_crossings(dag: &AdjGraph, ra: &RankAssignment) -> Vec<Vec<String>> {
    let rank_count = ra.rank_count;
    let mut ordering: Vec<Vec<String>> = vec![Vec::new(); rank_count];

    let mut sorted_nodes: Vec<&str> = dag.nodes.iter().map(|s| s.as_str()).collect();
    sorted_nodes.sort();
    for node_id in sorted_nodes {
        let rank = *ra.ranks.get(node_id).unwrap_or(&0);
        if rank < ordering.len() {
            ordering[rank].push(node_id.to_string());
        }
    }

    let max_passes = 24;
    let mut best = count_crossings(&ordering, dag);

    for _pass in 0..max_passes {
        for rank_idx in 1..rank_count {
            let prev: HashMap<String, f64> = ordering[rank_idx - 1]
                .iter()
                .enumerate()
                .map(|(i, nid)| (nid.clone(), i as f64))
                .collect();
            ordering[rank_idx].sort_by(|a, b| {
                let ba = barycenter(a, dag, &prev, "incoming");
                let bb = barycenter(b, dag, &prev, "incoming");
                ba.partial_cmp(&bb).unwrap_or(std::cmp::Ordering::Equal)
            });
        }

        for rank_idx in (0..rank_count.saturating_sub(1)).rev() {
            let nxt: HashMap<String, f64> = ordering[rank_idx + 1]
                .iter()
                .enumerate()
                .map(|(i, nid)| (nid.clone(), i as f64))
                .collect();
            ordering[rank_idx].sort_by(|a, b| {
                let ba = barycenter(a, dag, &nxt, "outgoing");
                let bb = barycenter(b, dag, &nxt, "outgoing");
                ba.partial_cmp(&bb).unwrap_or(std::cmp::Ordering::Equal)
            });
        }

        let new_crossings = count_crossings(&ordering, dag);
        if new_crossings >= best {
            break;
        }
        best = new_crossings;
    }

    ordering
}

// ─── Coordinate Assignment ───────────────────────────────────────────────────

/// A node with its rank, intra-rank order, and box center coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedNode {
    pub id: String,
    pub rank: usize,
    pub order: usize,
    pub center_x: f64,
    pub center_y: f64,
}

/// Assign box-center coordinates: ranks are spaced along the flow axis,
/// nodes within a rank along the cross axis, each rank centered against
/// the widest one. Spacing is box extent plus gap, so boxes never overlap.
pub fn assign_centers(ordering: &[Vec<String>], direction: FlowDirection) -> Vec<PlacedNode> {
    let (flow_extent, cross_extent) = match direction {
        FlowDirection::LeftToRight => (NODE_WIDTH, NODE_HEIGHT),
        FlowDirection::TopToBottom => (NODE_HEIGHT, NODE_WIDTH),
    };

    let rank_cross_width = |count: usize| -> f64 {
        if count == 0 {
            0.0
        } else {
            count as f64 * cross_extent + (count - 1) as f64 * NODE_SEP
        }
    };

    let max_cross = ordering
        .iter()
        .map(|rank| rank_cross_width(rank.len()))
        .fold(0.0_f64, f64::max);

    let mut placed: Vec<PlacedNode> = Vec::new();
    for (rank_idx, rank_nodes) in ordering.iter().enumerate() {
        let flow_center =
            rank_idx as f64 * (flow_extent + RANK_SEP) + flow_extent / 2.0;
        let offset = (max_cross - rank_cross_width(rank_nodes.len())) / 2.0;
        for (order, node_id) in rank_nodes.iter().enumerate() {
            let cross_center =
                offset + order as f64 * (cross_extent + NODE_SEP) + cross_extent / 2.0;
            let (center_x, center_y) = match direction {
                FlowDirection::LeftToRight => (flow_center, cross_center),
                FlowDirection::TopToBottom => (cross_center, flow_center),
            };
            placed.push(PlacedNode {
                id: node_id.clone(),
                rank: rank_idx,
                order,
                center_x,
                center_y,
            });
        }
    }

    placed
}

// ─── SugiyamaLayout Engine ───────────────────────────────────────────────────

/// Layered placement engine over a validated topology.
pub struct SugiyamaLayout;

impl SugiyamaLayout {
    /// Run the full placement pipeline on the given TopologyIR.
    pub fn layout(ir: &TopologyIR, direction: FlowDirection) -> Vec<PlacedNode> {
        let ag = topology_to_adj(ir);
        let dag = remove_cycles(&ag);
        let ra = RankAssignment::assign(&dag);
        let ordering = minimise_crossings(&dag, &ra);
        assign_centers(&ordering, direction)
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_sugiyama.rs"]
mod tests;
