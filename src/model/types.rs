//! Wire-level data model for a service topology graph.
//!
//! Field names follow the graph payload shape:
//! `{ nodes: [{id, type, position, data}], edges: [{id, source, target, animated?}] }`.

use serde::{Deserialize, Serialize};

// ─── FlowDirection ───────────────────────────────────────────────────────────

/// Axis along which rank order increases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FlowDirection {
    /// Ranks grow along +x; sources anchor right, targets anchor left.
    #[default]
    #[serde(rename = "LR")]
    LeftToRight,
    /// Ranks grow along +y; sources anchor bottom, targets anchor top.
    #[serde(rename = "TB")]
    TopToBottom,
}

impl std::str::FromStr for FlowDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "LR" => Ok(Self::LeftToRight),
            "TB" | "TD" => Ok(Self::TopToBottom),
            other => Err(format!("Unknown direction '{other}'; use LR or TB")),
        }
    }
}

// ─── AnchorSide ──────────────────────────────────────────────────────────────

/// Side of a node box where a connector attaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnchorSide {
    Left,
    Right,
    Top,
    Bottom,
}

// ─── ServiceKind ─────────────────────────────────────────────────────────────

/// Visual tag for a node; selects the icon/card variant, nothing more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceKind {
    #[default]
    Service,
    Input,
    Output,
}

// ─── ServiceStatus ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Healthy,
    Degraded,
    Down,
    #[default]
    Unknown,
}

// ─── Position ────────────────────────────────────────────────────────────────

/// Absolute top-left coordinate of a node box in layout space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

// ─── ServiceSpec ─────────────────────────────────────────────────────────────

/// Per-node attribute data shown and edited in the inspector.
///
/// Real payloads use `name` and `label` interchangeably for the display
/// name, so `label` is accepted as an alias on input.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ServiceSpec {
    #[serde(default, alias = "label")]
    pub name: String,
    #[serde(default)]
    pub status: ServiceStatus,
    #[serde(default)]
    pub replicas: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<String>,
}

impl ServiceSpec {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

// ─── ServiceNode ─────────────────────────────────────────────────────────────

/// One service in the topology graph.
///
/// `position` and the anchor sides are owned by the layout adapter; the
/// fetched payload may carry stale positions, which layout overwrites.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceNode {
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: ServiceKind,
    #[serde(default)]
    pub position: Position,
    #[serde(default)]
    pub data: ServiceSpec,
    #[serde(rename = "sourcePosition", default, skip_serializing_if = "Option::is_none")]
    pub source_anchor: Option<AnchorSide>,
    #[serde(rename = "targetPosition", default, skip_serializing_if = "Option::is_none")]
    pub target_anchor: Option<AnchorSide>,
}

impl ServiceNode {
    pub fn new(id: impl Into<String>, data: ServiceSpec) -> Self {
        Self {
            id: id.into(),
            kind: ServiceKind::Service,
            position: Position::default(),
            data,
            source_anchor: None,
            target_anchor: None,
        }
    }

    /// Create a bare node (name = id, default kind).
    pub fn bare(id: impl Into<String>) -> Self {
        let id = id.into();
        let data = ServiceSpec::named(id.clone());
        Self::new(id, data)
    }

    pub fn with_kind(mut self, kind: ServiceKind) -> Self {
        self.kind = kind;
        self
    }
}

// ─── ServiceEdge ─────────────────────────────────────────────────────────────

/// Directed connection between two services.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    /// Purely visual: denotes active traffic on the connector.
    #[serde(default, skip_serializing_if = "is_false")]
    pub animated: bool,
}

impl ServiceEdge {
    pub fn new(
        id: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            animated: false,
        }
    }

    pub fn animated(mut self) -> Self {
        self.animated = true;
        self
    }
}

fn is_false(b: &bool) -> bool {
    !*b
}

// ─── GraphPayload ────────────────────────────────────────────────────────────

/// The (nodes, edges) pairing for one selected app.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GraphPayload {
    #[serde(default)]
    pub nodes: Vec<ServiceNode>,
    #[serde(default)]
    pub edges: Vec<ServiceEdge>,
}

impl GraphPayload {
    pub fn new(nodes: Vec<ServiceNode>, edges: Vec<ServiceEdge>) -> Self {
        Self { nodes, edges }
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_model_types.rs"]
mod tests;
