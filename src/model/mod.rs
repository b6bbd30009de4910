//! Data model: nodes, edges, payloads, and the small enums they carry.

pub mod types;

pub use types::{
    AnchorSide, FlowDirection, GraphPayload, Position, ServiceEdge, ServiceKind, ServiceNode,
    ServiceSpec, ServiceStatus,
};
