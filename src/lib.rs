//! topoview — service topology inspection core.
//!
//! Data flow: graph source → layout adapter → render surface.
//! The crate owns the first two: a mocked `GraphSource` serving topology
//! payloads and a deterministic layered auto-layout that annotates each
//! node with an absolute position and connector anchor sides. A render
//! surface (external) draws the annotated nodes and the untouched edges.
//!
//! Public entry points: [`load_app_graph`] for one-shot fetch-and-layout,
//! [`view::Workspace`] for stateful selection and inspector edits.

pub mod layout;
pub mod model;
pub mod source;
pub mod topology;
pub mod view;

use crate::layout::layout_graph;
use crate::model::{FlowDirection, GraphPayload};
use crate::source::GraphSource;
use crate::view::ViewError;

/// Fetch an app's graph and lay it out in one call.
pub fn load_app_graph<S: GraphSource>(
    source: &S,
    app_id: &str,
    direction: FlowDirection,
) -> Result<GraphPayload, ViewError> {
    let payload = source.fetch_graph(app_id)?;
    let nodes = layout_graph(&payload.nodes, &payload.edges, direction)?;
    Ok(GraphPayload::new(nodes, payload.edges))
}
