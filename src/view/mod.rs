//! View state: selected app, selected node, and the laid-out graph.
//!
//! An explicit state container owned by the top-level view, replacing the
//! ambient global store: collaborators receive a `&mut Workspace` and
//! observers register callbacks for change notification.
//!
//! Ownership rule: the workspace owns the graph of the currently selected
//! app. Switching apps replaces it wholesale — in-progress inspector edits
//! and position tweaks are discarded, never merged.

use thiserror::Error;

use crate::layout::layout_graph;
use crate::model::{FlowDirection, GraphPayload, ServiceNode};
use crate::source::{GraphSource, SourceError};
use crate::topology::GraphError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Graph(#[from] GraphError),
    #[error("no app selected")]
    NoApp,
    #[error("no node with id '{0}' in the current graph")]
    NodeNotFound(String),
}

/// Change notification emitted after the workspace mutates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    /// A new app's graph was fetched, laid out, and installed.
    GraphReplaced { app_id: String },
    /// The app (and its graph) was deselected.
    AppCleared,
    /// Node selection changed (None = deselected).
    NodeSelected(Option<String>),
    /// A node's attribute data was edited in the inspector.
    NodeUpdated(String),
}

type Listener = Box<dyn Fn(&ViewEvent)>;

/// State container for one dashboard view.
pub struct Workspace<S: GraphSource> {
    source: S,
    direction: FlowDirection,
    selected_app: Option<String>,
    selected_node: Option<String>,
    graph: Option<GraphPayload>,
    listeners: Vec<Listener>,
}

impl<S: GraphSource> Workspace<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            direction: FlowDirection::default(),
            selected_app: None,
            selected_node: None,
            graph: None,
            listeners: Vec::new(),
        }
    }

    pub fn with_direction(mut self, direction: FlowDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Register a change-notification callback.
    pub fn subscribe(&mut self, listener: impl Fn(&ViewEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn selected_app(&self) -> Option<&str> {
        self.selected_app.as_deref()
    }

    pub fn selected_node(&self) -> Option<&str> {
        self.selected_node.as_deref()
    }

    pub fn direction(&self) -> FlowDirection {
        self.direction
    }

    /// The laid-out graph of the selected app, if one is loaded.
    pub fn graph(&self) -> Option<&GraphPayload> {
        self.graph.as_ref()
    }

    /// Select an app: fetch its graph, lay it out, and replace the current
    /// view. Node selection resets — it referred to the discarded graph.
    pub fn select_app(&mut self, app_id: &str) -> Result<(), ViewError> {
        let payload = self.source.fetch_graph(app_id)?;
        let nodes = layout_graph(&payload.nodes, &payload.edges, self.direction)?;
        self.graph = Some(GraphPayload::new(nodes, payload.edges));
        self.selected_app = Some(app_id.to_string());
        self.selected_node = None;
        self.emit(&ViewEvent::GraphReplaced {
            app_id: app_id.to_string(),
        });
        Ok(())
    }

    /// Deselect the app, discarding its graph and any pending edits.
    pub fn clear_app(&mut self) {
        self.graph = None;
        self.selected_app = None;
        self.selected_node = None;
        self.emit(&ViewEvent::AppCleared);
    }

    /// Select a node for inspection, or pass None to deselect.
    pub fn select_node(&mut self, node_id: Option<&str>) -> Result<(), ViewError> {
        if let Some(id) = node_id {
            self.node(id)?;
        }
        self.selected_node = node_id.map(str::to_owned);
        self.emit(&ViewEvent::NodeSelected(self.selected_node.clone()));
        Ok(())
    }

    /// The full entry of the currently selected node, if any.
    pub fn selected_node_entry(&self) -> Option<&ServiceNode> {
        let id = self.selected_node.as_deref()?;
        self.graph
            .as_ref()?
            .nodes
            .iter()
            .find(|n| n.id == id)
    }

    /// Inspector edit: change a node's display name.
    pub fn rename_node(&mut self, node_id: &str, name: &str) -> Result<(), ViewError> {
        self.node_mut(node_id)?.data.name = name.to_string();
        self.emit(&ViewEvent::NodeUpdated(node_id.to_string()));
        Ok(())
    }

    /// Inspector edit: change a node's replica count.
    pub fn set_replicas(&mut self, node_id: &str, replicas: u32) -> Result<(), ViewError> {
        self.node_mut(node_id)?.data.replicas = replicas;
        self.emit(&ViewEvent::NodeUpdated(node_id.to_string()));
        Ok(())
    }

    fn node(&self, node_id: &str) -> Result<&ServiceNode, ViewError> {
        let graph = self.graph.as_ref().ok_or(ViewError::NoApp)?;
        graph
            .nodes
            .iter()
            .find(|n| n.id == node_id)
            .ok_or_else(|| ViewError::NodeNotFound(node_id.to_string()))
    }

    fn node_mut(&mut self, node_id: &str) -> Result<&mut ServiceNode, ViewError> {
        let graph = self.graph.as_mut().ok_or(ViewError::NoApp)?;
        graph
            .nodes
            .iter_mut()
            .find(|n| n.id == node_id)
            .ok_or_else(|| ViewError::NodeNotFound(node_id.to_string()))
    }

    fn emit(&self, event: &ViewEvent) {
        for listener in &self.listeners {
            listener(event);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_view_workspace.rs"]
mod tests;
