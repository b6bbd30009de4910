//! Graph source boundary: where topology payloads come from.
//!
//! The view layer only sees the `GraphSource` trait; the crate ships a
//! mocked implementation with fixture topologies. Retry policy, if any,
//! belongs behind this trait, never in the layout adapter.

pub mod mock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::GraphPayload;

pub use mock::MockSource;

/// One selectable app in the dashboard's app list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSummary {
    pub id: String,
    pub name: String,
}

impl AppSummary {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    #[error("no app with id '{0}'")]
    NotFound(String),
    #[error("network error: {0}")]
    Network(String),
}

/// Provider of the app list and per-app topology graphs.
pub trait GraphSource {
    /// List the apps available for selection.
    fn fetch_apps(&self) -> Result<Vec<AppSummary>, SourceError>;

    /// Fetch the topology graph for one app.
    fn fetch_graph(&self, app_id: &str) -> Result<GraphPayload, SourceError>;
}
