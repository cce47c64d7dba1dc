//! Shared holder for the active campus graph.
//!
//! Readers take an [`Arc`] snapshot and query it without holding any lock.
//! Imports validate the replacement document completely before swapping the
//! pointer, so a query in flight keeps seeing the graph it started with and a
//! rejected import leaves the previous graph active.

use std::sync::{Arc, PoisonError, RwLock};

use serde_json::Value;
use tracing::{info, warn};

use crate::document::GraphDocument;
use crate::error::Result;
use crate::graph::{load_graph, Graph};
use crate::routing::{shortest_path, RouteResult};

#[derive(Debug, Default)]
pub struct GraphStore {
    current: RwLock<Arc<Graph>>,
}

impl GraphStore {
    pub fn new(graph: Graph) -> Self {
        Self {
            current: RwLock::new(Arc::new(graph)),
        }
    }

    /// Consistent view of the active graph.
    pub fn snapshot(&self) -> Arc<Graph> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Swap in a new graph, returning the one it replaced.
    pub fn replace(&self, graph: Graph) -> Arc<Graph> {
        self.swap(Arc::new(graph))
    }

    fn swap(&self, graph: Arc<Graph>) -> Arc<Graph> {
        let mut guard = self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, graph)
    }

    /// Validate `value` and make it the active graph.
    ///
    /// Returns the imported graph itself, even if a concurrent import has
    /// already replaced it.
    pub fn import_value(&self, value: &Value) -> Result<Arc<Graph>> {
        let graph = match load_graph(value) {
            Ok(graph) => graph,
            Err(error) => {
                warn!(%error, "rejected graph import; keeping current graph");
                return Err(error);
            }
        };

        info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "imported campus graph"
        );
        let graph = Arc::new(graph);
        self.swap(Arc::clone(&graph));
        Ok(graph)
    }

    /// Parse JSON text, validate it, and make it the active graph.
    pub fn import_str(&self, text: &str) -> Result<Arc<Graph>> {
        let value: Value = match serde_json::from_str(text) {
            Ok(value) => value,
            Err(error) => {
                warn!(%error, "rejected graph import; keeping current graph");
                return Err(error.into());
            }
        };
        self.import_value(&value)
    }

    /// Document for the active graph, suitable for download.
    pub fn export_document(&self) -> GraphDocument {
        self.snapshot().to_document()
    }

    /// Minimum-distance route on the active graph.
    pub fn shortest_path(&self, start: &str, goal: &str) -> Option<RouteResult> {
        shortest_path(&self.snapshot(), start, goal)
    }
}
