use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use crate::document::{validate_document, Edge, GraphDocument, Metadata, Node, NodeId};
use crate::error::Result;

/// Dense index of a node within a [`Graph`], in document order.
pub type NodeIndex = usize;

/// Adjacency entry within the routing graph.
///
/// `edge` is the position of the originating walkway in [`Graph::edges`], so
/// callers can attribute a hop to the exact walkway even when several
/// parallel walkways connect the same pair of locations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub target: NodeIndex,
    pub distance: f64,
    pub edge: usize,
}

/// Immutable campus graph used by the route planners.
///
/// Cloning is cheap: all storage sits behind [`Arc`], so a clone is a
/// consistent snapshot that can be handed to another thread.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Arc<Vec<Node>>,
    edges: Arc<Vec<Edge>>,
    index: Arc<HashMap<NodeId, NodeIndex>>,
    adjacency: Arc<Vec<Vec<Link>>>,
    metadata: Option<Arc<Metadata>>,
}

impl Graph {
    /// Build a graph from an already validated document.
    ///
    /// Walkways that reference unknown node ids are kept for export but add
    /// no adjacency; a warning is logged for each.
    pub fn from_document(document: GraphDocument) -> Self {
        let GraphDocument {
            nodes,
            edges,
            metadata,
        } = document;

        let index: HashMap<NodeId, NodeIndex> = nodes
            .iter()
            .enumerate()
            .map(|(position, node)| (node.id.clone(), position))
            .collect();

        let mut adjacency: Vec<Vec<Link>> = vec![Vec::new(); nodes.len()];
        let mut dangling = 0usize;
        for (position, edge) in edges.iter().enumerate() {
            let (Some(&a), Some(&b)) = (index.get(&edge.a), index.get(&edge.b)) else {
                warn!(
                    edge = position,
                    a = %edge.a,
                    b = %edge.b,
                    "walkway references unknown location; ignoring for routing"
                );
                dangling += 1;
                continue;
            };

            adjacency[a].push(Link {
                target: b,
                distance: edge.dist,
                edge: position,
            });
            if a != b {
                adjacency[b].push(Link {
                    target: a,
                    distance: edge.dist,
                    edge: position,
                });
            }
        }

        debug!(
            nodes = nodes.len(),
            edges = edges.len(),
            dangling,
            "built campus graph"
        );

        Self {
            nodes: Arc::new(nodes),
            edges: Arc::new(edges),
            index: Arc::new(index),
            adjacency: Arc::new(adjacency),
            metadata: metadata.map(Arc::new),
        }
    }

    /// Number of locations in the graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of walkways in the graph, including ones that reference unknown
    /// locations.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All locations in document order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All walkways in document order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_deref()
    }

    /// Exact-match lookup by location id.
    pub fn find_node(&self, id: &str) -> Option<&Node> {
        self.index_of(id).map(|position| &self.nodes[position])
    }

    /// Case-insensitive lookup by display name, folding case the same way
    /// typeahead search does. The first match in document order wins.
    pub fn find_node_by_name(&self, name: &str) -> Option<&Node> {
        let needle = name.trim().to_lowercase();
        self.nodes
            .iter()
            .find(|node| node.name.to_lowercase() == needle)
    }

    /// Dense index for a location id.
    pub fn index_of(&self, id: &str) -> Option<NodeIndex> {
        self.index.get(id).copied()
    }

    /// Location stored at a dense index.
    pub fn node_at(&self, index: NodeIndex) -> Option<&Node> {
        self.nodes.get(index)
    }

    /// Walkway stored at a position in [`Graph::edges`].
    pub fn edge_at(&self, position: usize) -> Option<&Edge> {
        self.edges.get(position)
    }

    /// Adjacency entries for a dense node index.
    pub fn links(&self, index: NodeIndex) -> &[Link] {
        self.adjacency
            .get(index)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Return `(neighbour_id, distance)` for every walkway incident to `id`.
    ///
    /// Parallel walkways produce one entry each. Isolated and unknown
    /// locations both yield an empty list.
    pub fn neighbours(&self, id: &str) -> Vec<(&str, f64)> {
        let Some(index) = self.index_of(id) else {
            return Vec::new();
        };

        self.links(index)
            .iter()
            .map(|link| (self.nodes[link.target].id.as_str(), link.distance))
            .collect()
    }

    /// Rebuild the document this graph was loaded from.
    pub fn to_document(&self) -> GraphDocument {
        GraphDocument {
            nodes: self.nodes.as_ref().clone(),
            edges: self.edges.as_ref().clone(),
            metadata: self.metadata.as_deref().cloned(),
        }
    }
}

/// Validate a JSON document and build a graph from it.
pub fn load_graph(value: &Value) -> Result<Graph> {
    let document = validate_document(value)?;
    Ok(Graph::from_document(document))
}

/// Parse JSON text and build a graph from it.
pub fn parse_graph(text: &str) -> Result<Graph> {
    let value: Value = serde_json::from_str(text)?;
    load_graph(&value)
}
