//! Campus map library entry points.
//!
//! This crate loads and validates the campus walkway graph, exposes location
//! lookup and typeahead search, and runs shortest-path queries between
//! locations. Higher-level consumers (the CLI, a map front end) should only
//! depend on the functions exported here instead of reimplementing behavior.

pub mod dataset;
pub mod document;
pub mod error;
pub mod graph;
pub mod output;
pub mod path;
pub mod routing;
pub mod search;
pub mod store;

pub use dataset::{
    default_graph_path, import_graph_file, load_graph_file, resolve_graph_path,
    write_graph_document, GRAPH_FILENAME, GRAPH_PATH_ENV,
};
pub use document::{validate_document, Edge, GraphDocument, LatLng, Metadata, Node, NodeId};
pub use error::{Error, Result};
pub use graph::{load_graph, parse_graph, Graph, Link, NodeIndex};
pub use output::{format_distance, RouteEndpoint, RouteRenderMode, RouteSummary, RouteWaypoint};
pub use routing::{
    plan_route, resolve_node, shortest_path, shortest_path_with, RouteAlgorithm, RoutePlan,
    RouteRequest, RouteResult, RouteStep,
};
pub use search::{search_nodes, MatchRank, SearchHit};
pub use store::GraphStore;
