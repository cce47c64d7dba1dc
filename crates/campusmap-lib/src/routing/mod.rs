//! Route planning between campus locations.
//!
//! This module provides:
//! - [`shortest_path`] - the minimum-distance query by location id
//! - [`RouteAlgorithm`] - supported search strategies (Dijkstra, linear scan, BFS)
//! - [`RouteRequest`] / [`RoutePlan`] - caller-facing request and result
//! - [`plan_route`] - resolves names, checks preconditions, and runs a planner
//!
//! # Example
//!
//! ```ignore
//! use campusmap_lib::{load_graph_file, plan_route, RouteRequest};
//!
//! let graph = load_graph_file("campus_graph.json".as_ref())?;
//! let plan = plan_route(&graph, &RouteRequest::new("Library", "Gym"))?;
//! println!("{} m over {} walkways", plan.route.distance, plan.hop_count());
//! ```

mod planner;

pub use planner::{select_planner, BfsPlanner, DijkstraPlanner, LinearScanPlanner, RoutePlanner};

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::document::NodeId;
use crate::error::{Error, Result};
use crate::graph::{Graph, NodeIndex};
use crate::path::PathTrace;

/// Supported routing algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum RouteAlgorithm {
    /// Dijkstra's algorithm with a binary heap.
    #[default]
    Dijkstra,
    /// Dijkstra's algorithm with a linear scan for the closest node.
    LinearScan,
    /// Breadth-first search (fewest walkways).
    Bfs,
}

impl fmt::Display for RouteAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RouteAlgorithm::Dijkstra => "dijkstra",
            RouteAlgorithm::LinearScan => "linear-scan",
            RouteAlgorithm::Bfs => "bfs",
        };
        f.write_str(value)
    }
}

/// One walkway traversed by a route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteStep {
    pub from: NodeId,
    pub to: NodeId,
    pub distance: f64,
}

/// Ordered path, total distance, and per-walkway breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteResult {
    pub path: Vec<NodeId>,
    pub distance: f64,
    pub steps: Vec<RouteStep>,
}

impl RouteResult {
    fn from_trace(graph: &Graph, trace: &PathTrace) -> Self {
        let path = trace
            .nodes
            .iter()
            .filter_map(|&index| graph.node_at(index))
            .map(|node| node.id.clone())
            .collect::<Vec<_>>();

        let steps = path
            .windows(2)
            .zip(&trace.edges)
            .map(|(pair, &edge)| RouteStep {
                from: pair[0].clone(),
                to: pair[1].clone(),
                distance: graph.edge_at(edge).map(|e| e.dist).unwrap_or_default(),
            })
            .collect();

        Self {
            path,
            distance: trace.distance,
            steps,
        }
    }
}

/// Compute the minimum-distance route between two location ids.
///
/// Returns `None` when either id is unknown or the locations are not
/// connected. Asking for a route from a location to itself yields a
/// single-element path with zero distance.
pub fn shortest_path(graph: &Graph, start: &str, goal: &str) -> Option<RouteResult> {
    shortest_path_with(graph, start, goal, RouteAlgorithm::Dijkstra)
}

/// Like [`shortest_path`], using the requested algorithm.
pub fn shortest_path_with(
    graph: &Graph,
    start: &str,
    goal: &str,
    algorithm: RouteAlgorithm,
) -> Option<RouteResult> {
    let start_index = graph.index_of(start)?;
    let goal_index = graph.index_of(goal)?;
    let trace = select_planner(algorithm).find_path(graph, start_index, goal_index)?;
    Some(RouteResult::from_trace(graph, &trace))
}

/// High-level route planning request. Endpoints may be ids or names.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub start: String,
    pub goal: String,
    pub algorithm: RouteAlgorithm,
}

impl RouteRequest {
    /// Shortest-distance request between two locations.
    pub fn new(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            algorithm: RouteAlgorithm::default(),
        }
    }

    pub fn with_algorithm(mut self, algorithm: RouteAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, Serialize)]
pub struct RoutePlan {
    pub algorithm: RouteAlgorithm,
    pub start: NodeId,
    pub goal: NodeId,
    pub route: RouteResult,
}

impl RoutePlan {
    /// Number of walkways in the route.
    pub fn hop_count(&self) -> usize {
        self.route.steps.len()
    }
}

/// Resolve a location by exact id, falling back to a case-insensitive name
/// match. Unknown locations carry fuzzy suggestions.
pub fn resolve_node(graph: &Graph, query: &str) -> Result<NodeIndex> {
    if let Some(index) = graph.index_of(query) {
        return Ok(index);
    }

    if let Some(node) = graph.find_node_by_name(query) {
        if let Some(index) = graph.index_of(&node.id) {
            return Ok(index);
        }
    }

    Err(Error::UnknownNode {
        name: query.to_string(),
        suggestions: graph.fuzzy_node_matches(query, 3),
    })
}

/// Compute a route for a caller request.
///
/// 1. Resolves both endpoints by id or name
/// 2. Rejects identical endpoints
/// 3. Runs the selected planner
pub fn plan_route(graph: &Graph, request: &RouteRequest) -> Result<RoutePlan> {
    let start_index = resolve_node(graph, &request.start)?;
    let goal_index = resolve_node(graph, &request.goal)?;

    let (Some(start), Some(goal)) = (graph.node_at(start_index), graph.node_at(goal_index)) else {
        return Err(Error::RouteNotFound {
            start: request.start.clone(),
            goal: request.goal.clone(),
        });
    };

    if start_index == goal_index {
        return Err(Error::IdenticalEndpoints {
            node: start.name.clone(),
        });
    }

    let planner = select_planner(request.algorithm);
    debug!(
        algorithm = %planner.algorithm(),
        start = %start.id,
        goal = %goal.id,
        "planning route"
    );

    let trace = planner
        .find_path(graph, start_index, goal_index)
        .ok_or_else(|| Error::RouteNotFound {
            start: start.name.clone(),
            goal: goal.name.clone(),
        })?;

    Ok(RoutePlan {
        algorithm: request.algorithm,
        start: start.id.clone(),
        goal: goal.id.clone(),
        route: RouteResult::from_trace(graph, &trace),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_plan_hop_count() {
        let plan = RoutePlan {
            algorithm: RouteAlgorithm::Dijkstra,
            start: "A".to_string(),
            goal: "C".to_string(),
            route: RouteResult {
                path: vec!["A".into(), "B".into(), "C".into()],
                distance: 3.0,
                steps: vec![
                    RouteStep {
                        from: "A".into(),
                        to: "B".into(),
                        distance: 1.0,
                    },
                    RouteStep {
                        from: "B".into(),
                        to: "C".into(),
                        distance: 2.0,
                    },
                ],
            },
        };
        assert_eq!(plan.hop_count(), 2);
    }

    #[test]
    fn algorithm_display_matches_serde_names() {
        for algorithm in [
            RouteAlgorithm::Dijkstra,
            RouteAlgorithm::LinearScan,
            RouteAlgorithm::Bfs,
        ] {
            let json = serde_json::to_string(&algorithm).expect("serialize");
            assert_eq!(json, format!("\"{algorithm}\""));
        }
    }

    #[test]
    fn request_defaults_to_dijkstra() {
        let request = RouteRequest::new("A", "B");
        assert_eq!(request.algorithm, RouteAlgorithm::Dijkstra);
        let request = request.with_algorithm(RouteAlgorithm::Bfs);
        assert_eq!(request.algorithm, RouteAlgorithm::Bfs);
    }
}
