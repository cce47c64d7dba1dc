//! Route planning strategies.
//!
//! Each algorithm is wrapped in a small planner struct behind the
//! [`RoutePlanner`] trait so [`super::plan_route`] can stay agnostic of how a
//! path is searched.

use crate::graph::{Graph, NodeIndex};
use crate::path::{find_route_bfs, find_route_dijkstra, find_route_linear_scan, PathTrace};

use super::RouteAlgorithm;

/// Trait for route planning strategies.
pub trait RoutePlanner: Send + Sync {
    /// The algorithm identifier for this planner.
    fn algorithm(&self) -> RouteAlgorithm;

    /// Execute the search on the given graph.
    ///
    /// Returns `Some(trace)` if a route is found, `None` otherwise.
    fn find_path(&self, graph: &Graph, start: NodeIndex, goal: NodeIndex) -> Option<PathTrace>;
}

/// Heap-based Dijkstra planner, minimising walking distance.
#[derive(Debug, Clone, Default)]
pub struct DijkstraPlanner;

impl RoutePlanner for DijkstraPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::Dijkstra
    }

    fn find_path(&self, graph: &Graph, start: NodeIndex, goal: NodeIndex) -> Option<PathTrace> {
        find_route_dijkstra(graph, start, goal)
    }
}

/// Dijkstra planner that selects the next node with a linear scan.
#[derive(Debug, Clone, Default)]
pub struct LinearScanPlanner;

impl RoutePlanner for LinearScanPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::LinearScan
    }

    fn find_path(&self, graph: &Graph, start: NodeIndex, goal: NodeIndex) -> Option<PathTrace> {
        find_route_linear_scan(graph, start, goal)
    }
}

/// Breadth-first planner, minimising the number of walkways.
#[derive(Debug, Clone, Default)]
pub struct BfsPlanner;

impl RoutePlanner for BfsPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::Bfs
    }

    fn find_path(&self, graph: &Graph, start: NodeIndex, goal: NodeIndex) -> Option<PathTrace> {
        find_route_bfs(graph, start, goal)
    }
}

/// Select the planner for an algorithm.
pub fn select_planner(algorithm: RouteAlgorithm) -> Box<dyn RoutePlanner> {
    match algorithm {
        RouteAlgorithm::Dijkstra => Box::new(DijkstraPlanner),
        RouteAlgorithm::LinearScan => Box::new(LinearScanPlanner),
        RouteAlgorithm::Bfs => Box::new(BfsPlanner),
    }
}
