use std::fmt::Write;

use serde::Serialize;

use crate::document::NodeId;
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::routing::{RouteAlgorithm, RoutePlan};

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    PlainText,
    RichText,
    Directions,
}

/// Endpoint within a planned route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteEndpoint {
    pub id: NodeId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl RouteEndpoint {
    fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<unknown>")
    }
}

/// Location visited while walking a planned route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteWaypoint {
    pub index: usize,
    pub id: NodeId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
    /// Length of the walkway leading to this waypoint; `None` for the start.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leg_distance: Option<f64>,
    pub cumulative_distance: f64,
}

impl RouteWaypoint {
    fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<unknown>")
    }
}

/// Structured representation of a planned route that consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub algorithm: RouteAlgorithm,
    pub hops: usize,
    pub distance: f64,
    pub start: RouteEndpoint,
    pub goal: RouteEndpoint,
    pub waypoints: Vec<RouteWaypoint>,
}

impl RouteSummary {
    /// Convert a [`RoutePlan`] into a summary with resolved location names.
    pub fn from_plan(graph: &Graph, plan: &RoutePlan) -> Result<Self> {
        let route = &plan.route;
        let (Some(first), Some(last)) = (route.path.first(), route.path.last()) else {
            return Err(Error::EmptyRoutePlan);
        };

        let mut cumulative = 0.0;
        let waypoints = route
            .path
            .iter()
            .enumerate()
            .map(|(index, id)| {
                let node = graph.find_node(id);
                let leg_distance = index
                    .checked_sub(1)
                    .and_then(|previous| route.steps.get(previous))
                    .map(|step| step.distance);
                cumulative += leg_distance.unwrap_or_default();
                RouteWaypoint {
                    index,
                    id: id.clone(),
                    name: node.map(|node| node.name.clone()),
                    lat: node.map(|node| node.lat),
                    lng: node.map(|node| node.lng),
                    leg_distance,
                    cumulative_distance: cumulative,
                }
            })
            .collect::<Vec<_>>();

        Ok(Self {
            algorithm: plan.algorithm,
            hops: plan.hop_count(),
            distance: route.distance,
            start: endpoint(graph, first),
            goal: endpoint(graph, last),
            waypoints,
        })
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::PlainText => self.render_plain(),
            RouteRenderMode::RichText => self.render_rich(),
            RouteRenderMode::Directions => self.render_directions(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Route: {} -> {} ({} walkways, {}, algorithm: {})",
            self.start.display_name(),
            self.goal.display_name(),
            self.hops,
            format_distance(self.distance),
            self.algorithm
        );

        for waypoint in &self.waypoints {
            let leg = waypoint
                .leg_distance
                .map(|d| format!(" +{}", format_distance(d)))
                .unwrap_or_default();
            let _ = writeln!(
                buffer,
                "{:>3}: {} ({}){}",
                waypoint.index,
                waypoint.display_name(),
                waypoint.id,
                leg
            );
        }

        buffer
    }

    fn render_rich(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "**Route** _{} → {}_ ({} walkways, {}, algorithm: `{}`)",
            self.start.display_name(),
            self.goal.display_name(),
            self.hops,
            format_distance(self.distance),
            self.algorithm
        );
        for waypoint in &self.waypoints {
            let _ = writeln!(
                buffer,
                "* {:>2}. **{}** (`{}`) {}",
                waypoint.index,
                waypoint.display_name(),
                waypoint.id,
                format_distance(waypoint.cumulative_distance)
            );
        }
        buffer
    }

    fn render_directions(&self) -> String {
        let mut buffer = String::new();
        for pair in self.waypoints.windows(2) {
            let _ = writeln!(
                buffer,
                "Walk from {} to {} ({})",
                pair[0].display_name(),
                pair[1].display_name(),
                format_distance(pair[1].leg_distance.unwrap_or_default())
            );
        }
        let _ = writeln!(
            buffer,
            "Arrive at {}. Total: {}",
            self.goal.display_name(),
            format_distance(self.distance)
        );
        buffer
    }
}

fn endpoint(graph: &Graph, id: &str) -> RouteEndpoint {
    RouteEndpoint {
        id: id.to_string(),
        name: graph.find_node(id).map(|node| node.name.clone()),
    }
}

/// Format a distance in meters, switching to kilometres from 1 km.
pub fn format_distance(meters: f64) -> String {
    if meters >= 1000.0 {
        format!("{:.2} km", meters / 1000.0)
    } else if meters.fract() == 0.0 {
        format!("{meters:.0} m")
    } else {
        format!("{meters:.1} m")
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::graph::load_graph;
    use crate::routing::{plan_route, RouteRequest, RouteResult};

    fn plan() -> (Graph, RoutePlan) {
        let graph = load_graph(&json!({
            "nodes": [
                { "id": "A", "name": "Admin", "lat": 1.0, "lng": 2.0 },
                { "id": "B", "name": "Bookstore", "lat": 1.0, "lng": 3.0 },
                { "id": "C", "name": "Chapel", "lat": 1.0, "lng": 4.0 }
            ],
            "edges": [
                { "a": "A", "b": "B", "dist": 120.0 },
                { "a": "B", "b": "C", "dist": 80.5 }
            ]
        }))
        .expect("fixture loads");
        let plan = plan_route(&graph, &RouteRequest::new("A", "C")).expect("route exists");
        (graph, plan)
    }

    #[test]
    fn summary_accumulates_leg_distances() {
        let (graph, plan) = plan();
        let summary = RouteSummary::from_plan(&graph, &plan).expect("summary");

        assert_eq!(summary.hops, 2);
        assert_eq!(summary.start.name.as_deref(), Some("Admin"));
        assert_eq!(summary.goal.name.as_deref(), Some("Chapel"));
        let legs: Vec<_> = summary.waypoints.iter().map(|w| w.leg_distance).collect();
        assert_eq!(legs, vec![None, Some(120.0), Some(80.5)]);
        assert_eq!(summary.waypoints[2].cumulative_distance, 200.5);
    }

    #[test]
    fn plain_text_lists_every_waypoint() {
        let (graph, plan) = plan();
        let text = RouteSummary::from_plan(&graph, &plan)
            .expect("summary")
            .render(RouteRenderMode::PlainText);

        assert!(text.starts_with(
            "Route: Admin -> Chapel (2 walkways, 200.5 m, algorithm: dijkstra)"
        ));
        assert!(text.contains("  1: Bookstore (B) +120 m"));
    }

    #[test]
    fn directions_end_with_total() {
        let (graph, plan) = plan();
        let text = RouteSummary::from_plan(&graph, &plan)
            .expect("summary")
            .render(RouteRenderMode::Directions);

        assert!(text.contains("Walk from Admin to Bookstore (120 m)"));
        assert!(text.trim_end().ends_with("Arrive at Chapel. Total: 200.5 m"));
    }

    #[test]
    fn empty_plan_is_rejected() {
        let (graph, mut plan) = plan();
        plan.route = RouteResult {
            path: Vec::new(),
            distance: 0.0,
            steps: Vec::new(),
        };
        assert!(matches!(
            RouteSummary::from_plan(&graph, &plan),
            Err(Error::EmptyRoutePlan)
        ));
    }

    #[test]
    fn distances_switch_to_kilometres() {
        assert_eq!(format_distance(17.0), "17 m");
        assert_eq!(format_distance(12.34), "12.3 m");
        assert_eq!(format_distance(1530.0), "1.53 km");
    }
}
