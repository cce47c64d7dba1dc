mod common;

use std::collections::HashSet;

use campusmap_lib::{
    load_graph, plan_route, search_nodes, shortest_path, shortest_path_with, Error, Graph,
    RouteAlgorithm, RouteRequest,
};
use serde_json::json;

use common::{campus, detour};

/// Cheapest simple path by brute force, for cross-checking the planners.
fn brute_force_distance(graph: &Graph, start: &str, goal: &str) -> Option<f64> {
    fn walk<'a>(
        graph: &'a Graph,
        current: &'a str,
        goal: &str,
        visited: &mut HashSet<&'a str>,
        cost: f64,
        best: &mut Option<f64>,
    ) {
        if current == goal {
            *best = Some(best.map_or(cost, |b: f64| b.min(cost)));
            return;
        }
        for (next, weight) in graph.neighbours(current) {
            if visited.insert(next) {
                walk(graph, next, goal, visited, cost + weight, best);
                visited.remove(next);
            }
        }
    }

    graph.find_node(start)?;
    graph.find_node(goal)?;
    let mut best = None;
    let mut visited = HashSet::from([start]);
    walk(graph, start, goal, &mut visited, 0.0, &mut best);
    best
}

fn ids(graph: &Graph) -> Vec<String> {
    graph.nodes().iter().map(|node| node.id.clone()).collect()
}

#[test]
fn detour_fixture_takes_cheaper_route() {
    let graph = detour();
    let route = shortest_path(&graph, "A", "D").expect("route exists");

    assert_eq!(route.path, vec!["A", "B", "C", "D"]);
    assert_eq!(route.distance, 17.0);
    let legs: Vec<_> = route
        .steps
        .iter()
        .map(|step| (step.from.as_str(), step.to.as_str(), step.distance))
        .collect();
    assert_eq!(legs, vec![("A", "B", 10.0), ("B", "C", 5.0), ("C", "D", 2.0)]);
}

#[test]
fn routes_are_optimal_on_campus() {
    let graph = campus();
    let nodes = ids(&graph);
    for start in &nodes {
        for goal in &nodes {
            let expected = brute_force_distance(&graph, start, goal);
            let actual = shortest_path(&graph, start, goal).map(|route| route.distance);
            assert_eq!(actual, expected, "{start} -> {goal}");
        }
    }
}

#[test]
fn reported_distance_matches_step_sum() {
    let graph = campus();
    let nodes = ids(&graph);
    for start in &nodes {
        for goal in &nodes {
            let Some(route) = shortest_path(&graph, start, goal) else {
                continue;
            };
            let summed: f64 = route.steps.iter().map(|step| step.distance).sum();
            assert_eq!(summed, route.distance, "{start} -> {goal}");
            assert_eq!(route.steps.len() + 1, route.path.len());
            assert_eq!(route.path.first(), Some(start));
            assert_eq!(route.path.last(), Some(goal));
        }
    }
}

#[test]
fn distances_are_symmetric() {
    let graph = campus();
    let nodes = ids(&graph);
    for start in &nodes {
        for goal in &nodes {
            let forward = shortest_path(&graph, start, goal).map(|route| route.distance);
            let backward = shortest_path(&graph, goal, start).map(|route| route.distance);
            assert_eq!(forward, backward, "{start} <-> {goal}");
        }
    }
}

#[test]
fn repeated_queries_are_identical() {
    let graph = campus();
    let first = shortest_path(&graph, "main-gate", "stadium").expect("route exists");
    for _ in 0..5 {
        assert_eq!(shortest_path(&graph, "main-gate", "stadium"), Some(first.clone()));
    }
}

#[test]
fn linear_scan_agrees_with_heap() {
    let graph = campus();
    let nodes = ids(&graph);
    for start in &nodes {
        for goal in &nodes {
            let heap = shortest_path_with(&graph, start, goal, RouteAlgorithm::Dijkstra)
                .map(|route| route.distance);
            let scan = shortest_path_with(&graph, start, goal, RouteAlgorithm::LinearScan)
                .map(|route| route.distance);
            assert_eq!(heap, scan, "{start} -> {goal}");
        }
    }
}

#[test]
fn same_start_and_goal_is_zero_length() {
    let graph = campus();
    let route = shortest_path(&graph, "library", "library").expect("trivial route");
    assert_eq!(route.path, vec!["library"]);
    assert_eq!(route.distance, 0.0);
    assert!(route.steps.is_empty());
}

#[test]
fn disconnected_and_unknown_endpoints_are_not_found() {
    let graph = campus();
    assert!(shortest_path(&graph, "main-gate", "observatory").is_none());
    assert!(shortest_path(&graph, "main-gate", "parking-lot").is_none());
    assert!(shortest_path(&graph, "nowhere", "library").is_none());
    assert!(shortest_path(&Graph::default(), "A", "B").is_none());
}

#[test]
fn campus_routes_follow_expected_walkways() {
    let graph = campus();

    let route = shortest_path(&graph, "main-gate", "gym").expect("route exists");
    assert_eq!(route.path, vec!["main-gate", "quad", "cafe", "gym"]);
    assert_eq!(route.distance, 425.0);

    let route = shortest_path(&graph, "library", "stadium").expect("route exists");
    assert_eq!(route.distance, 515.0);
}

#[test]
fn parallel_walkways_report_the_one_walked() {
    let graph = load_graph(&json!({
        "nodes": [
            { "id": "X", "name": "X", "lat": 0.0, "lng": 0.0 },
            { "id": "Y", "name": "Y", "lat": 0.0, "lng": 0.0 }
        ],
        "edges": [
            { "a": "X", "b": "Y", "dist": 40 },
            { "a": "Y", "b": "X", "dist": 15 },
            { "a": "X", "b": "Y", "dist": 25 }
        ]
    }))
    .expect("graph loads");

    for algorithm in [
        RouteAlgorithm::Dijkstra,
        RouteAlgorithm::LinearScan,
        RouteAlgorithm::Bfs,
    ] {
        let route = shortest_path_with(&graph, "X", "Y", algorithm).expect("route exists");
        assert_eq!(route.distance, 15.0, "{algorithm}");
        assert_eq!(route.steps[0].distance, 15.0, "{algorithm}");
    }
}

#[test]
fn plan_route_resolves_names() {
    let graph = campus();
    let plan = plan_route(&graph, &RouteRequest::new("Main Gate", "science hall"))
        .expect("route exists");

    assert_eq!(plan.start, "main-gate");
    assert_eq!(plan.goal, "sci");
    assert_eq!(plan.route.path, vec!["main-gate", "quad", "sci"]);
    assert_eq!(plan.route.distance, 310.0);
    assert_eq!(plan.hop_count(), 2);
}

#[test]
fn plan_route_bfs_minimises_walkways() {
    let graph = detour();
    let plan = plan_route(
        &graph,
        &RouteRequest::new("A", "D").with_algorithm(RouteAlgorithm::Bfs),
    )
    .expect("route exists");

    assert_eq!(plan.algorithm, RouteAlgorithm::Bfs);
    assert_eq!(plan.route.path, vec!["A", "C", "D"]);
    assert_eq!(plan.route.distance, 22.0);
}

#[test]
fn plan_route_rejects_identical_endpoints() {
    let graph = campus();
    let error = plan_route(&graph, &RouteRequest::new("gym", "Gymnasium"))
        .expect_err("identical endpoints");
    assert!(matches!(error, Error::IdenticalEndpoints { .. }));
}

#[test]
fn plan_route_reports_unreachable_goal() {
    let graph = campus();
    let error =
        plan_route(&graph, &RouteRequest::new("gym", "observatory")).expect_err("no route");
    assert!(format!("{error}").contains("no route found"));
}

#[test]
fn unknown_location_includes_suggestions() {
    let graph = campus();
    let error = plan_route(&graph, &RouteRequest::new("Main Libary", "gym"))
        .expect_err("unknown location");

    let message = format!("{error}");
    assert!(message.contains("unknown location: Main Libary"));
    assert!(message.contains("Did you mean"));
    assert!(message.contains("Main Library"));
}

#[test]
fn plan_route_resolves_accented_names_like_search() {
    let graph = load_graph(&json!({
        "nodes": [
            { "id": "cafe", "name": "Café", "lat": 0.0, "lng": 0.0 },
            { "id": "musee", "name": "Musée", "lat": 0.0, "lng": 0.0 }
        ],
        "edges": [{ "a": "cafe", "b": "musee", "dist": 42 }]
    }))
    .expect("graph loads");

    let hits = search_nodes(&graph, "CAFÉ", 5);
    assert_eq!(hits.first().map(|hit| hit.id.as_str()), Some("cafe"));

    let plan = plan_route(&graph, &RouteRequest::new("CAFÉ", "musée")).expect("route exists");
    assert_eq!(plan.route.path, vec!["cafe", "musee"]);
    assert_eq!(plan.route.distance, 42.0);
}
