use campusmap_lib::{
    load_graph_file, plan_route, shortest_path, Graph, RouteAlgorithm, RouteRequest,
};
use criterion::{criterion_group, criterion_main, Criterion};
use once_cell::sync::Lazy;
use std::hint::black_box;
use std::path::PathBuf;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/campus_graph.json")
}

static CAMPUS: Lazy<Graph> =
    Lazy::new(|| load_graph_file(&fixture_path()).expect("fixture loads"));
static DIJKSTRA_REQUEST: Lazy<RouteRequest> =
    Lazy::new(|| RouteRequest::new("Main Gate", "Stadium"));
static LINEAR_SCAN_REQUEST: Lazy<RouteRequest> = Lazy::new(|| {
    RouteRequest::new("Main Gate", "Stadium").with_algorithm(RouteAlgorithm::LinearScan)
});
static BFS_REQUEST: Lazy<RouteRequest> =
    Lazy::new(|| RouteRequest::new("Main Gate", "Stadium").with_algorithm(RouteAlgorithm::Bfs));

fn benchmark_pathfinding(c: &mut Criterion) {
    let graph = &*CAMPUS;

    c.bench_function("shortest_path_gate_stadium", |b| {
        b.iter(|| {
            let route = shortest_path(graph, "main-gate", "stadium").expect("route exists");
            black_box(route.distance)
        });
    });

    c.bench_function("dijkstra_gate_stadium", |b| {
        let request = &*DIJKSTRA_REQUEST;
        b.iter(|| {
            let plan = plan_route(graph, request).expect("route exists");
            black_box(plan.hop_count())
        });
    });

    c.bench_function("linear_scan_gate_stadium", |b| {
        let request = &*LINEAR_SCAN_REQUEST;
        b.iter(|| {
            let plan = plan_route(graph, request).expect("route exists");
            black_box(plan.hop_count())
        });
    });

    c.bench_function("bfs_gate_stadium", |b| {
        let request = &*BFS_REQUEST;
        b.iter(|| {
            let plan = plan_route(graph, request).expect("route exists");
            black_box(plan.route.path.len())
        });
    });
}

criterion_group!(benches, benchmark_pathfinding);
criterion_main!(benches);
