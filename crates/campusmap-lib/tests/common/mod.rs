//! Shared fixture helpers for integration tests.

use std::path::PathBuf;

use campusmap_lib::{load_graph, load_graph_file, Graph};
use serde_json::json;

/// Path to the checked-in campus fixture.
pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/campus_graph.json")
}

/// The campus fixture graph.
pub fn campus() -> Graph {
    load_graph_file(&fixture_path()).expect("fixture loads")
}

/// Four-node graph where the cheapest route takes the long way round:
/// A-B-C-D costs 17 while A-C-D costs 22.
#[allow(dead_code)]
pub fn detour() -> Graph {
    load_graph(&json!({
        "nodes": [
            { "id": "A", "name": "A", "lat": 0.0, "lng": 0.0 },
            { "id": "B", "name": "B", "lat": 0.0, "lng": 0.0 },
            { "id": "C", "name": "C", "lat": 0.0, "lng": 0.0 },
            { "id": "D", "name": "D", "lat": 0.0, "lng": 0.0 }
        ],
        "edges": [
            { "a": "A", "b": "B", "dist": 10 },
            { "a": "B", "b": "C", "dist": 5 },
            { "a": "A", "b": "C", "dist": 20 },
            { "a": "C", "b": "D", "dist": 2 }
        ]
    }))
    .expect("detour fixture loads")
}
