//! Campus graph document schema.
//!
//! The on-disk format is a single JSON object:
//!
//! ```json
//! {
//!   "nodes": [{ "id": "lib", "name": "Library", "lat": 51.5, "lng": -0.12 }],
//!   "edges": [{ "a": "lib", "b": "gym", "dist": 120.0 }],
//!   "metadata": { "center": { "lat": 51.5, "lng": -0.12 } }
//! }
//! ```
//!
//! [`validate_document`] checks every record field by field before anything
//! is handed to the graph builder, so malformed records are reported with
//! their index instead of leaking into the traversal.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Identifier of a campus location.
pub type NodeId = String;

/// A named campus location with geographic coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

/// A bidirectional walkway between two locations, weighted in meters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub a: NodeId,
    pub b: NodeId,
    pub dist: f64,
}

/// Geographic coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Display metadata carried alongside the graph.
///
/// Routing never reads these values; they are preserved so an exported
/// document matches what was imported. Unrecognised keys land in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center: Option<LatLng>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zoom: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overlay_bounds: Option<[LatLng; 2]>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Serializable form of a complete campus graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// Validate an untyped JSON value against the graph document schema.
///
/// Fails with [`Error::Validation`] when `nodes` or `edges` is missing or not
/// an array, when any record has a missing or mistyped field, when a node id
/// is empty or duplicated, or when a walkway distance is negative or not
/// finite. Walkways that reference unknown node ids are accepted here; the
/// graph builder skips them.
pub fn validate_document(value: &Value) -> Result<GraphDocument> {
    let Some(root) = value.as_object() else {
        return Err(Error::validation("document must be a JSON object"));
    };

    let raw_nodes = required_array(root, "nodes")?;
    let raw_edges = required_array(root, "edges")?;

    let mut nodes = Vec::with_capacity(raw_nodes.len());
    let mut seen = HashSet::with_capacity(raw_nodes.len());
    for (index, raw) in raw_nodes.iter().enumerate() {
        let node = parse_node(index, raw)?;
        if !seen.insert(node.id.clone()) {
            return Err(Error::validation(format!(
                "nodes[{index}]: duplicate id '{}'",
                node.id
            )));
        }
        nodes.push(node);
    }

    let edges = raw_edges
        .iter()
        .enumerate()
        .map(|(index, raw)| parse_edge(index, raw))
        .collect::<Result<Vec<_>>>()?;

    let metadata = match root.get("metadata") {
        None | Some(Value::Null) => None,
        Some(raw @ Value::Object(_)) => Some(
            serde_json::from_value::<Metadata>(raw.clone())
                .map_err(|err| Error::validation(format!("metadata: {err}")))?,
        ),
        Some(_) => return Err(Error::validation("`metadata` must be an object")),
    };

    Ok(GraphDocument {
        nodes,
        edges,
        metadata,
    })
}

fn required_array<'a>(root: &'a Map<String, Value>, field: &str) -> Result<&'a Vec<Value>> {
    match root.get(field) {
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(Error::validation(format!("`{field}` must be an array"))),
        None => Err(Error::validation(format!("missing `{field}` array"))),
    }
}

fn parse_node(index: usize, raw: &Value) -> Result<Node> {
    let record = record_object(raw, "nodes", index)?;
    let id = string_field(record, "nodes", index, "id")?;
    if id.is_empty() {
        return Err(Error::validation(format!("nodes[{index}].id must not be empty")));
    }

    Ok(Node {
        id,
        name: string_field(record, "nodes", index, "name")?,
        lat: number_field(record, "nodes", index, "lat")?,
        lng: number_field(record, "nodes", index, "lng")?,
    })
}

fn parse_edge(index: usize, raw: &Value) -> Result<Edge> {
    let record = record_object(raw, "edges", index)?;
    let dist = number_field(record, "edges", index, "dist")?;
    if dist < 0.0 {
        return Err(Error::validation(format!(
            "edges[{index}].dist must not be negative (got {dist})"
        )));
    }

    Ok(Edge {
        a: string_field(record, "edges", index, "a")?,
        b: string_field(record, "edges", index, "b")?,
        dist,
    })
}

fn record_object<'a>(raw: &'a Value, list: &str, index: usize) -> Result<&'a Map<String, Value>> {
    raw.as_object()
        .ok_or_else(|| Error::validation(format!("{list}[{index}] must be an object")))
}

fn string_field(
    record: &Map<String, Value>,
    list: &str,
    index: usize,
    field: &str,
) -> Result<String> {
    match record.get(field) {
        Some(Value::String(value)) => Ok(value.clone()),
        Some(_) => Err(Error::validation(format!(
            "{list}[{index}].{field} must be a string"
        ))),
        None => Err(Error::validation(format!(
            "{list}[{index}] is missing `{field}`"
        ))),
    }
}

fn number_field(record: &Map<String, Value>, list: &str, index: usize, field: &str) -> Result<f64> {
    let value = match record.get(field) {
        Some(value) => value,
        None => {
            return Err(Error::validation(format!(
                "{list}[{index}] is missing `{field}`"
            )))
        }
    };

    match value.as_f64() {
        Some(number) if number.is_finite() => Ok(number),
        _ => Err(Error::validation(format!(
            "{list}[{index}].{field} must be a finite number"
        ))),
    }
}
