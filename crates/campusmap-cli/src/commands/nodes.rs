//! Location listing and adjacency inspection.

use std::path::Path;

use anyhow::{Context, Result};

use campusmap_cli::output::{NeighbourEntry, OutputFormat};
use campusmap_lib::resolve_node;

use crate::commands::load_active_graph;

/// Handle the nodes subcommand.
pub fn handle_nodes(graph_arg: Option<&Path>, format: OutputFormat) -> Result<()> {
    let graph = load_active_graph(graph_arg)?;
    print!("{}", format.render_nodes(graph.nodes())?);
    Ok(())
}

/// Handle the neighbours subcommand.
pub fn handle_neighbours(
    graph_arg: Option<&Path>,
    format: OutputFormat,
    location: &str,
) -> Result<()> {
    let graph = load_active_graph(graph_arg)?;
    let index = resolve_node(&graph, location)?;
    let node = graph
        .node_at(index)
        .with_context(|| format!("location {location} vanished from the graph"))?;

    let mut neighbours: Vec<NeighbourEntry> = graph
        .neighbours(&node.id)
        .into_iter()
        .map(|(id, distance)| NeighbourEntry {
            id: id.to_string(),
            name: graph
                .find_node(id)
                .map(|n| n.name.clone())
                .unwrap_or_default(),
            distance,
        })
        .collect();
    neighbours.sort_by(|a, b| a.distance.total_cmp(&b.distance).then_with(|| a.id.cmp(&b.id)));

    print!("{}", format.render_neighbours(node, &neighbours)?);
    Ok(())
}
