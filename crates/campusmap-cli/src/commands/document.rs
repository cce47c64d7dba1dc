//! Validate, import, and export campus graph documents.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use campusmap_cli::output::{OutputFormat, ValidationReport};
use campusmap_lib::{import_graph_file, load_graph_file, resolve_graph_path, write_graph_document};

use crate::commands::load_active_graph;

/// Handle the validate subcommand.
pub fn handle_validate(format: OutputFormat, file: &Path) -> Result<()> {
    let graph = load_graph_file(file)
        .with_context(|| format!("{} is not a valid campus graph", file.display()))?;

    let dangling_edges = graph
        .edges()
        .iter()
        .filter(|edge| graph.find_node(&edge.a).is_none() || graph.find_node(&edge.b).is_none())
        .count();
    let isolated_nodes = graph
        .nodes()
        .iter()
        .filter(|node| graph.neighbours(&node.id).is_empty())
        .map(|node| node.id.clone())
        .collect();

    let report = ValidationReport {
        path: file.display().to_string(),
        nodes: graph.node_count(),
        edges: graph.edge_count(),
        dangling_edges,
        isolated_nodes,
    };
    print!("{}", format.render_validation(&report)?);
    Ok(())
}

/// Handle the import subcommand.
///
/// The configured graph document is replaced only when `file` validates.
pub fn handle_import(graph_arg: Option<&Path>, file: &Path) -> Result<()> {
    let target = resolve_graph_path(graph_arg).context("failed to resolve the campus graph path")?;
    let graph = import_graph_file(file, &target).with_context(|| {
        format!(
            "failed to import {}; {} was left unchanged",
            file.display(),
            target.display()
        )
    })?;

    println!(
        "Imported {} locations and {} walkways into {}",
        graph.node_count(),
        graph.edge_count(),
        target.display()
    );
    Ok(())
}

/// Handle the export subcommand. Without `output` the document goes to stdout.
pub fn handle_export(graph_arg: Option<&Path>, output: Option<&Path>) -> Result<()> {
    let graph = load_active_graph(graph_arg)?;
    let document = graph.to_document();

    match output {
        Some(path) => {
            write_graph_document(path, &document)
                .with_context(|| format!("failed to export campus graph to {}", path.display()))?;
            info!(path = %path.display(), "exported campus graph");
        }
        None => {
            println!("{}", serde_json::to_string_pretty(&document)?);
        }
    }
    Ok(())
}
