//! Typeahead search over campus locations.

use std::path::Path;

use anyhow::Result;

use campusmap_cli::output::OutputFormat;
use campusmap_lib::search_nodes;

use crate::commands::load_active_graph;

/// Handle the search subcommand.
pub fn handle_search(
    graph_arg: Option<&Path>,
    format: OutputFormat,
    query: &str,
    limit: usize,
) -> Result<()> {
    let graph = load_active_graph(graph_arg)?;
    let hits = search_nodes(&graph, query, limit);
    print!("{}", format.render_search(query, &hits)?);
    Ok(())
}
