// Handlers for the CLI subcommands.
//
// Each module owns one group of subcommands; main.rs only parses arguments
// and dispatches here.

pub mod document;
pub mod nodes;
pub mod route;
pub mod search;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use campusmap_lib::{load_graph_file, resolve_graph_path, Graph};

/// Resolve the configured graph document and load it.
pub fn load_active_graph(graph_arg: Option<&Path>) -> Result<Graph> {
    let path = resolve_graph_path(graph_arg).context("failed to resolve the campus graph path")?;
    debug!(path = %path.display(), "loading campus graph");
    load_graph_file(&path)
        .with_context(|| format!("failed to load campus graph from {}", path.display()))
}
