use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::document::GraphDocument;
use crate::error::{Error, Result};
use crate::graph::{parse_graph, Graph};

/// Default filename for the campus graph document.
pub const GRAPH_FILENAME: &str = "campus_graph.json";

/// Environment variable overriding the graph document location.
pub const GRAPH_PATH_ENV: &str = "CAMPUSMAP_GRAPH";

/// Resolve the default graph location using platform-specific project directories.
pub fn default_graph_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("com", "campusmap", "campusmap").ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.data_dir().join(GRAPH_FILENAME))
}

/// Resolve the graph document path.
///
/// Resolution order: the explicit path, then `CAMPUSMAP_GRAPH`, then the
/// platform data directory. A path without an extension is treated as a
/// directory containing [`GRAPH_FILENAME`].
pub fn resolve_graph_path(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(explicit) = explicit {
        return Ok(canonical_graph_path(explicit));
    }

    if let Some(env_path) = env::var_os(GRAPH_PATH_ENV) {
        return Ok(canonical_graph_path(Path::new(&env_path)));
    }

    default_graph_path()
}

fn canonical_graph_path(path: &Path) -> PathBuf {
    if path.extension().is_some() && !path.is_dir() {
        return path.to_path_buf();
    }

    path.join(GRAPH_FILENAME)
}

/// Read and validate a graph document from disk.
pub fn load_graph_file(path: &Path) -> Result<Graph> {
    if !path.exists() {
        return Err(Error::GraphNotFound {
            path: path.to_path_buf(),
        });
    }

    let text = fs::read_to_string(path)?;
    let graph = parse_graph(&text)?;
    debug!(
        path = %path.display(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "loaded campus graph"
    );
    Ok(graph)
}

/// Write a graph document as pretty-printed JSON.
///
/// The document is written to a temporary file beside `path` and renamed
/// into place, so readers never observe a partially written file.
pub fn write_graph_document(path: &Path, document: &GraphDocument) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let mut file = NamedTempFile::new_in(parent)?;
    serde_json::to_writer_pretty(&mut file, document)?;
    file.write_all(b"\n")?;
    file.persist(path).map_err(|err| err.error)?;

    debug!(path = %path.display(), "wrote campus graph document");
    Ok(())
}

/// Validate the document at `source` and replace `target` with it.
///
/// `target` is left untouched when validation fails.
pub fn import_graph_file(source: &Path, target: &Path) -> Result<Graph> {
    let graph = load_graph_file(source)?;
    write_graph_document(target, &graph.to_document())?;
    info!(
        source = %source.display(),
        target = %target.display(),
        nodes = graph.node_count(),
        "imported campus graph"
    );
    Ok(graph)
}
