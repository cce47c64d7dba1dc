//! Output formatting for CLI results.
//!
//! Every subcommand builds a serialisable result and hands it to
//! [`OutputFormat`], which turns it into text, Markdown-flavoured rich text,
//! walking directions, or pretty JSON.

use std::fmt::Write;

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use campusmap_lib::{format_distance, Node, RouteRenderMode, RouteSummary, SearchHit};

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text listing.
    #[default]
    Text,
    /// Markdown-flavoured text.
    Rich,
    /// Turn-by-turn walking directions (routes only; other output uses text).
    Directions,
    /// Pretty-printed JSON.
    Json,
}

/// One adjacent location in `neighbours` output.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NeighbourEntry {
    pub id: String,
    pub name: String,
    pub distance: f64,
}

/// Result of validating a graph document.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ValidationReport {
    pub path: String,
    pub nodes: usize,
    pub edges: usize,
    pub dangling_edges: usize,
    pub isolated_nodes: Vec<String>,
}

impl OutputFormat {
    /// Render a planned route.
    pub fn render_route(self, summary: &RouteSummary) -> Result<String> {
        let mode = match self {
            OutputFormat::Json => return to_json(summary),
            OutputFormat::Text => RouteRenderMode::PlainText,
            OutputFormat::Rich => RouteRenderMode::RichText,
            OutputFormat::Directions => RouteRenderMode::Directions,
        };
        Ok(summary.render(mode))
    }

    /// Render typeahead results.
    pub fn render_search(self, query: &str, hits: &[SearchHit]) -> Result<String> {
        if self == OutputFormat::Json {
            return to_json(hits);
        }

        let mut buffer = String::new();
        if hits.is_empty() {
            let _ = writeln!(buffer, "No locations match '{query}'.");
            return Ok(buffer);
        }

        for hit in hits {
            match self {
                OutputFormat::Rich => {
                    let _ = writeln!(buffer, "* **{}** (`{}`)", hit.name, hit.id);
                }
                _ => {
                    let _ = writeln!(
                        buffer,
                        "{} ({}) [{:.5}, {:.5}]",
                        hit.name, hit.id, hit.lat, hit.lng
                    );
                }
            }
        }
        Ok(buffer)
    }

    /// Render the list of all locations.
    pub fn render_nodes(self, nodes: &[Node]) -> Result<String> {
        if self == OutputFormat::Json {
            return to_json(nodes);
        }

        let width = nodes.iter().map(|node| node.id.len()).max().unwrap_or(0);
        let mut buffer = String::new();
        for node in nodes {
            match self {
                OutputFormat::Rich => {
                    let _ = writeln!(buffer, "* `{}` **{}**", node.id, node.name);
                }
                _ => {
                    let _ = writeln!(buffer, "{:<width$}  {}", node.id, node.name);
                }
            }
        }
        let _ = writeln!(buffer, "{} locations", nodes.len());
        Ok(buffer)
    }

    /// Render the walkways leaving a location.
    pub fn render_neighbours(self, node: &Node, neighbours: &[NeighbourEntry]) -> Result<String> {
        if self == OutputFormat::Json {
            return to_json(neighbours);
        }

        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "{} ({}): {} walkways",
            node.name,
            node.id,
            neighbours.len()
        );
        for entry in neighbours {
            let _ = writeln!(
                buffer,
                "  -> {} ({}) {}",
                entry.name,
                entry.id,
                format_distance(entry.distance)
            );
        }
        Ok(buffer)
    }

    /// Render a validation report.
    pub fn render_validation(self, report: &ValidationReport) -> Result<String> {
        if self == OutputFormat::Json {
            return to_json(report);
        }

        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "{}: valid ({} locations, {} walkways)",
            report.path, report.nodes, report.edges
        );
        if report.dangling_edges > 0 {
            let _ = writeln!(
                buffer,
                "warning: {} walkways reference unknown locations",
                report.dangling_edges
            );
        }
        if !report.isolated_nodes.is_empty() {
            let _ = writeln!(
                buffer,
                "warning: unreachable locations: {}",
                report.isolated_nodes.join(", ")
            );
        }
        Ok(buffer)
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut text = serde_json::to_string_pretty(value)?;
    text.push('\n');
    Ok(text)
}
