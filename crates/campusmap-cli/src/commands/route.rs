//! Route command handler for computing walking routes between locations.

use std::path::Path;

use anyhow::Result;
use clap::ValueEnum;

use campusmap_cli::output::OutputFormat;
use campusmap_lib::{plan_route, RouteAlgorithm, RouteRequest, RouteSummary};

use crate::commands::load_active_graph;

/// Algorithm selected with `--algorithm`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum AlgorithmArg {
    /// Shortest walking distance (binary heap).
    #[default]
    Dijkstra,
    /// Shortest walking distance (linear scan).
    LinearScan,
    /// Fewest walkways.
    Bfs,
}

impl From<AlgorithmArg> for RouteAlgorithm {
    fn from(value: AlgorithmArg) -> Self {
        match value {
            AlgorithmArg::Dijkstra => RouteAlgorithm::Dijkstra,
            AlgorithmArg::LinearScan => RouteAlgorithm::LinearScan,
            AlgorithmArg::Bfs => RouteAlgorithm::Bfs,
        }
    }
}

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    /// Starting location id or name.
    pub from: String,
    /// Destination location id or name.
    pub to: String,
    /// Algorithm to use when planning the route.
    pub algorithm: AlgorithmArg,
}

impl RouteCommandArgs {
    /// Convert CLI args to a library RouteRequest.
    pub fn to_request(&self) -> RouteRequest {
        RouteRequest::new(self.from.clone(), self.to.clone()).with_algorithm(self.algorithm.into())
    }
}

/// Handle the route subcommand.
pub fn handle_route_command(
    graph_arg: Option<&Path>,
    format: OutputFormat,
    args: &RouteCommandArgs,
) -> Result<()> {
    let graph = load_active_graph(graph_arg)?;
    let plan = plan_route(&graph, &args.to_request())?;
    let summary = RouteSummary::from_plan(&graph, &plan)?;
    print!("{}", format.render_route(&summary)?);
    Ok(())
}
