mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use campusmap_cli::output::OutputFormat;
use commands::route::{AlgorithmArg, RouteCommandArgs};

#[derive(Parser, Debug)]
#[command(author, version, about = "Campus map search and walking routes")]
struct Cli {
    /// Campus graph document (file, or directory holding campus_graph.json).
    /// Falls back to CAMPUSMAP_GRAPH, then the platform data directory.
    #[arg(long, global = true)]
    graph: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute a walking route between two locations (id or name).
    Route {
        /// Starting location.
        #[arg(long = "from")]
        from: String,
        /// Destination location.
        #[arg(long = "to")]
        to: String,
        /// Search algorithm.
        #[arg(long, value_enum, default_value_t = AlgorithmArg::Dijkstra)]
        algorithm: AlgorithmArg,
    },
    /// Find locations whose name or id contains the query.
    Search {
        query: String,
        /// Maximum number of results.
        #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u16).range(1..=100))]
        limit: u16,
    },
    /// List every location in the graph.
    Nodes,
    /// Show the walkways leaving a location.
    Neighbours {
        /// Location id or name.
        location: String,
    },
    /// Check a graph document without importing it.
    Validate { file: PathBuf },
    /// Replace the campus graph with a validated document.
    Import { file: PathBuf },
    /// Write the campus graph document to a file or stdout.
    Export {
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let graph = cli.graph.as_deref();

    match cli.command {
        Command::Route {
            from,
            to,
            algorithm,
        } => commands::route::handle_route_command(
            graph,
            cli.format,
            &RouteCommandArgs {
                from,
                to,
                algorithm,
            },
        ),
        Command::Search { query, limit } => {
            commands::search::handle_search(graph, cli.format, &query, usize::from(limit))
        }
        Command::Nodes => commands::nodes::handle_nodes(graph, cli.format),
        Command::Neighbours { location } => {
            commands::nodes::handle_neighbours(graph, cli.format, &location)
        }
        Command::Validate { file } => commands::document::handle_validate(cli.format, &file),
        Command::Import { file } => commands::document::handle_import(graph, &file),
        Command::Export { output } => commands::document::handle_export(graph, output.as_deref()),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
