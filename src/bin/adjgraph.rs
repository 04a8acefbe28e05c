//! Reads an edge list from stdin and runs one graph algorithm on it.
//!
//! Node ids on the command line and in the output are 1-based; `-1` marks "no solution".
//!
//! Usage:
//!   adjgraph --directed scc < graph.txt
//!   adjgraph --weighted zero-one 1 5 < graph.txt
//!   adjgraph -vv bridges < graph.txt

use std::{
    io::{self, BufRead, BufWriter, ErrorKind, Write},
    process::ExitCode,
};

use adjgraph::{algo::*, io::*, prelude::*};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use itertools::Itertools;
use tracing::{Level, error, info};

/// Run graph algorithms on an edge list read from stdin.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Storage backend of the graph
    #[arg(long, value_enum, default_value_t = Backend::List, global = true)]
    backend: Backend,

    /// Treat edges as directed
    #[arg(long, global = true)]
    directed: bool,

    /// Edge lines carry a third column with the weight
    #[arg(long, global = true)]
    weighted: bool,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Backend {
    List,
    Matrix,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Path with the fewest edges from `s` to `t`
    Path { s: Node, t: Node },
    /// Edge distance of every node to the closest source
    Distances {
        #[arg(required = true)]
        sources: Vec<Node>,
    },
    /// Distance from `s` to `t` in a graph with weights 0 and 1
    ZeroOne { s: Node, t: Node },
    /// Two-coloring of an undirected graph
    Bipartite,
    /// Some cycle of the graph
    Cycle,
    /// Connected components (weakly connected for directed graphs)
    Components,
    /// Strongly connected component of every node
    Scc,
    /// Edge list of the condensation
    Condense {
        /// Print only the number of components without outgoing edges
        #[arg(long)]
        sinks: bool,
        /// Keep one condensed edge per original edge
        #[arg(long)]
        keep_parallel: bool,
    },
    /// Cut vertices of an undirected graph
    ArticulationPoints,
    /// Input positions of the bridges of an undirected graph
    Bridges,
    /// Eulerian trail using every edge once
    Euler,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();

    let input = io::stdin().lock();
    let output = BufWriter::new(io::stdout().lock());

    match run(&cli, input, output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "aborted");
            eprintln!("adjgraph: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Reads the graph from `input` and writes the result of the command to `out`
fn run<R: BufRead, W: Write>(cli: &Cli, input: R, mut out: W) -> io::Result<()> {
    let reader = EdgeListReader::new().weighted(cli.weighted);

    match (cli.backend, cli.directed) {
        (Backend::List, true) => {
            let graph: AdjList = reader.try_read_graph(input)?;
            run_directed(cli, &graph, &mut out)?;
        }
        (Backend::Matrix, true) => {
            let graph: AdjMatrix = reader.try_read_graph(input)?;
            run_directed(cli, &graph, &mut out)?;
        }
        (Backend::List, false) => {
            let graph: AdjListUndir = reader.try_read_graph(input)?;
            run_undirected(cli, &graph, &mut out)?;
        }
        (Backend::Matrix, false) => {
            let graph: AdjMatrixUndir = reader.try_read_graph(input)?;
            run_undirected(cli, &graph, &mut out)?;
        }
    }

    out.flush()
}

fn run_directed<G, W>(cli: &Cli, graph: &G, out: &mut W) -> io::Result<()>
where
    G: AdjacencyList + GraphEdgeOrder + GraphType<Dir = Directed>,
    W: Write,
{
    match &cli.command {
        Command::Components => write_components(out, &graph.weakly_connected_components()),
        Command::Scc => {
            let sccs = graph.strongly_connected_components();
            writeln!(out, "{}", sccs.number_of_components())?;
            writeln!(out, "{}", sccs.labels().iter().map(|c| c + 1).join(" "))
        }
        Command::Condense {
            sinks,
            keep_parallel,
        } => {
            let sccs = graph.strongly_connected_components();
            let condensation = Condensation::new(graph, &sccs).deduplicate(!keep_parallel);
            if *sinks {
                writeln!(out, "{}", condensation.sink_components().len())
            } else {
                EdgeListWriter::new()
                    .weighted(cli.weighted)
                    .try_write_graph(&condensation.build(), out)
            }
        }
        Command::Bipartite | Command::ArticulationPoints | Command::Bridges => Err(
            io::Error::new(ErrorKind::InvalidInput, "this command needs an undirected graph"),
        ),
        _ => run_common(cli, graph, out),
    }
}

fn run_undirected<G, W>(cli: &Cli, graph: &G, out: &mut W) -> io::Result<()>
where
    G: AdjacencyList + GraphEdgeOrder + GraphType<Dir = Undirected>,
    W: Write,
{
    match &cli.command {
        Command::Components => write_components(
            out,
            &sort_components(graph.connected_components().collect()),
        ),
        Command::Bipartite => match graph.compute_bipartition::<NodeBitSet>() {
            Some(bipartition) => writeln!(
                out,
                "{}",
                graph
                    .vertices()
                    .map(|u| if bipartition.is_on_left_side(u) { 1 } else { 2 })
                    .join(" ")
            ),
            None => writeln!(out, "-1"),
        },
        Command::ArticulationPoints => {
            let aps = graph.compute_articulation_points();
            writeln!(out, "{}", aps.cardinality())?;
            write_nodes(out, aps.iter_set_bits())
        }
        Command::Bridges => {
            let bridges = graph.compute_bridges();
            writeln!(out, "{}", bridges.len())?;
            writeln!(out, "{}", bridges.iter().map(|b| b.id + 1).join(" "))
        }
        Command::Scc | Command::Condense { .. } => Err(io::Error::new(
            ErrorKind::InvalidInput,
            "this command needs a directed graph (--directed)",
        )),
        _ => run_common(cli, graph, out),
    }
}

fn run_common<G, W>(cli: &Cli, graph: &G, out: &mut W) -> io::Result<()>
where
    G: AdjacencyList + GraphEdgeOrder + GraphType,
    W: Write,
{
    match &cli.command {
        Command::Path { s, t } => {
            match graph.shortest_path(node_arg(graph, *s)?, node_arg(graph, *t)?) {
                Some(path) => {
                    writeln!(out, "{}", path.len() - 1)?;
                    write_nodes(out, path)
                }
                None => writeln!(out, "-1"),
            }
        }
        Command::Distances { sources } => {
            let sources: Vec<Node> = sources
                .iter()
                .map(|s| node_arg(graph, *s))
                .collect::<io::Result<_>>()?;
            let tree = graph.bfs_distances(sources);
            writeln!(
                out,
                "{}",
                tree.distances()
                    .iter()
                    .map(|d| d.map_or_else(|| "-1".to_string(), |d| d.to_string()))
                    .join(" ")
            )
        }
        Command::ZeroOne { s, t } => {
            let tree = graph.zero_one_distances([node_arg(graph, *s)?])?;
            match tree.distance_to(node_arg(graph, *t)?) {
                Some(d) => writeln!(out, "{d}"),
                None => writeln!(out, "-1"),
            }
        }
        Command::Cycle => match graph.find_cycle() {
            Some(cycle) => {
                writeln!(out, "{}", cycle.len() - 1)?;
                write_nodes(out, cycle)
            }
            None => writeln!(out, "-1"),
        },
        Command::Euler => match graph.eulerian_trail() {
            Some(trail) => write_nodes(out, trail),
            None => writeln!(out, "-1"),
        },
        command => {
            info!(?command, "not available for this graph type");
            Err(io::Error::new(
                ErrorKind::InvalidInput,
                "command not available for this graph type",
            ))
        }
    }
}

/// Converts a 1-based node id given on the command line
fn node_arg<G: GraphNodeOrder>(graph: &G, u: Node) -> io::Result<Node> {
    if u == 0 || u > graph.number_of_nodes() {
        return Err(io::Error::new(
            ErrorKind::InvalidInput,
            format!("node {u} is not in 1..={}", graph.number_of_nodes()),
        ));
    }
    Ok(u - 1)
}

fn write_nodes<W: Write>(out: &mut W, nodes: impl IntoIterator<Item = Node>) -> io::Result<()> {
    writeln!(out, "{}", nodes.into_iter().map(|u| u + 1).join(" "))
}

fn write_components<W: Write>(out: &mut W, components: &[Vec<Node>]) -> io::Result<()> {
    writeln!(out, "{}", components.len())?;
    for component in components {
        write_nodes(out, component.iter().copied())?;
    }
    Ok(())
}
