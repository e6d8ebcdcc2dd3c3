use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::common::{FormatArgs, GraphArgs, TickArgs};
use crate::core::TraversalKind;

#[derive(Parser)]
#[command(
    name = "graph-analyzer",
    about = "🕸 Build undirected graphs and watch them being traversed",
    long_about = "graph-analyzer builds undirected graphs the way you would on a drawing canvas, \
                  by placing vertices and clicking pairs of them to connect. It animates \
                  depth-first and breadth-first traversals step by step and checks the graph \
                  for cycles.",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Replay an interaction script against a live canvas
    ///
    /// Each line of the script is one user action: placing vertices,
    /// clicking them to create edges, launching traversals and checking for
    /// cycles.
    #[command(
        long_about = "Replay an interaction script, one command per line: arm, add X Y, click X \
                      Y, select V, connect A B, clear, dfs, bfs, tick [N], wait and cycles. Lines \
                      starting with # are comments. Traversals advance one step per tick at the \
                      configured interval, and a traversal still running when the script ends is \
                      driven to completion."
    )]
    Play {
        /// Script file (reads stdin if not specified)
        #[arg(value_name = "SCRIPT", env = "GRAPH_ANALYZER_SCRIPT")]
        script: Option<PathBuf>,

        #[command(flatten)]
        format: FormatArgs,

        #[command(flatten)]
        tick: TickArgs,
    },

    /// Animate a traversal from the first vertex
    ///
    /// Builds the graph from the command line and walks it depth-first or
    /// breadth-first, one vertex per tick.
    #[command(
        long_about = "Build a graph from --vertices and --edge and walk it from V0. Depth-first \
                      follows one branch as deep as it goes before backtracking; breadth-first \
                      visits vertices in order of their distance from V0. Only the component \
                      containing V0 is visited."
    )]
    Walk {
        #[command(flatten)]
        graph: GraphArgs,

        /// Traversal strategy
        #[arg(
            short,
            long,
            value_enum,
            default_value = "dfs",
            env = "GRAPH_ANALYZER_STRATEGY"
        )]
        strategy: Strategy,

        #[command(flatten)]
        format: FormatArgs,

        #[command(flatten)]
        tick: TickArgs,
    },

    /// Check the graph for loops
    ///
    /// Reports whether any connected component contains a cycle, and shows
    /// one such cycle when it does.
    Loops {
        #[command(flatten)]
        graph: GraphArgs,

        #[command(flatten)]
        format: FormatArgs,

        /// Exit with error code if a cycle is found
        #[arg(long, env = "GRAPH_ANALYZER_ERROR_ON_CYCLES")]
        error_on_cycles: bool,
    },

    /// Sketch the graph as text
    ///
    /// Renders the graph as ASCII art, a Graphviz DOT file or a Mermaid
    /// diagram.
    Sketch {
        #[command(flatten)]
        graph: GraphArgs,

        /// Drawing format
        #[arg(
            short,
            long,
            value_enum,
            default_value = crate::constants::output::DEFAULT_SKETCH_FORMAT,
            env = "GRAPH_ANALYZER_SKETCH_FORMAT"
        )]
        format: SketchFormat,

        /// Output file (stdout if not specified)
        #[arg(short, long, env = "GRAPH_ANALYZER_OUTPUT")]
        output: Option<PathBuf>,

        /// Highlight a cycle in the drawing
        #[arg(
            long,
            value_name = "BOOL",
            action = clap::ArgAction::Set,
            default_value = "true",
            env = "GRAPH_ANALYZER_HIGHLIGHT_CYCLES"
        )]
        highlight_cycles: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum SketchFormat {
    Ascii,
    Dot,
    Mermaid,
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum Strategy {
    Dfs,
    Bfs,
}

impl From<Strategy> for TraversalKind {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Dfs => TraversalKind::DepthFirst,
            Strategy::Bfs => TraversalKind::BreadthFirst,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::VertexId;

    fn parse(args: &[&str]) -> Commands {
        let mut argv = vec!["graph-analyzer"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap().command
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_walk_arguments() {
        let Commands::Walk {
            graph,
            strategy,
            format,
            tick,
        } = parse(&[
            "walk", "-n", "3", "--edge", "V0-V1", "--edge", "1-2", "--strategy", "bfs",
            "--interval-ms", "20",
        ])
        else {
            panic!("expected walk");
        };

        assert_eq!(graph.vertices, 3);
        assert_eq!(
            graph
                .edges
                .iter()
                .map(|edge| (edge.from, edge.to))
                .collect::<Vec<_>>(),
            vec![
                (VertexId::new(0), VertexId::new(1)),
                (VertexId::new(1), VertexId::new(2))
            ]
        );
        assert_eq!(TraversalKind::from(strategy), TraversalKind::BreadthFirst);
        assert_eq!(format.format, OutputFormat::Human);
        assert_eq!(tick.interval(), Duration::from_millis(20));
    }

    #[test]
    fn test_sketch_defaults() {
        let Commands::Sketch {
            format,
            output,
            highlight_cycles,
            ..
        } = parse(&["sketch", "-n", "2"])
        else {
            panic!("expected sketch");
        };

        assert_eq!(format, SketchFormat::Ascii);
        assert_eq!(output, None);
        assert!(highlight_cycles);
    }

    #[test]
    fn test_highlight_cycles_can_be_turned_off() {
        let Commands::Sketch {
            highlight_cycles, ..
        } = parse(&["sketch", "-n", "3", "--highlight-cycles", "false"])
        else {
            panic!("expected sketch");
        };
        assert!(!highlight_cycles);

        let Commands::Sketch {
            highlight_cycles, ..
        } = parse(&["sketch", "--highlight-cycles", "true"])
        else {
            panic!("expected sketch");
        };
        assert!(highlight_cycles);
    }

    #[test]
    fn test_malformed_edge_is_rejected() {
        assert!(Cli::try_parse_from(["graph-analyzer", "loops", "--edge", "V0V1"]).is_err());
        assert!(Cli::try_parse_from(["graph-analyzer", "loops", "--edge", "V0-X"]).is_err());
    }
}
