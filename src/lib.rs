//! # Graph Analyzer - Build and Traverse Undirected Graphs
//!
//! Graph Analyzer lets you build an undirected graph the way you would on a
//! drawing canvas: place vertices, then click two of them in a row to join
//! them. It animates depth-first and breadth-first traversals one vertex per
//! tick and checks whether the graph contains a cycle.
//!
//! ## Main Components
//!
//! - **Graph**: the vertex and edge store, plus ASCII, DOT and Mermaid
//!   rendering
//! - **Traversal**: step-by-step DFS and BFS over a shared frontier engine
//! - **Detector**: cycle detection for undirected graphs
//! - **Session**: turns clicks into edits and drives the live traversal
//!   through pluggable canvas, scheduler and notifier collaborators
//! - **Reports**: human-readable and JSON summaries of what happened
//!
//! ## Usage
//!
//! ### Example: Stepping a Traversal by Hand
//!
//! ```
//! use graph_analyzer::core::{StepResult, TraversalKind};
//! use graph_analyzer::graph::GraphStore;
//! use graph_analyzer::traversal::Traversal;
//!
//! # fn main() -> miette::Result<()> {
//! let mut store = GraphStore::new();
//! let hub = store.add_vertex();
//! let left = store.add_vertex();
//! let right = store.add_vertex();
//! store.connect(hub, left);
//! store.connect(hub, right);
//!
//! let mut traversal = Traversal::start(TraversalKind::BreadthFirst, &store)?;
//! assert_eq!(traversal.step(&store), StepResult::Visited(hub));
//! assert_eq!(traversal.step(&store), StepResult::Visited(left));
//! assert_eq!(traversal.step(&store), StepResult::Visited(right));
//! assert_eq!(traversal.step(&store), StepResult::Done);
//! # Ok(())
//! # }
//! ```
//!
//! ### Example: Replaying User Input
//!
//! ```
//! use std::time::Duration;
//!
//! use graph_analyzer::core::{Notice, Point};
//! use graph_analyzer::session::Session;
//! use graph_analyzer::terminal::{ConsoleNotifier, IntervalScheduler, TerminalCanvas};
//!
//! let mut session = Session::new(
//!     TerminalCanvas::silent(),
//!     IntervalScheduler::new(),
//!     ConsoleNotifier::silent(),
//! )
//! .with_tick_interval(Duration::ZERO);
//!
//! // Arm add-vertex mode, then click empty canvas space
//! session.arm_add_vertex();
//! let a = session.canvas_clicked(Point::new(100.0, 100.0)).unwrap();
//! let b = session.add_vertex_at(Point::new(200.0, 100.0));
//! let c = session.add_vertex_at(Point::new(150.0, 200.0));
//!
//! session.connect(a, b);
//! session.connect(b, c);
//! session.connect(c, a);
//!
//! assert!(session.check_cycles());
//! assert!(matches!(
//!     session.notifier().notices(),
//!     [Notice::CycleCheck { has_cycle: true, .. }]
//! ));
//! ```
//!
//! ### Example: Drawing the Graph
//!
//! ```
//! use graph_analyzer::detector::CycleDetector;
//! use graph_analyzer::graph::{GraphRenderer, GraphStore};
//! use miette::IntoDiagnostic;
//!
//! # fn main() -> miette::Result<()> {
//! let mut store = GraphStore::new();
//! let a = store.add_vertex();
//! let b = store.add_vertex();
//! let c = store.add_vertex();
//! store.connect(a, b);
//! store.connect(b, c);
//! store.connect(c, a);
//!
//! let mut detector = CycleDetector::new();
//! detector.detect_cycles(&store);
//!
//! let mut output = Vec::new();
//! GraphRenderer::new(true).render_mermaid(&store, detector.cycle(), &mut output)?;
//!
//! let mermaid = String::from_utf8(output).into_diagnostic()?;
//! assert!(mermaid.starts_with("graph LR"));
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod utils;

// Public modules
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod core;
pub mod detector;
pub mod error;
pub mod executors;
pub mod graph;
pub mod progress;
pub mod reports;
pub mod script;
pub mod selection;
pub mod session;
pub mod terminal;
pub mod traversal;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();
    execute_command(cli.command)
}
