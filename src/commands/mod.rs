//! Command implementations for graph-analyzer CLI
//!
//! This module contains the implementations for each CLI command:
//! - play: Replay an interaction script against a live canvas
//! - walk: Animate a depth-first or breadth-first traversal
//! - loops: Check the graph for cycles
//! - sketch: Draw the graph as ASCII, DOT or Mermaid

pub mod cycles;
pub mod draw;
pub mod session;
pub mod traverse;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Play { .. } => session::execute_play_command(command),
        Commands::Walk { .. } => traverse::execute_walk_command(command),
        Commands::Loops { .. } => cycles::execute_loops_command(command),
        Commands::Sketch { .. } => draw::execute_sketch_command(command),
    }
}
