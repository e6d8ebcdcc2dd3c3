//! # Traversal Module
//!
//! Depth-first and breadth-first traversals as explicit state machines. A
//! traversal never runs on its own: every call to `step` pops one frontier
//! entry, so an external scheduler decides the pace.
//!
//! Both traversals share [`TraversalEngine`]; they differ only in the
//! [`Frontier`] discipline:
//!
//! - [`Stack`]: last-in-first-out, depth-first
//! - [`Queue`]: first-in-first-out, breadth-first
//!
//! Neighbors are pushed in the store's neighbor order (the order edges were
//! added), so a stack visits the most recently connected neighbor first while
//! a queue visits the earliest one first.
//!
//! ## Example
//!
//! ```
//! use graph_analyzer::core::StepResult;
//! use graph_analyzer::graph::GraphStore;
//! use graph_analyzer::traversal::{Queue, TraversalEngine};
//!
//! # fn main() -> miette::Result<()> {
//! let mut store = GraphStore::new();
//! let x = store.add_vertex();
//! let leaves: Vec<_> = (0..3).map(|_| store.add_vertex()).collect();
//! for &leaf in &leaves {
//!     store.connect(x, leaf);
//! }
//!
//! let mut bfs = TraversalEngine::<Queue>::start(&store)?;
//! assert_eq!(bfs.step(&store), StepResult::Visited(x));
//! assert_eq!(bfs.step(&store), StepResult::Visited(leaves[0]));
//!
//! let summary = bfs.run_to_completion(&store);
//! assert_eq!(summary.order, vec![x, leaves[0], leaves[1], leaves[2]]);
//! # Ok(())
//! # }
//! ```

mod engine;
mod frontier;

pub use engine::{Traversal, TraversalEngine, TraversalState};
pub use frontier::{Frontier, Queue, Stack};
