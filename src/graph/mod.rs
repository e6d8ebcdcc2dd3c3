//! # Graph Storage and Rendering Module
//!
//! This module owns the undirected graph the user builds and knows how to
//! draw it as text.
//!
//! ## Components
//!
//! ### Storage
//! - **GraphStore**: vertex set and symmetric adjacency, backed by petgraph's
//!   `UnGraphMap` so vertex and neighbor enumeration follow insertion order
//!
//! ### Rendering
//! - **GraphRenderer**: renders a store as ASCII, Graphviz DOT or Mermaid,
//!   optionally highlighting a cycle
//!
//! ## Example
//!
//! ```
//! use graph_analyzer::graph::{GraphRenderer, GraphStore};
//! use miette::IntoDiagnostic;
//!
//! # fn main() -> miette::Result<()> {
//! let mut store = GraphStore::new();
//! let a = store.add_vertex();
//! let b = store.add_vertex();
//!
//! assert!(store.connect(a, b));
//! assert!(!store.connect(b, a)); // already connected
//! assert!(!store.connect(a, a)); // self-loops are ignored
//!
//! let renderer = GraphRenderer::new(false);
//! let mut output = Vec::new();
//! renderer.render_dot(&store, &[], &mut output)?;
//!
//! let dot_output = String::from_utf8(output).into_diagnostic()?;
//! assert!(dot_output.contains(r#""V0" -- "V1""#));
//! # Ok(())
//! # }
//! ```

mod renderer;
mod store;

pub use renderer::GraphRenderer;
pub use store::GraphStore;
