//! # Configuration Module
//!
//! This module provides configuration structures for all graph-analyzer
//! commands. Each command has its own config module with a builder generated
//! by the [`impl_builder!`](crate::impl_builder) macro.
//!
//! ## Command Configurations
//!
//! - **ScriptConfig**: Configuration for the `play` command
//! - **TraversalConfig**: Configuration for the `walk` command
//! - **CycleCheckConfig**: Configuration for the `loops` command
//! - **DrawOptions**: Configuration for the `sketch` command
//!
//! ## Example
//!
//! ```
//! use graph_analyzer::cli::{OutputFormat, SketchFormat};
//! use graph_analyzer::common::ConfigBuilder;
//! use graph_analyzer::config::{CycleCheckConfig, DrawOptions, GraphSpec};
//! use graph_analyzer::core::VertexId;
//!
//! let triangle = GraphSpec::new(
//!     3,
//!     [(0, 1), (1, 2), (2, 0)].map(|(a, b)| (VertexId::new(a), VertexId::new(b))),
//! )?;
//!
//! let check = CycleCheckConfig::builder()
//!     .with_graph(triangle.clone())
//!     .with_format(OutputFormat::Json)
//!     .with_error_on_cycles(true)
//!     .build()?;
//! assert_eq!(check.graph.edges().len(), 3);
//!
//! // Unset fields are reported by name
//! let missing = DrawOptions::builder()
//!     .with_graph(triangle)
//!     .with_format(SketchFormat::Dot)
//!     .build();
//! assert!(missing.is_err());
//! # Ok::<(), graph_analyzer::error::GraphAnalyzerError>(())
//! ```

pub mod common;
pub mod cycles;
pub mod draw;
pub mod session;
pub mod traverse;

pub use common::GraphSpec;
pub use cycles::CycleCheckConfig;
pub use draw::DrawOptions;
pub use session::ScriptConfig;
pub use traverse::TraversalConfig;
