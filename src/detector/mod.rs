//! # Cycle Detection Module
//!
//! This module answers whether the undirected graph contains a cycle.
//!
//! ## Algorithm
//!
//! A depth-first search is started from every vertex that no earlier search
//! reached, so disconnected graphs are fully covered. Each search tracks the
//! vertex it arrived from; meeting an already visited neighbor that is not
//! that arrival parent closes a cycle. Following the same edge backwards is
//! never reported, which is what makes the check correct for undirected
//! graphs.
//!
//! The search keeps its own work stack of `(vertex, remaining neighbors)`
//! frames instead of recursing, so a long path of vertices costs heap memory
//! proportional to its length rather than call-stack depth.
//!
//! ## Key Components
//!
//! - **has_cycle**: pure yes/no check
//! - **CycleDetector**: runs the same search and keeps a witness cycle for
//!   reporting and highlighting
//!
//! ## Example
//!
//! ```
//! use graph_analyzer::detector::{CycleDetector, has_cycle};
//! use graph_analyzer::graph::GraphStore;
//!
//! let mut store = GraphStore::new();
//! let a = store.add_vertex();
//! let b = store.add_vertex();
//! let c = store.add_vertex();
//!
//! store.connect(a, b);
//! store.connect(b, c);
//! assert!(!has_cycle(&store));
//!
//! store.connect(c, a);
//! assert!(has_cycle(&store));
//!
//! let mut detector = CycleDetector::new();
//! detector.detect_cycles(&store);
//! assert_eq!(detector.cycle(), &[a, b, c]);
//! assert_eq!(detector.closing_edge(), Some((c, a)));
//! ```

mod detector_impl;

pub use detector_impl::*;
