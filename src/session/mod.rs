//! Interactive session orchestration
//!
//! A [`Session`] turns user input into graph edits and drives at most one
//! traversal at a time. It talks to the outside world only through the
//! [`Canvas`], [`Scheduler`] and [`Notifier`] traits.
//!
//! ```
//! use std::time::Duration;
//!
//! use graph_analyzer::core::{Notice, Point, TraversalKind};
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
//! let a = session.add_vertex_at(Point::new(100.0, 100.0));
//! let b = session.add_vertex_at(Point::new(200.0, 100.0));
//! session.connect(a, b);
//!
//! session.launch(TraversalKind::BreadthFirst).unwrap();
//! session.drive(None, |_| {});
//!
//! let (_, _, notifier) = session.into_parts();
//! assert!(matches!(
//!     &notifier.notices()[0],
//!     Notice::TraversalComplete(summary) if summary.order == vec![a, b]
//! ));
//! ```

mod collaborators;
mod session_impl;

pub use collaborators::{Canvas, Notifier, Scheduler};
pub use session_impl::Session;
