//! Terminal implementations of the session collaborators
//!
//! - [`TerminalCanvas`]: vertex geometry, colors and click hit testing
//! - [`IntervalScheduler`]: traversal pacing with real sleeps
//! - [`ConsoleNotifier`]: notices printed as they happen and kept for the
//!   final report
//!
//! Output goes to stderr. Hand the canvas and notifier the
//! [`indicatif::MultiProgress`] of the active
//! [`crate::progress::ProgressReporter`] to keep their lines clear of the bar.

mod canvas;
mod notifier;
mod scheduler;

pub use canvas::TerminalCanvas;
pub use notifier::ConsoleNotifier;
pub use scheduler::IntervalScheduler;
