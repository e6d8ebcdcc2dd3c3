use std::sync::atomic::{AtomicUsize, Ordering};

use console::{Term, style};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

use crate::constants::progress::{SPINNER_FRAMES, TICK_INTERVAL};
use crate::core::{StepResult, TraversalKind, VertexId};

// Progress bar style templates as constants
const PROGRESS_BAR_TEMPLATE: &str = "{msg} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len}";

/// Live traversal feedback on stderr
///
/// Status lines printed by other components should go through
/// [`ProgressReporter::multi_progress`] so they do not tear the bar.
pub struct ProgressReporter {
    term: Term,
    spinner_position: AtomicUsize,
    multi_progress: MultiProgress,
    current_bar: Option<ProgressBar>,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
            spinner_position: AtomicUsize::new(0),
            multi_progress: MultiProgress::new(),
            current_bar: None,
        }
    }

    pub fn multi_progress(&self) -> MultiProgress {
        self.multi_progress.clone()
    }

    pub fn create_progress_bar(&mut self, len: u64, message: &str) -> ProgressBar {
        let pb = self.multi_progress.add(ProgressBar::new(len));
        let style = ProgressStyle::default_bar()
            .template(PROGRESS_BAR_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▉▊▋▌▍▎▏ ");
        pb.set_style(style);
        pb.set_message(message.to_string());
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }

    fn next_frame(&self) -> &'static str {
        let pos = self.spinner_position.fetch_add(1, Ordering::Relaxed) % SPINNER_FRAMES.len();
        SPINNER_FRAMES[pos]
    }

    pub fn start_script(&mut self, name: &str) {
        let _ = self.term.clear_line();
        eprintln!("{} Replaying {}...", style("▶").cyan(), style(name).bold());
    }

    pub fn running_command(&self, line: usize, command: &str) {
        let frame = self.next_frame();
        self.multi_progress.suspend(|| {
            eprintln!(
                "{} {} {}",
                style(frame).cyan(),
                style(format!("{line:>3}")).dim(),
                style(command).bold()
            );
        });
    }

    /// Show a bar that advances once per visited vertex of the start
    /// component
    pub fn start_traversal(&mut self, kind: TraversalKind, start: VertexId, reachable: usize) {
        if let Some(pb) = self.current_bar.take() {
            pb.finish_and_clear();
        }
        let pb = self.create_progress_bar(
            reachable as u64,
            &format!("{} {kind} from {start}", traversal_marker(kind)),
        );
        self.current_bar = Some(pb);
    }

    pub fn step(&mut self, step: &StepResult) {
        if step.is_done() {
            if let Some(pb) = self.current_bar.take() {
                pb.finish_and_clear();
            }
            return;
        }
        let Some(ref pb) = self.current_bar else {
            return;
        };
        match step {
            StepResult::Visited(vertex) => {
                pb.set_message(format!("visiting {}", style(vertex).yellow()));
                pb.inc(1);
            }
            StepResult::Skipped(vertex) => {
                pb.set_message(format!("{}", style(format!("{vertex} already visited")).dim()));
            }
            StepResult::Done => {}
        }
    }

    #[cfg(test)]
    pub(crate) fn traversal_bar(&self) -> Option<&ProgressBar> {
        self.current_bar.as_ref()
    }

    /// Drop a bar left behind by an interrupted traversal
    pub fn abandon_traversal(&mut self) {
        if let Some(pb) = self.current_bar.take() {
            pb.abandon();
        }
    }
}

fn traversal_marker(kind: TraversalKind) -> console::StyledObject<&'static str> {
    match kind {
        TraversalKind::DepthFirst => style("⬇").yellow(),
        TraversalKind::BreadthFirst => style("↔").green(),
    }
}

#[cfg(test)]
mod tests {
    use indicatif::ProgressDrawTarget;

    use super::*;

    fn hidden_reporter() -> ProgressReporter {
        let reporter = ProgressReporter::new();
        reporter
            .multi_progress
            .set_draw_target(ProgressDrawTarget::hidden());
        reporter
    }

    #[test]
    fn test_bar_follows_visits() {
        let mut reporter = hidden_reporter();
        reporter.start_traversal(TraversalKind::DepthFirst, VertexId::new(0), 3);

        reporter.step(&StepResult::Visited(VertexId::new(0)));
        reporter.step(&StepResult::Skipped(VertexId::new(0)));
        reporter.step(&StepResult::Visited(VertexId::new(1)));
        let position = reporter.current_bar.as_ref().map(|pb| pb.position());
        assert_eq!(position, Some(2));

        reporter.step(&StepResult::Done);
        assert!(reporter.current_bar.is_none());
    }

    #[test]
    fn test_step_without_bar_is_ignored() {
        let mut reporter = hidden_reporter();
        reporter.step(&StepResult::Visited(VertexId::new(4)));
        reporter.abandon_traversal();
        assert!(reporter.current_bar.is_none());
    }

    #[test]
    fn test_commands_echo_while_traversing() {
        let mut reporter = hidden_reporter();
        reporter.start_traversal(TraversalKind::BreadthFirst, VertexId::new(0), 2);

        reporter.running_command(7, "connect V0 V1");
        reporter.running_command(8, "clear");

        // both lines consumed a spinner frame
        assert_eq!(reporter.next_frame(), SPINNER_FRAMES[2]);
        assert!(reporter.current_bar.is_some());
    }
}
