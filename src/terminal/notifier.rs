use console::style;
use indicatif::MultiProgress;

use crate::core::Notice;
use crate::session::Notifier;
use crate::utils::string::{arrow_path, pluralize};

/// Notifier that prints each notice to stderr and keeps the full log for the
/// final report
#[derive(Debug)]
pub struct ConsoleNotifier {
    output: Option<MultiProgress>,
    notices: Vec<Notice>,
}

impl Default for ConsoleNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self {
            output: Some(MultiProgress::new()),
            notices: Vec::new(),
        }
    }

    /// Collect notices without printing them
    pub fn silent() -> Self {
        Self {
            output: None,
            notices: Vec::new(),
        }
    }

    pub fn with_progress(mut self, progress: MultiProgress) -> Self {
        self.output = Some(progress);
        self
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn into_notices(self) -> Vec<Notice> {
        self.notices
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&mut self, notice: Notice) {
        if let Some(ref progress) = self.output {
            let line = status_line(&notice);
            progress.suspend(|| eprintln!("{line}"));
        }
        self.notices.push(notice);
    }
}

fn status_line(notice: &Notice) -> String {
    match notice {
        Notice::EmptyGraph => format!(
            "{} The graph is empty, add a vertex first",
            style("ℹ").cyan().bold()
        ),
        Notice::TraversalComplete(summary) => format!(
            "{} {} traversal finished: {} ({} {})",
            style("✓").green().bold(),
            summary.kind.short_name().to_uppercase(),
            style(arrow_path(&summary.order)).yellow(),
            summary.order.len(),
            pluralize("vertex", summary.order.len())
        ),
        Notice::CycleCheck { has_cycle: true, cycle } => format!(
            "{} The graph has a cycle: {}",
            style("⚠").yellow().bold(),
            style(arrow_path(cycle)).red()
        ),
        Notice::CycleCheck {
            has_cycle: false, ..
        } => format!("{} The graph has no cycles", style("✓").green().bold()),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::{TraversalKind, TraversalSummary, VertexId};

    #[test]
    fn test_notices_are_collected_in_order() {
        let mut notifier = ConsoleNotifier::silent();
        notifier.notify(Notice::EmptyGraph);
        notifier.notify(Notice::CycleCheck {
            has_cycle: false,
            cycle: vec![],
        });

        assert_eq!(notifier.notices().len(), 2);
        assert_eq!(notifier.into_notices()[0], Notice::EmptyGraph);
    }

    #[test]
    fn test_status_lines() {
        let summary = TraversalSummary {
            kind: TraversalKind::DepthFirst,
            order: vec![VertexId::new(0), VertexId::new(2)],
            skipped_steps: 0,
        };
        let line = console::strip_ansi_codes(&status_line(&Notice::TraversalComplete(summary)))
            .to_string();
        assert_eq!(line, "✓ DFS traversal finished: V0 → V2 (2 vertices)");

        let line = status_line(&Notice::CycleCheck {
            has_cycle: true,
            cycle: vec![VertexId::new(1), VertexId::new(2), VertexId::new(3)],
        });
        assert!(console::strip_ansi_codes(&line).ends_with("V1 → V2 → V3"));
    }
}
