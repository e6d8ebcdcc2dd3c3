//! Walk command executor

use console::style;
use miette::{Result, WrapErr};

use super::{populate, print_report};
use crate::config::TraversalConfig;
use crate::executors::CommandExecutor;
use crate::progress::ProgressReporter;
use crate::session::Session;
use crate::terminal::{ConsoleNotifier, IntervalScheduler, TerminalCanvas};

pub struct TraversalExecutor;

impl CommandExecutor for TraversalExecutor {
    type Config = TraversalConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let mut session = Session::new(
            TerminalCanvas::silent(),
            IntervalScheduler::new(),
            ConsoleNotifier::silent(),
        )
        .with_tick_interval(config.tick_interval);
        populate(&mut session, &config.graph);

        let start = session
            .launch(config.kind)
            .wrap_err_with(|| format!("Cannot start a {} traversal", config.kind))?;

        eprintln!(
            "{} Walking {} from {} every {}ms...",
            style("🚶").cyan(),
            config.kind,
            style(start).bold(),
            config.tick_interval.as_millis()
        );

        // Create progress reporter if we're in an interactive terminal
        let mut progress = console::Term::stderr()
            .is_term()
            .then(ProgressReporter::new);
        if let Some(p) = progress.as_mut() {
            p.start_traversal(config.kind, start, session.store().reachable_count(start));
        }

        session.drive(None, |step| {
            if let Some(p) = progress.as_mut() {
                p.step(step);
            }
        });

        let (_, _, notifier) = session.into_parts();
        print_report(config.format, notifier.notices())
    }
}
