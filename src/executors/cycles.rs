//! Loops command executor

use console::style;
use miette::Result;

use super::{populate, print_report};
use crate::config::CycleCheckConfig;
use crate::executors::CommandExecutor;
use crate::session::Session;
use crate::terminal::{ConsoleNotifier, IntervalScheduler, TerminalCanvas};

pub struct CycleCheckExecutor;

impl CommandExecutor for CycleCheckExecutor {
    type Config = CycleCheckConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let mut session = Session::new(
            TerminalCanvas::silent(),
            IntervalScheduler::new(),
            ConsoleNotifier::silent(),
        );
        populate(&mut session, &config.graph);

        eprintln!("{} Looking for cycles...", style("🔄").yellow());
        let has_cycle = session.check_cycles();

        let (_, _, notifier) = session.into_parts();
        print_report(config.format, notifier.notices())?;

        // Exit with error code if a cycle was found and requested
        if config.error_on_cycles && has_cycle {
            std::process::exit(1);
        }

        Ok(())
    }
}
