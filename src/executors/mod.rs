//! Command executors that handle the actual logic for each command

pub mod cycles;
pub mod draw;
pub mod session;
pub mod traverse;

use console::style;
use miette::{Result, WrapErr};

use crate::cli::OutputFormat;
use crate::config::GraphSpec;
use crate::core::Notice;
use crate::reports::{HumanReportGenerator, JsonReportGenerator, ReportGenerator};
use crate::session::{Canvas, Notifier, Scheduler, Session};
use crate::utils::string::pluralize;

/// Trait for command executors
pub trait CommandExecutor {
    type Config;

    /// Execute the command with the given configuration
    fn execute(config: Self::Config) -> Result<()>;
}

/// Recreate `spec` in a fresh session, the way a user would: one placed
/// vertex per label, then one pair of vertex clicks per edge
pub fn populate<C: Canvas, S: Scheduler, N: Notifier>(
    session: &mut Session<C, S, N>,
    spec: &GraphSpec,
) {
    for index in 0..spec.vertex_count() {
        session.add_vertex_at(spec.position(index));
    }
    for &(from, to) in spec.edges() {
        session.connect(from, to);
    }

    let store = session.store();
    eprintln!(
        "{} Built graph with {} {} and {} {}",
        style("🔨").blue(),
        style(store.vertex_count()).yellow().bold(),
        pluralize("vertex", store.vertex_count()),
        style(store.edge_count()).yellow().bold(),
        pluralize("edge", store.edge_count()),
    );
}

/// Print the report for `notices` to stdout
fn print_report(format: OutputFormat, notices: &[Notice]) -> Result<()> {
    let report = match format {
        OutputFormat::Human => HumanReportGenerator::new().generate_report(notices),
        OutputFormat::Json => JsonReportGenerator::new().generate_report(notices),
    }
    .wrap_err("Failed to generate report")?;

    print!("{report}");
    Ok(())
}
