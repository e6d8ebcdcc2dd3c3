//! Human-readable console report generation

use std::fmt::Write;

use console::style;

use super::ReportGenerator;
use crate::core::{Notice, TraversalSummary, VertexId};
use crate::error::GraphAnalyzerError;
use crate::utils::string::{arrow_path, pluralize};

#[derive(Default)]
pub struct HumanReportGenerator;

impl HumanReportGenerator {
    pub fn new() -> Self {
        Self
    }

    fn write_traversal(
        &self,
        output: &mut String,
        summary: &TraversalSummary,
    ) -> Result<(), GraphAnalyzerError> {
        let kind = summary.kind.to_string();
        let mut title = kind[..1].to_uppercase();
        title.push_str(&kind[1..]);

        writeln!(
            output,
            "{} {} traversal complete",
            style("✅").green().bold(),
            style(title).bold()
        )?;
        writeln!(
            output,
            "  {} Visit order: {}",
            style("→").dim(),
            style(arrow_path(&summary.order)).yellow()
        )?;
        writeln!(
            output,
            "  {} Visited {} {}, {} wasted {}",
            style("→").dim(),
            summary.order.len(),
            pluralize("vertex", summary.order.len()),
            summary.skipped_steps,
            pluralize("step", summary.skipped_steps)
        )?;
        Ok(())
    }

    fn write_cycle(&self, output: &mut String, cycle: &[VertexId]) -> Result<(), GraphAnalyzerError> {
        writeln!(output, "{} The graph has a cycle", style("❌").red().bold())?;

        // close the loop so the path reads back to its start
        let closed: Vec<_> = cycle.iter().chain(cycle.first()).collect();
        writeln!(
            output,
            "  {} {}",
            style("🔄").yellow(),
            style(arrow_path(&closed)).red()
        )?;
        Ok(())
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn generate_report(&self, notices: &[Notice]) -> Result<String, GraphAnalyzerError> {
        let mut output = String::new();

        if notices.is_empty() {
            writeln!(output, "\n{} Nothing to report", style("ℹ️").blue())?;
            return Ok(output);
        }

        writeln!(output)?;
        for notice in notices {
            match notice {
                Notice::EmptyGraph => writeln!(
                    output,
                    "{} The graph is empty, no traversal was started",
                    style("ℹ️").blue()
                )?,
                Notice::TraversalComplete(summary) => self.write_traversal(&mut output, summary)?,
                Notice::CycleCheck {
                    has_cycle: true,
                    cycle,
                } => self.write_cycle(&mut output, cycle)?,
                Notice::CycleCheck {
                    has_cycle: false, ..
                } => writeln!(
                    output,
                    "{} The graph has no cycles",
                    style("✅").green().bold()
                )?,
            }
        }

        if notices
            .iter()
            .any(|notice| matches!(notice, Notice::CycleCheck { has_cycle: true, .. }))
        {
            writeln!(
                output,
                "\n{} Removing any one edge of a cycle breaks it.",
                style("💡").yellow()
            )?;
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TraversalKind;

    fn plain(report: &str) -> String {
        console::strip_ansi_codes(report).to_string()
    }

    #[test]
    fn test_empty_log() {
        let report = HumanReportGenerator::new().generate_report(&[]).unwrap();
        assert!(plain(&report).contains("Nothing to report"));
    }

    #[test]
    fn test_traversal_section() {
        let notices = [Notice::TraversalComplete(TraversalSummary {
            kind: TraversalKind::BreadthFirst,
            order: vec![VertexId::new(0), VertexId::new(1), VertexId::new(2)],
            skipped_steps: 1,
        })];
        let report = plain(&HumanReportGenerator::new().generate_report(&notices).unwrap());

        assert!(report.contains("Breadth-first traversal complete"));
        assert!(report.contains("Visit order: V0 → V1 → V2"));
        assert!(report.contains("Visited 3 vertices, 1 wasted step"));
    }

    #[test]
    fn test_cycle_is_printed_closed() {
        let notices = [Notice::CycleCheck {
            has_cycle: true,
            cycle: vec![VertexId::new(2), VertexId::new(3), VertexId::new(4)],
        }];
        let report = plain(&HumanReportGenerator::new().generate_report(&notices).unwrap());

        assert!(report.contains("The graph has a cycle"));
        assert!(report.contains("V2 → V3 → V4 → V2"));
        assert!(report.contains("Removing any one edge"));
    }

    #[test]
    fn test_acyclic_and_empty_notices() {
        let notices = [
            Notice::EmptyGraph,
            Notice::CycleCheck {
                has_cycle: false,
                cycle: vec![],
            },
        ];
        let report = plain(&HumanReportGenerator::new().generate_report(&notices).unwrap());

        assert!(report.contains("The graph is empty"));
        assert!(report.contains("The graph has no cycles"));
        assert!(!report.contains("Removing"));
    }
}
