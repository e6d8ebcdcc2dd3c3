//! Sketch command executor

use std::fs::File;
use std::io::{self, BufWriter, Write};

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use super::populate;
use crate::cli::SketchFormat;
use crate::config::DrawOptions;
use crate::detector::CycleDetector;
use crate::executors::CommandExecutor;
use crate::graph::GraphRenderer;
use crate::session::Session;
use crate::terminal::{ConsoleNotifier, IntervalScheduler, TerminalCanvas};

pub struct DrawExecutor;

impl CommandExecutor for DrawExecutor {
    type Config = DrawOptions;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Sketching {} graph...",
            style("📊").cyan(),
            format!("{:?}", config.format).to_lowercase()
        );

        let mut session = Session::new(
            TerminalCanvas::silent(),
            IntervalScheduler::new(),
            ConsoleNotifier::silent(),
        );
        populate(&mut session, &config.graph);
        let store = session.store();

        // Detect a cycle if highlighting is requested
        let cycle = if config.highlight_cycles {
            let mut detector = CycleDetector::new();
            detector.detect_cycles(store);
            detector.cycle().to_vec()
        } else {
            Vec::new()
        };

        let renderer = GraphRenderer::new(config.highlight_cycles);

        // Determine output destination
        let mut output_writer: Box<dyn io::Write> =
            if let Some(output_path) = config.output.as_ref() {
                Box::new(BufWriter::new(
                    File::create(output_path)
                        .into_diagnostic()
                        .wrap_err_with(|| {
                            format!("Failed to create output file '{}'", output_path.display())
                        })?,
                ))
            } else {
                Box::new(io::stdout())
            };

        match config.format {
            SketchFormat::Ascii => renderer
                .render_ascii(store, &cycle, output_writer.as_mut())
                .wrap_err("Failed to render ASCII graph")?,
            SketchFormat::Dot => renderer
                .render_dot(store, &cycle, output_writer.as_mut())
                .wrap_err("Failed to render DOT graph")?,
            SketchFormat::Mermaid => renderer
                .render_mermaid(store, &cycle, output_writer.as_mut())
                .wrap_err("Failed to render Mermaid graph")?,
        }
        output_writer
            .flush()
            .into_diagnostic()
            .wrap_err("Failed to write graph")?;

        if let Some(output_path) = config.output {
            eprintln!(
                "{} Graph written to {}",
                style("✓").green(),
                style(output_path.display()).bold()
            );
        }

        Ok(())
    }
}
