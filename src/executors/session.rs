//! Play command executor

use std::io::Read;

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use super::print_report;
use crate::config::ScriptConfig;
use crate::core::VertexId;
use crate::executors::CommandExecutor;
use crate::progress::ProgressReporter;
use crate::script::{Script, ScriptCommand};
use crate::session::{Notifier, Scheduler, Session};
use crate::terminal::{ConsoleNotifier, IntervalScheduler, TerminalCanvas};
use crate::utils::string::pluralize;

/// Applies script commands to a session on a terminal canvas
pub struct ScriptRunner<S, N> {
    session: Session<TerminalCanvas, S, N>,
    progress: Option<ProgressReporter>,
}

impl<S: Scheduler, N: Notifier> ScriptRunner<S, N> {
    pub fn new(session: Session<TerminalCanvas, S, N>) -> Self {
        Self {
            session,
            progress: None,
        }
    }

    pub fn with_progress(mut self, progress: ProgressReporter) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Run every line, then let a traversal still in flight finish
    pub fn run(&mut self, script: &Script) {
        for line in script.lines() {
            if let Some(p) = self.progress.as_ref() {
                p.running_command(line.number, &line.text);
            }
            self.apply(line.command);
        }
        self.drive(None);
    }

    pub fn apply(&mut self, command: ScriptCommand) {
        match command {
            ScriptCommand::Arm => self.session.arm_add_vertex(),
            ScriptCommand::Click(point) => match self.session.canvas().vertex_at(point) {
                Some(vertex) => {
                    self.session.vertex_clicked(vertex);
                }
                None => {
                    self.session.canvas_clicked(point);
                }
            },
            ScriptCommand::Add(point) => {
                self.session.add_vertex_at(point);
            }
            ScriptCommand::Select(vertex) => {
                if self.check_exists(vertex) {
                    self.session.vertex_clicked(vertex);
                }
            }
            ScriptCommand::Connect(from, to) => {
                if self.check_exists(from) && self.check_exists(to) {
                    self.session.connect(from, to);
                }
            }
            ScriptCommand::Clear => {
                if let Some(p) = self.progress.as_mut() {
                    p.abandon_traversal();
                }
                self.session.clear();
            }
            ScriptCommand::Launch(kind) => {
                // an empty graph has already been reported by the notifier
                if let Ok(start) = self.session.launch(kind)
                    && let Some(p) = self.progress.as_mut()
                {
                    p.start_traversal(kind, start, self.session.store().reachable_count(start));
                }
            }
            ScriptCommand::Tick(count) => self.drive(Some(count)),
            ScriptCommand::Wait => self.drive(None),
            ScriptCommand::Cycles => {
                self.session.check_cycles();
            }
        }
    }

    fn drive(&mut self, limit: Option<usize>) {
        let progress = &mut self.progress;
        self.session.drive(limit, |step| {
            if let Some(p) = progress.as_mut() {
                p.step(step);
            }
        });
    }

    fn check_exists(&self, vertex: VertexId) -> bool {
        let exists = self.session.store().contains(vertex);
        if !exists {
            eprintln!(
                "{} {} is not on the canvas, ignoring",
                style("⚠").yellow(),
                style(vertex).bold()
            );
        }
        exists
    }

    pub fn session(&self) -> &Session<TerminalCanvas, S, N> {
        &self.session
    }

    pub fn into_session(self) -> Session<TerminalCanvas, S, N> {
        self.session
    }
}

pub struct ScriptExecutor;

impl CommandExecutor for ScriptExecutor {
    type Config = ScriptConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let script = match config.script.as_ref() {
            Some(path) => Script::parse_file(path)?,
            None => {
                let mut content = String::new();
                std::io::stdin()
                    .read_to_string(&mut content)
                    .into_diagnostic()
                    .wrap_err("Failed to read script from stdin")?;
                Script::parse("<stdin>", &content)?
            }
        };

        // Create progress reporter if we're in an interactive terminal
        let mut progress = console::Term::stderr()
            .is_term()
            .then(ProgressReporter::new);
        match progress.as_mut() {
            Some(p) => p.start_script(script.name()),
            None => eprintln!(
                "{} Replaying {} ({} {})",
                style("▶").cyan(),
                style(script.name()).bold(),
                script.lines().len(),
                pluralize("command", script.lines().len())
            ),
        }
        let output = progress
            .as_ref()
            .map(ProgressReporter::multi_progress)
            .unwrap_or_default();

        let session = Session::new(
            TerminalCanvas::new().with_progress(output.clone()),
            IntervalScheduler::new(),
            ConsoleNotifier::new().with_progress(output),
        )
        .with_tick_interval(config.tick_interval);

        let mut runner = ScriptRunner::new(session);
        if let Some(progress) = progress {
            runner = runner.with_progress(progress);
        }
        runner.run(&script);

        let (_, _, notifier) = runner.into_session().into_parts();
        print_report(config.format, notifier.notices())
    }
}
