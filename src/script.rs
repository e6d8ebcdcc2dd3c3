//! Interaction scripts
//!
//! A script replays what a user would do on the canvas, one command per line.
//! `#` starts a comment; blank lines are ignored.
//!
//! ```text
//! add 100 100      # arm add-vertex mode and click the canvas
//! add 200 100
//! connect V0 V1    # two vertex clicks
//! click 200 100    # hits V1, which becomes the pending selection
//! dfs
//! tick 2
//! cycles
//! ```

use std::path::Path;

use miette::{NamedSource, Result, SourceSpan};

use crate::core::{Point, TraversalKind, VertexId};
use crate::error::{GraphAnalyzerError, ScriptParseError};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScriptCommand {
    /// Arm add-vertex mode
    Arm,
    /// Click the canvas; a click on a vertex selects it instead
    Click(Point),
    /// Arm and click in one command
    Add(Point),
    /// Click a vertex by label
    Select(VertexId),
    /// Click two vertices in a row
    Connect(VertexId, VertexId),
    Clear,
    Launch(TraversalKind),
    /// Run up to this many ticks of the live traversal
    Tick(usize),
    /// Run the live traversal to completion
    Wait,
    Cycles,
}

/// One parsed script line
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptLine {
    /// 1-based line number
    pub number: usize,
    pub text: String,
    pub command: ScriptCommand,
}

#[derive(Debug, Clone)]
pub struct Script {
    name: String,
    lines: Vec<ScriptLine>,
}

impl Script {
    pub fn parse_file(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| GraphAnalyzerError::FileReadError {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(Self::parse(&path.display().to_string(), &content)?)
    }

    pub fn parse(name: &str, content: &str) -> std::result::Result<Self, GraphAnalyzerError> {
        let mut lines = Vec::new();
        let mut offset = 0;

        for (index, raw) in content.split_inclusive('\n').enumerate() {
            let code = raw.split('#').next().unwrap_or_default();
            let tokens = tokenize(code);

            if !tokens.is_empty() {
                let command = parse_command(&tokens).map_err(|(span, reason)| {
                    let span = span.unwrap_or_else(|| (0, code.trim_end().len()));
                    GraphAnalyzerError::ScriptParseError(Box::new(ScriptParseError {
                        file: name.to_string(),
                        source_code: NamedSource::new(name, content.to_string()),
                        span: Some(SourceSpan::new((offset + span.0).into(), span.1)),
                        reason,
                    }))
                })?;

                lines.push(ScriptLine {
                    number: index + 1,
                    text: code.trim().to_string(),
                    command,
                });
            }

            offset += raw.len();
        }

        Ok(Self {
            name: name.to_string(),
            lines,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lines(&self) -> &[ScriptLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// A whitespace separated word and its byte offset within the line
type Token<'a> = (usize, &'a str);

/// Byte offset and length of the offending text, `None` for the whole line
type ParseFailure = (Option<(usize, usize)>, String);

fn tokenize(line: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut start = None;

    for (i, ch) in line.char_indices() {
        match (ch.is_whitespace(), start) {
            (true, Some(s)) => {
                tokens.push((s, &line[s..i]));
                start = None;
            }
            (false, None) => start = Some(i),
            _ => {}
        }
    }
    if let Some(s) = start {
        tokens.push((s, &line[s..]));
    }

    tokens
}

fn span_of(token: &Token<'_>) -> Option<(usize, usize)> {
    Some((token.0, token.1.len()))
}

fn parse_command(tokens: &[Token<'_>]) -> std::result::Result<ScriptCommand, ParseFailure> {
    let (keyword, args) = match tokens.split_first() {
        Some((keyword, args)) => (keyword, args),
        None => return Err((None, "empty command".to_string())),
    };

    let expect_args = |count: usize| -> std::result::Result<(), ParseFailure> {
        match args.get(count) {
            Some(extra) => Err((span_of(extra), "unexpected argument".to_string())),
            None if args.len() < count => Err((
                None,
                format!(
                    "'{}' takes {count} argument{}",
                    keyword.1,
                    if count == 1 { "" } else { "s" }
                ),
            )),
            None => Ok(()),
        }
    };

    let command = match keyword.1.to_ascii_lowercase().as_str() {
        "arm" => {
            expect_args(0)?;
            ScriptCommand::Arm
        }
        "click" => {
            expect_args(2)?;
            ScriptCommand::Click(parse_point(&args[0], &args[1])?)
        }
        "add" => {
            expect_args(2)?;
            ScriptCommand::Add(parse_point(&args[0], &args[1])?)
        }
        "select" => {
            expect_args(1)?;
            ScriptCommand::Select(parse_vertex(&args[0])?)
        }
        "connect" => {
            expect_args(2)?;
            ScriptCommand::Connect(parse_vertex(&args[0])?, parse_vertex(&args[1])?)
        }
        "clear" => {
            expect_args(0)?;
            ScriptCommand::Clear
        }
        "dfs" => {
            expect_args(0)?;
            ScriptCommand::Launch(TraversalKind::DepthFirst)
        }
        "bfs" => {
            expect_args(0)?;
            ScriptCommand::Launch(TraversalKind::BreadthFirst)
        }
        "tick" => match args {
            [] => ScriptCommand::Tick(1),
            [count] => ScriptCommand::Tick(
                count
                    .1
                    .parse()
                    .map_err(|_| (span_of(count), "expected a tick count".to_string()))?,
            ),
            [_, extra, ..] => return Err((span_of(extra), "unexpected argument".to_string())),
        },
        "wait" => {
            expect_args(0)?;
            ScriptCommand::Wait
        }
        "cycles" => {
            expect_args(0)?;
            ScriptCommand::Cycles
        }
        _ => return Err((span_of(keyword), "unknown command".to_string())),
    };

    Ok(command)
}

fn parse_point(x: &Token<'_>, y: &Token<'_>) -> std::result::Result<Point, ParseFailure> {
    let coordinate = |token: &Token<'_>| {
        token
            .1
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| (span_of(token), "expected a coordinate".to_string()))
    };
    Ok(Point::new(coordinate(x)?, coordinate(y)?))
}

fn parse_vertex(token: &Token<'_>) -> std::result::Result<VertexId, ParseFailure> {
    token
        .1
        .parse()
        .map_err(|_| (span_of(token), "expected a vertex label like V0".to_string()))
}
