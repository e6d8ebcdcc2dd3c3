use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid script syntax in '{file}'")]
#[diagnostic(
    code(graph_analyzer::script_parse_error),
    help("Each line holds one command: arm, add X Y, click X Y, select V, connect A B, clear, dfs, bfs, tick [N], wait or cycles")
)]
pub struct ScriptParseError {
    pub file: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("{reason}")]
    pub span: Option<SourceSpan>,
    pub reason: String,
}

#[derive(Error, Debug, Diagnostic)]
pub enum GraphAnalyzerError {
    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(graph_analyzer::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    ScriptParseError(Box<ScriptParseError>),

    #[error("JSON serialization error")]
    #[diagnostic(
        code(graph_analyzer::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(graph_analyzer::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(graph_analyzer::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(graph_analyzer::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },

    #[error("The graph is empty")]
    #[diagnostic(
        code(graph_analyzer::empty_graph),
        help("Add at least one vertex before starting a traversal")
    )]
    EmptyGraph,
}
