//! Sketch command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::{DrawOptions, GraphSpec};
use crate::error::GraphAnalyzerError;

impl FromCommand for DrawOptions {
    fn from_command(command: Commands) -> Result<Self, GraphAnalyzerError> {
        match command {
            Commands::Sketch {
                graph,
                format,
                output,
                highlight_cycles,
            } => DrawOptions::builder()
                .with_graph(GraphSpec::from_args(&graph)?)
                .with_format(format)
                .with_output(output)
                .with_highlight_cycles(highlight_cycles)
                .build(),
            _ => Err(GraphAnalyzerError::ConfigurationError {
                message: "Invalid command type for DrawOptions".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(DrawOptions);

/// Execute the sketch command for drawing the graph
pub fn execute_sketch_command(command: Commands) -> Result<()> {
    let config = DrawOptions::from_command(command)
        .wrap_err("Failed to parse sketch command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::draw::DrawExecutor;
    DrawExecutor::execute(config)
}
