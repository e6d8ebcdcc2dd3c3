//! Walk command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::{GraphSpec, TraversalConfig};
use crate::error::GraphAnalyzerError;

impl FromCommand for TraversalConfig {
    fn from_command(command: Commands) -> Result<Self, GraphAnalyzerError> {
        match command {
            Commands::Walk {
                graph,
                strategy,
                format,
                tick,
            } => TraversalConfig::builder()
                .with_graph(GraphSpec::from_args(&graph)?)
                .with_kind(strategy.into())
                .with_format(format.format)
                .with_tick_interval(tick.interval())
                .build(),
            _ => Err(GraphAnalyzerError::ConfigurationError {
                message: "Invalid command type for TraversalConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(TraversalConfig);

/// Execute the walk command for animating a traversal
pub fn execute_walk_command(command: Commands) -> Result<()> {
    let config = TraversalConfig::from_command(command)
        .wrap_err("Failed to parse walk command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::traverse::TraversalExecutor;
    TraversalExecutor::execute(config)
}
