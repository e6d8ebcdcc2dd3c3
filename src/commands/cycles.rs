//! Loops command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::{CycleCheckConfig, GraphSpec};
use crate::error::GraphAnalyzerError;

impl FromCommand for CycleCheckConfig {
    fn from_command(command: Commands) -> Result<Self, GraphAnalyzerError> {
        match command {
            Commands::Loops {
                graph,
                format,
                error_on_cycles,
            } => CycleCheckConfig::builder()
                .with_graph(GraphSpec::from_args(&graph)?)
                .with_format(format.format)
                .with_error_on_cycles(error_on_cycles)
                .build(),
            _ => Err(GraphAnalyzerError::ConfigurationError {
                message: "Invalid command type for CycleCheckConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(CycleCheckConfig);

/// Execute the loops command for detecting cycles
pub fn execute_loops_command(command: Commands) -> Result<()> {
    let config = CycleCheckConfig::from_command(command)
        .wrap_err("Failed to parse loops command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::cycles::CycleCheckExecutor;
    CycleCheckExecutor::execute(config)
}
