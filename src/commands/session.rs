//! Play command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::ScriptConfig;
use crate::error::GraphAnalyzerError;

impl FromCommand for ScriptConfig {
    fn from_command(command: Commands) -> Result<Self, GraphAnalyzerError> {
        match command {
            Commands::Play {
                script,
                format,
                tick,
            } => ScriptConfig::builder()
                .with_script(script)
                .with_format(format.format)
                .with_tick_interval(tick.interval())
                .build(),
            _ => Err(GraphAnalyzerError::ConfigurationError {
                message: "Invalid command type for ScriptConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(ScriptConfig);

/// Execute the play command for replaying an interaction script
pub fn execute_play_command(command: Commands) -> Result<()> {
    let config =
        ScriptConfig::from_command(command).wrap_err("Failed to parse play command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::session::ScriptExecutor;
    ScriptExecutor::execute(config)
}
