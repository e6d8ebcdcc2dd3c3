//! Play command configuration

use std::path::PathBuf;
use std::time::Duration;

use crate::cli::OutputFormat;

/// Configuration for replaying an interaction script
#[derive(Debug, Clone)]
pub struct ScriptConfig {
    /// Script file; `None` reads standard input
    pub script: Option<PathBuf>,
    /// Output format for the final report
    pub format: OutputFormat,
    /// Delay between two traversal steps
    pub tick_interval: Duration,
}

crate::impl_builder! {
    ScriptConfigBuilder => ScriptConfig {
        with_script => script: Option<PathBuf>,
        with_format => format: OutputFormat,
        with_tick_interval => tick_interval: Duration,
    }
}
