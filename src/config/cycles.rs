//! Loops command configuration

use super::common::GraphSpec;
use crate::cli::OutputFormat;

/// Configuration for the cycle check
#[derive(Debug, Clone)]
pub struct CycleCheckConfig {
    pub graph: GraphSpec,
    /// Output format for the report
    pub format: OutputFormat,
    /// Whether to exit with error code if a cycle is found
    pub error_on_cycles: bool,
}

crate::impl_builder! {
    CycleCheckConfigBuilder => CycleCheckConfig {
        with_graph => graph: GraphSpec,
        with_format => format: OutputFormat,
        with_error_on_cycles => error_on_cycles: bool,
    }
}
