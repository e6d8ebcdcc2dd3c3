//! Walk command configuration

use std::time::Duration;

use super::common::GraphSpec;
use crate::cli::OutputFormat;
use crate::core::TraversalKind;

/// Configuration for animating a single traversal
#[derive(Debug, Clone)]
pub struct TraversalConfig {
    pub graph: GraphSpec,
    pub kind: TraversalKind,
    pub format: OutputFormat,
    pub tick_interval: Duration,
}

crate::impl_builder! {
    TraversalConfigBuilder => TraversalConfig {
        with_graph => graph: GraphSpec,
        with_kind => kind: TraversalKind,
        with_format => format: OutputFormat,
        with_tick_interval => tick_interval: Duration,
    }
}
