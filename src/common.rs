//! Common functionality shared across commands

use std::str::FromStr;
use std::time::Duration;

use clap::Args;

use crate::constants::animation::DEFAULT_INTERVAL_MS;
use crate::constants::vertex::LABEL_PREFIX;
use crate::core::{InvalidVertexLabel, VertexId};

/// Graph description shared by the commands that build a graph up front
#[derive(Args, Debug, Clone)]
pub struct GraphArgs {
    /// Number of vertices, labelled V0, V1, ...
    #[arg(
        short = 'n',
        long,
        default_value_t = 0,
        env = "GRAPH_ANALYZER_VERTICES"
    )]
    pub vertices: usize,

    /// Edge between two vertices, e.g. V0-V1 (repeatable)
    #[arg(
        short,
        long = "edge",
        value_name = "A-B",
        value_delimiter = ',',
        env = "GRAPH_ANALYZER_EDGES"
    )]
    pub edges: Vec<EdgeSpec>,
}

/// Common output format arguments
#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = crate::constants::output::DEFAULT_FORMAT, env = "GRAPH_ANALYZER_FORMAT")]
    pub format: crate::cli::OutputFormat,
}

/// Traversal pacing arguments
#[derive(Args, Debug, Clone)]
pub struct TickArgs {
    /// Milliseconds between two traversal steps
    #[arg(
        long,
        value_name = "MS",
        default_value = DEFAULT_INTERVAL_MS,
        env = "GRAPH_ANALYZER_INTERVAL_MS"
    )]
    pub interval_ms: u64,
}

impl TickArgs {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

/// An edge given on the command line as `A-B`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeSpec {
    pub from: VertexId,
    pub to: VertexId,
}

#[derive(Debug, thiserror::Error)]
pub enum InvalidEdgeSpec {
    #[error("'{0}' is not an edge (expected something like V0-V1)")]
    MissingSeparator(String),
    #[error(transparent)]
    Vertex(#[from] InvalidVertexLabel),
}

impl FromStr for EdgeSpec {
    type Err = InvalidEdgeSpec;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (from, to) = s
            .split_once('-')
            .ok_or_else(|| InvalidEdgeSpec::MissingSeparator(s.to_string()))?;

        Ok(Self {
            from: parse_endpoint(from)?,
            to: parse_endpoint(to)?,
        })
    }
}

/// Accepts `V3`, `v3` and a bare `3`
fn parse_endpoint(s: &str) -> Result<VertexId, InvalidVertexLabel> {
    let trimmed = s.trim();
    if trimmed.bytes().next().is_some_and(|b| b.is_ascii_digit()) {
        return format!("{LABEL_PREFIX}{trimmed}")
            .parse()
            .map_err(|_| InvalidVertexLabel(s.to_string()));
    }
    s.parse()
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, crate::error::GraphAnalyzerError>;
}

/// Trait for configurations that can be created from CLI commands
/// This trait simplifies command-to-config conversions
pub trait FromCommand: Sized {
    /// The command variant that this config can be created from
    fn from_command(
        command: crate::cli::Commands,
    ) -> Result<Self, crate::error::GraphAnalyzerError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::GraphAnalyzerError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}

/// Macro to generate a config builder with one `with_*` setter per field
///
/// Every field is required; [`ConfigBuilder::build`] reports the first unset
/// one as a configuration error.
#[macro_export]
macro_rules! impl_builder {
    (
        $(#[$meta:meta])*
        $builder:ident => $config:ident {
            $($setter:ident => $field:ident : $ty:ty),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Default)]
        pub struct $builder {
            $($field: Option<$ty>,)*
        }

        impl $builder {
            pub fn new() -> Self {
                Self::default()
            }

            $(
                pub fn $setter(mut self, $field: $ty) -> Self {
                    self.$field = Some($field);
                    self
                }
            )*
        }

        impl $config {
            pub fn builder() -> $builder {
                $builder::new()
            }
        }

        impl $crate::common::ConfigBuilder for $builder {
            type Config = $config;

            fn build(self) -> Result<Self::Config, $crate::error::GraphAnalyzerError> {
                Ok($config {
                    $(
                        $field: self.$field.ok_or_else(|| {
                            $crate::error::GraphAnalyzerError::ConfigurationError {
                                message: concat!("Missing required field: ", stringify!($field))
                                    .to_string(),
                            }
                        })?,
                    )*
                })
            }
        }
    };
}
