//! Sketch command configuration

use std::path::PathBuf;

use super::common::GraphSpec;
use crate::cli::SketchFormat;

#[derive(Debug, Clone)]
pub struct DrawOptions {
    pub graph: GraphSpec,
    pub format: SketchFormat,
    pub output: Option<PathBuf>,
    pub highlight_cycles: bool,
}

crate::impl_builder! {
    DrawOptionsBuilder => DrawOptions {
        with_graph => graph: GraphSpec,
        with_format => format: SketchFormat,
        with_output => output: Option<PathBuf>,
        with_highlight_cycles => highlight_cycles: bool,
    }
}
