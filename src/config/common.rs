//! Common configuration structures shared across commands

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::common::GraphArgs;
use crate::constants::layout::{CENTER, RADIUS};
use crate::core::{Point, VertexId};
use crate::error::GraphAnalyzerError;

/// A graph described up front: `vertex_count` vertices and an edge list
/// referring to them by label
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphSpec {
    vertex_count: usize,
    edges: Vec<(VertexId, VertexId)>,
}

impl GraphSpec {
    /// Fails when an edge names a vertex beyond `vertex_count`
    pub fn new(
        vertex_count: usize,
        edges: impl IntoIterator<Item = (VertexId, VertexId)>,
    ) -> Result<Self, GraphAnalyzerError> {
        let edges: Vec<_> = edges.into_iter().collect();

        for &(from, to) in &edges {
            for endpoint in [from, to] {
                if endpoint.index() as usize >= vertex_count {
                    return Err(GraphAnalyzerError::ConfigurationError {
                        message: format!(
                            "Edge {from}-{to} refers to {endpoint}, but the graph only has {vertex_count} {}",
                            crate::utils::string::pluralize("vertex", vertex_count)
                        ),
                    });
                }
            }
        }

        Ok(Self {
            vertex_count,
            edges,
        })
    }

    pub fn from_args(args: &GraphArgs) -> Result<Self, GraphAnalyzerError> {
        Self::new(
            args.vertices,
            args.edges.iter().map(|edge| (edge.from, edge.to)),
        )
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn edges(&self) -> &[(VertexId, VertexId)] {
        &self.edges
    }

    /// Canvas position of the vertex at `index`, spread evenly on a circle
    /// starting at the top
    pub fn position(&self, index: usize) -> Point {
        if self.vertex_count <= 1 {
            return CENTER;
        }
        let angle = TAU * index as f64 / self.vertex_count as f64 - FRAC_PI_2;
        Point::new(
            CENTER.x + RADIUS * angle.cos(),
            CENTER.y + RADIUS * angle.sin(),
        )
    }
}
