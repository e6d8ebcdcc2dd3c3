//! Frontier disciplines for the traversal engine

use std::collections::VecDeque;

use crate::core::{TraversalKind, VertexId};

/// Ordered collection of vertices awaiting processing
pub trait Frontier: Default {
    /// The traversal this discipline implements
    const KIND: TraversalKind;

    fn push(&mut self, vertex: VertexId);

    fn pop(&mut self) -> Option<VertexId>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Last-in-first-out frontier (depth-first)
#[derive(Debug, Default)]
pub struct Stack(Vec<VertexId>);

impl Frontier for Stack {
    const KIND: TraversalKind = TraversalKind::DepthFirst;

    fn push(&mut self, vertex: VertexId) {
        self.0.push(vertex);
    }

    fn pop(&mut self) -> Option<VertexId> {
        self.0.pop()
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}

/// First-in-first-out frontier (breadth-first)
#[derive(Debug, Default)]
pub struct Queue(VecDeque<VertexId>);

impl Frontier for Queue {
    const KIND: TraversalKind = TraversalKind::BreadthFirst;

    fn push(&mut self, vertex: VertexId) {
        self.0.push_back(vertex);
    }

    fn pop(&mut self) -> Option<VertexId> {
        self.0.pop_front()
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}
