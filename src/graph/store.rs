//! Undirected graph storage
//!
//! The store is the only owner of topology. `connect` is the single mutator of
//! the adjacency relation and writes both directions in one call, so the
//! relation stays symmetric without any further bookkeeping.

use petgraph::graphmap::UnGraphMap;
use petgraph::visit::Bfs;

use crate::core::VertexId;

/// Vertex set plus symmetric adjacency, in insertion order
#[derive(Debug, Clone)]
pub struct GraphStore {
    graph: UnGraphMap<VertexId, ()>,
    next_id: u32,
}

impl Default for GraphStore {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphStore {
    pub fn new() -> Self {
        Self {
            graph: UnGraphMap::new(),
            next_id: 0,
        }
    }

    /// Allocate the next sequential id and register it with no neighbors
    ///
    /// # Panics
    ///
    /// Ids are never reused, clears included, so one store hands out at most
    /// `u32::MAX` of them. Allocating beyond that panics.
    pub fn add_vertex(&mut self) -> VertexId {
        let id = VertexId::new(self.next_id);
        let Some(next_id) = self.next_id.checked_add(1) else {
            panic!("vertex ids exhausted after {} allocations", u32::MAX);
        };
        self.next_id = next_id;
        self.graph.add_node(id);
        id
    }

    /// Connect two vertices.
    ///
    /// Self-loops, unknown ids and already connected pairs are ignored.
    /// Returns `true` only when a new edge was inserted.
    pub fn connect(&mut self, a: VertexId, b: VertexId) -> bool {
        if a == b || !self.contains(a) || !self.contains(b) || self.are_connected(a, b) {
            return false;
        }
        self.graph.add_edge(a, b, ());
        true
    }

    /// Remove every vertex and edge.
    ///
    /// The id counter keeps running: ids stay unique for the lifetime of the
    /// store, even across clears.
    pub fn clear(&mut self) {
        self.graph.clear();
    }

    /// Neighbors of `v` in the order their edges were added
    pub fn neighbors(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.contains(v)
            .then(|| self.graph.neighbors(v))
            .into_iter()
            .flatten()
    }

    /// Vertices in creation order
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.graph.nodes()
    }

    /// Every undirected edge once, in creation order, lower id first
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.graph.all_edges().map(|(a, b, _)| (a, b))
    }

    /// Number of vertices in the connected component of `start`, itself
    /// included. Zero for an unknown vertex.
    pub fn reachable_count(&self, start: VertexId) -> usize {
        if !self.contains(start) {
            return 0;
        }
        let mut bfs = Bfs::new(&self.graph, start);
        let mut count = 0;
        while bfs.next(&self.graph).is_some() {
            count += 1;
        }
        count
    }

    pub fn first_vertex(&self) -> Option<VertexId> {
        self.vertices().next()
    }

    pub fn contains(&self, v: VertexId) -> bool {
        self.graph.contains_node(v)
    }

    pub fn are_connected(&self, a: VertexId, b: VertexId) -> bool {
        self.graph.contains_edge(a, b)
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }

    /// Read access to the underlying petgraph map
    pub fn graph(&self) -> &UnGraphMap<VertexId, ()> {
        &self.graph
    }
}
