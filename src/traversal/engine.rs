//! Stepwise traversal state machine

use std::collections::HashSet;

use super::frontier::{Frontier, Queue, Stack};
use crate::core::{StepResult, TraversalKind, TraversalSummary, VertexId};
use crate::error::GraphAnalyzerError;
use crate::graph::GraphStore;

/// Frontier plus visitation bookkeeping of one traversal run
#[derive(Debug, Default)]
pub struct TraversalState<F: Frontier> {
    frontier: F,
    visited: HashSet<VertexId>,
    order: Vec<VertexId>,
    skipped_steps: usize,
}

/// A traversal that advances one frontier entry per [`step`](Self::step)
///
/// The engine never owns the graph; the caller passes the store on every
/// step. Vertices finalized by a step are reported through [`StepResult`].
#[derive(Debug)]
pub struct TraversalEngine<F: Frontier> {
    state: TraversalState<F>,
    finished: bool,
}

impl<F: Frontier> TraversalEngine<F> {
    /// Start at the first vertex of the store.
    ///
    /// Fails with [`GraphAnalyzerError::EmptyGraph`] when the store has no
    /// vertices; no engine is created in that case.
    pub fn start(store: &GraphStore) -> Result<Self, GraphAnalyzerError> {
        let start = store.first_vertex().ok_or(GraphAnalyzerError::EmptyGraph)?;
        Ok(Self::start_from(start))
    }

    pub fn start_from(start: VertexId) -> Self {
        let mut state = TraversalState::<F>::default();
        state.frontier.push(start);
        Self {
            state,
            finished: false,
        }
    }

    /// Process one frontier entry
    pub fn step(&mut self, store: &GraphStore) -> StepResult {
        let Some(vertex) = self.state.frontier.pop() else {
            self.finished = true;
            return StepResult::Done;
        };

        if !self.state.visited.insert(vertex) {
            self.state.skipped_steps += 1;
            return StepResult::Skipped(vertex);
        }
        self.state.order.push(vertex);

        for neighbor in store.neighbors(vertex) {
            if !self.state.visited.contains(&neighbor) {
                self.state.frontier.push(neighbor);
            }
        }

        StepResult::Visited(vertex)
    }

    /// Step until `Done`, without any pacing
    pub fn run_to_completion(&mut self, store: &GraphStore) -> TraversalSummary {
        while !self.step(store).is_done() {}
        self.summary()
    }

    pub fn kind(&self) -> TraversalKind {
        F::KIND
    }

    /// Visited vertices in visitation order
    pub fn visited(&self) -> &[VertexId] {
        &self.state.order
    }

    pub fn is_visited(&self, vertex: VertexId) -> bool {
        self.state.visited.contains(&vertex)
    }

    pub fn frontier_len(&self) -> usize {
        self.state.frontier.len()
    }

    pub fn skipped_steps(&self) -> usize {
        self.state.skipped_steps
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn summary(&self) -> TraversalSummary {
        TraversalSummary {
            kind: self.kind(),
            order: self.state.order.clone(),
            skipped_steps: self.state.skipped_steps,
        }
    }
}

/// A traversal of either kind
#[derive(Debug)]
pub enum Traversal {
    DepthFirst(TraversalEngine<Stack>),
    BreadthFirst(TraversalEngine<Queue>),
}

impl Traversal {
    pub fn start(kind: TraversalKind, store: &GraphStore) -> Result<Self, GraphAnalyzerError> {
        let start = store.first_vertex().ok_or(GraphAnalyzerError::EmptyGraph)?;
        Ok(Self::start_from(kind, start))
    }

    pub fn start_from(kind: TraversalKind, start: VertexId) -> Self {
        match kind {
            TraversalKind::DepthFirst => Traversal::DepthFirst(TraversalEngine::start_from(start)),
            TraversalKind::BreadthFirst => {
                Traversal::BreadthFirst(TraversalEngine::start_from(start))
            }
        }
    }

    pub fn step(&mut self, store: &GraphStore) -> StepResult {
        match self {
            Traversal::DepthFirst(engine) => engine.step(store),
            Traversal::BreadthFirst(engine) => engine.step(store),
        }
    }

    pub fn kind(&self) -> TraversalKind {
        match self {
            Traversal::DepthFirst(engine) => engine.kind(),
            Traversal::BreadthFirst(engine) => engine.kind(),
        }
    }

    pub fn visited(&self) -> &[VertexId] {
        match self {
            Traversal::DepthFirst(engine) => engine.visited(),
            Traversal::BreadthFirst(engine) => engine.visited(),
        }
    }

    pub fn is_finished(&self) -> bool {
        match self {
            Traversal::DepthFirst(engine) => engine.is_finished(),
            Traversal::BreadthFirst(engine) => engine.is_finished(),
        }
    }

    pub fn summary(&self) -> TraversalSummary {
        match self {
            Traversal::DepthFirst(engine) => engine.summary(),
            Traversal::BreadthFirst(engine) => engine.summary(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use petgraph::visit::Bfs;
    use pretty_assertions::assert_eq;

    use super::*;

    fn build(vertex_count: usize, edges: &[(usize, usize)]) -> (GraphStore, Vec<VertexId>) {
        let mut store = GraphStore::new();
        let ids: Vec<_> = (0..vertex_count).map(|_| store.add_vertex()).collect();
        for &(a, b) in edges {
            store.connect(ids[a], ids[b]);
        }
        (store, ids)
    }

    fn steps<F: Frontier>(store: &GraphStore) -> Vec<StepResult> {
        let mut engine = TraversalEngine::<F>::start(store).unwrap();
        let mut results = Vec::new();
        loop {
            let result = engine.step(store);
            results.push(result);
            if result.is_done() {
                return results;
            }
        }
    }

    #[test]
    fn test_empty_graph_is_rejected() {
        let store = GraphStore::new();
        assert!(matches!(
            TraversalEngine::<Stack>::start(&store),
            Err(GraphAnalyzerError::EmptyGraph)
        ));
        assert!(matches!(
            Traversal::start(TraversalKind::BreadthFirst, &store),
            Err(GraphAnalyzerError::EmptyGraph)
        ));
    }

    #[test]
    fn test_single_vertex() {
        let (store, ids) = build(1, &[]);
        assert_eq!(
            steps::<Stack>(&store),
            vec![StepResult::Visited(ids[0]), StepResult::Done]
        );
    }

    #[test]
    fn test_star_orders_differ() {
        // center X = V0, leaves L1..L3 connected in order
        let (store, ids) = build(4, &[(0, 1), (0, 2), (0, 3)]);

        let bfs = TraversalEngine::<Queue>::start(&store)
            .unwrap()
            .run_to_completion(&store);
        assert_eq!(bfs.order, vec![ids[0], ids[1], ids[2], ids[3]]);

        let dfs = TraversalEngine::<Stack>::start(&store)
            .unwrap()
            .run_to_completion(&store);
        assert_eq!(dfs.order, vec![ids[0], ids[3], ids[2], ids[1]]);
    }

    #[test]
    fn test_triangle_wastes_one_step() {
        let (store, ids) = build(3, &[(0, 1), (1, 2), (2, 0)]);

        assert_eq!(
            steps::<Stack>(&store),
            vec![
                StepResult::Visited(ids[0]),
                StepResult::Visited(ids[2]),
                StepResult::Visited(ids[1]),
                StepResult::Skipped(ids[1]),
                StepResult::Done,
            ]
        );
        assert_eq!(
            steps::<Queue>(&store),
            vec![
                StepResult::Visited(ids[0]),
                StepResult::Visited(ids[1]),
                StepResult::Visited(ids[2]),
                StepResult::Skipped(ids[2]),
                StepResult::Done,
            ]
        );
    }

    #[test]
    fn test_depth_first_descends_one_branch_at_a_time() {
        // V0 - V1 - V2 and V0 - V3 - V4
        let (store, ids) = build(5, &[(0, 1), (1, 2), (0, 3), (3, 4)]);

        let dfs = TraversalEngine::<Stack>::start(&store)
            .unwrap()
            .run_to_completion(&store);
        assert_eq!(dfs.order, vec![ids[0], ids[3], ids[4], ids[1], ids[2]]);

        let bfs = TraversalEngine::<Queue>::start(&store)
            .unwrap()
            .run_to_completion(&store);
        assert_eq!(bfs.order, vec![ids[0], ids[1], ids[3], ids[2], ids[4]]);
    }

    #[test]
    fn test_each_vertex_visited_exactly_once() {
        let edges = [(0, 1), (1, 2), (2, 3), (3, 0), (1, 3), (3, 4), (4, 5), (5, 1)];
        let (store, ids) = build(6, &edges);

        for kind in [TraversalKind::DepthFirst, TraversalKind::BreadthFirst] {
            let mut traversal = Traversal::start(kind, &store).unwrap();
            let mut visited = Vec::new();
            loop {
                match traversal.step(&store) {
                    StepResult::Visited(v) => visited.push(v),
                    StepResult::Skipped(_) => {}
                    StepResult::Done => break,
                }
            }

            assert_eq!(visited.len(), ids.len(), "{kind} visited count");
            let distinct: HashSet<_> = visited.iter().collect();
            assert_eq!(distinct.len(), ids.len(), "{kind} visited duplicates");
            assert_eq!(traversal.visited(), &visited[..]);
            assert_eq!(traversal.kind(), kind);
        }
    }

    #[test]
    fn test_only_start_component_is_visited() {
        let (store, ids) = build(4, &[(0, 1), (2, 3)]);
        let summary = TraversalEngine::<Queue>::start(&store)
            .unwrap()
            .run_to_completion(&store);
        assert_eq!(summary.order, vec![ids[0], ids[1]]);
    }

    #[test]
    fn test_done_is_terminal() {
        let (store, _) = build(2, &[(0, 1)]);
        let mut engine = TraversalEngine::<Stack>::start(&store).unwrap();
        engine.run_to_completion(&store);

        assert!(engine.is_finished());
        assert_eq!(engine.frontier_len(), 0);
        assert_eq!(engine.step(&store), StepResult::Done);
        assert_eq!(engine.step(&store), StepResult::Done);
        assert_eq!(engine.visited().len(), 2);
    }

    #[test]
    fn test_summary_reports_skips() {
        let (store, ids) = build(3, &[(0, 1), (1, 2), (2, 0)]);
        let mut traversal = Traversal::start(TraversalKind::DepthFirst, &store).unwrap();
        while !traversal.step(&store).is_done() {}

        let summary = traversal.summary();
        assert_eq!(summary.kind, TraversalKind::DepthFirst);
        assert_eq!(summary.order, vec![ids[0], ids[2], ids[1]]);
        assert_eq!(summary.skipped_steps, 1);
        assert!(traversal.is_finished());
    }

    #[test]
    fn test_breadth_first_matches_petgraph() {
        let edges = [
            (0, 4),
            (0, 2),
            (4, 1),
            (2, 1),
            (1, 5),
            (5, 3),
            (3, 6),
            (6, 0),
            (2, 6),
        ];
        let (store, ids) = build(7, &edges);

        let ours = TraversalEngine::<Queue>::start(&store)
            .unwrap()
            .run_to_completion(&store);

        let mut bfs = Bfs::new(store.graph(), ids[0]);
        let mut theirs = Vec::new();
        while let Some(v) = bfs.next(store.graph()) {
            theirs.push(v);
        }

        assert_eq!(ours.order, theirs);
    }

    #[test]
    fn test_replaying_gives_same_order() {
        let (store, _) = build(6, &[(0, 5), (0, 2), (2, 4), (5, 4), (4, 1), (1, 3)]);
        let first = TraversalEngine::<Stack>::start(&store)
            .unwrap()
            .run_to_completion(&store);
        let second = TraversalEngine::<Stack>::start(&store)
            .unwrap()
            .run_to_completion(&store);
        assert_eq!(first, second);
    }
}
