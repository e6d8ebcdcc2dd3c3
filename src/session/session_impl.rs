use std::time::Duration;

use super::collaborators::{Canvas, Notifier, Scheduler};
use crate::constants::animation;
use crate::core::{Notice, Point, StepResult, TraversalKind, VertexId, VertexState};
use crate::detector::CycleDetector;
use crate::error::GraphAnalyzerError;
use crate::graph::GraphStore;
use crate::selection::{SelectionController, SelectionOutcome};
use crate::traversal::Traversal;

/// One interactive graph-editing session
///
/// Owns the graph, the pending selection and at most one live traversal.
/// Every visible effect goes through the canvas and notifier collaborators,
/// and traversal pacing through the scheduler.
#[derive(Debug)]
pub struct Session<C, S, N> {
    store: GraphStore,
    selection: SelectionController,
    adding_vertex: bool,
    traversal: Option<Traversal>,
    tick_interval: Duration,
    canvas: C,
    scheduler: S,
    notifier: N,
}

impl<C: Canvas, S: Scheduler, N: Notifier> Session<C, S, N> {
    pub fn new(canvas: C, scheduler: S, notifier: N) -> Self {
        Self {
            store: GraphStore::new(),
            selection: SelectionController::new(),
            adding_vertex: false,
            traversal: None,
            tick_interval: animation::TICK_INTERVAL,
            canvas,
            scheduler,
            notifier,
        }
    }

    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    /// Make the next canvas click place a vertex
    pub fn arm_add_vertex(&mut self) {
        self.adding_vertex = true;
    }

    pub fn is_adding_vertex(&self) -> bool {
        self.adding_vertex
    }

    /// A click on empty canvas space. Adds a vertex only when armed.
    pub fn canvas_clicked(&mut self, at: Point) -> Option<VertexId> {
        if !self.adding_vertex {
            return None;
        }
        self.adding_vertex = false;
        Some(self.place_vertex(at))
    }

    /// Arm and click in one go
    pub fn add_vertex_at(&mut self, at: Point) -> VertexId {
        self.adding_vertex = false;
        self.place_vertex(at)
    }

    fn place_vertex(&mut self, at: Point) -> VertexId {
        let id = self.store.add_vertex();
        self.canvas.vertex_added(id, at);
        id
    }

    pub fn vertex_clicked(&mut self, vertex: VertexId) -> SelectionOutcome {
        let outcome = self.selection.on_vertex_clicked(vertex, &mut self.store);
        if let SelectionOutcome::EdgeAttempted {
            from,
            to,
            created: true,
        } = outcome
        {
            self.canvas.edge_added(from, to);
        }
        outcome
    }

    /// Two vertex clicks in a row
    pub fn connect(&mut self, a: VertexId, b: VertexId) -> SelectionOutcome {
        self.vertex_clicked(a);
        self.vertex_clicked(b)
    }

    pub fn clear(&mut self) {
        if self.traversal.take().is_some() {
            self.scheduler.stop();
        }
        self.store.clear();
        self.selection.reset();
        self.adding_vertex = false;
        self.canvas.canvas_cleared();
    }

    pub fn check_cycles(&mut self) -> bool {
        let mut detector = CycleDetector::new();
        detector.detect_cycles(&self.store);
        let has_cycle = detector.has_cycles();
        self.notifier.notify(Notice::CycleCheck {
            has_cycle,
            cycle: detector.cycle().to_vec(),
        });
        has_cycle
    }

    /// Start a traversal from the first vertex, replacing any live one.
    ///
    /// Returns the start vertex.
    pub fn launch(&mut self, kind: TraversalKind) -> Result<VertexId, GraphAnalyzerError> {
        let Some(start) = self.store.first_vertex() else {
            self.notifier.notify(Notice::EmptyGraph);
            return Err(GraphAnalyzerError::EmptyGraph);
        };

        self.cancel_traversal();
        self.traversal = Some(Traversal::start_from(kind, start));
        self.scheduler.start(self.tick_interval);
        Ok(start)
    }

    /// Advance the live traversal by one step. `None` when idle.
    pub fn tick(&mut self) -> Option<StepResult> {
        let traversal = self.traversal.as_mut()?;
        let result = traversal.step(&self.store);

        match result {
            StepResult::Visited(vertex) => {
                self.canvas
                    .vertex_recolored(vertex, VertexState::Visiting(traversal.kind()));
            }
            StepResult::Skipped(_) => {}
            StepResult::Done => {
                let summary = traversal.summary();
                self.cancel_traversal();
                self.notifier.notify(Notice::TraversalComplete(summary));
            }
        }

        Some(result)
    }

    /// Tick whenever the scheduler says one is due, until the traversal
    /// completes, the scheduler stops or `limit` ticks have run.
    ///
    /// Returns the number of ticks taken.
    pub fn drive(&mut self, limit: Option<usize>, mut on_step: impl FnMut(&StepResult)) -> usize {
        let mut ticks = 0;
        while self.traversal.is_some()
            && limit.is_none_or(|limit| ticks < limit)
            && self.scheduler.wait_for_tick()
        {
            let Some(result) = self.tick() else {
                break;
            };
            ticks += 1;
            on_step(&result);
        }
        ticks
    }

    /// Stop ticking and restore the colors of a live traversal
    fn cancel_traversal(&mut self) {
        let Some(traversal) = self.traversal.take() else {
            return;
        };
        self.scheduler.stop();
        for &vertex in traversal.visited() {
            self.canvas.vertex_recolored(vertex, VertexState::Default);
        }
    }

    pub fn store(&self) -> &GraphStore {
        &self.store
    }

    pub fn pending_selection(&self) -> Option<VertexId> {
        self.selection.pending()
    }

    pub fn traversal(&self) -> Option<&Traversal> {
        self.traversal.as_ref()
    }

    pub fn is_traversing(&self) -> bool {
        self.traversal.is_some()
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn into_parts(self) -> (C, S, N) {
        (self.canvas, self.scheduler, self.notifier)
    }
}
