use std::time::Duration;

use crate::core::{Notice, Point, VertexId, VertexState};

/// Drawing surface that mirrors the session's graph
pub trait Canvas {
    fn vertex_added(&mut self, id: VertexId, position: Point);

    fn edge_added(&mut self, from: VertexId, to: VertexId);

    fn canvas_cleared(&mut self);

    fn vertex_recolored(&mut self, id: VertexId, state: VertexState);
}

/// Periodic tick source pacing a traversal
pub trait Scheduler {
    fn start(&mut self, interval: Duration);

    fn stop(&mut self);

    fn is_running(&self) -> bool;

    /// Block until the next tick is due. Returns `false` once stopped.
    fn wait_for_tick(&mut self) -> bool;
}

/// Sink for user-facing outcomes
pub trait Notifier {
    fn notify(&mut self, notice: Notice);
}
