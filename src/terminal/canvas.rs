use std::collections::BTreeMap;

use console::style;
use indicatif::MultiProgress;

use crate::constants::vertex::RADIUS;
use crate::core::{Point, VertexId, VertexState};
use crate::session::Canvas;

/// Canvas that keeps vertex geometry in memory and echoes structural changes
/// to stderr
#[derive(Debug)]
pub struct TerminalCanvas {
    output: Option<MultiProgress>,
    positions: BTreeMap<VertexId, Point>,
    states: BTreeMap<VertexId, VertexState>,
}

impl Default for TerminalCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalCanvas {
    pub fn new() -> Self {
        Self {
            output: Some(MultiProgress::new()),
            positions: BTreeMap::new(),
            states: BTreeMap::new(),
        }
    }

    /// Track state without printing anything
    pub fn silent() -> Self {
        Self {
            output: None,
            ..Self::new()
        }
    }

    /// Print through `progress` so lines land above any active bar
    pub fn with_progress(mut self, progress: MultiProgress) -> Self {
        self.output = Some(progress);
        self
    }

    /// The topmost vertex whose circle contains `point`
    pub fn vertex_at(&self, point: Point) -> Option<VertexId> {
        self.positions
            .iter()
            .rev()
            .find(|(_, position)| position.distance_to(&point) <= RADIUS)
            .map(|(id, _)| *id)
    }

    pub fn position(&self, id: VertexId) -> Option<Point> {
        self.positions.get(&id).copied()
    }

    pub fn state(&self, id: VertexId) -> VertexState {
        self.states.get(&id).copied().unwrap_or_default()
    }

    /// Vertices currently drawn in a traversal color
    pub fn highlighted(&self) -> Vec<VertexId> {
        self.states
            .iter()
            .filter(|(_, state)| **state != VertexState::Default)
            .map(|(id, _)| *id)
            .collect()
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    fn echo(&self, line: String) {
        if let Some(ref progress) = self.output {
            progress.suspend(|| eprintln!("{line}"));
        }
    }
}

impl Canvas for TerminalCanvas {
    fn vertex_added(&mut self, id: VertexId, position: Point) {
        self.positions.insert(id, position);
        self.states.insert(id, VertexState::Default);
        self.echo(format!(
            "{} {} placed at {}",
            style("●").cyan(),
            style(id).bold(),
            style(position).dim()
        ));
    }

    fn edge_added(&mut self, from: VertexId, to: VertexId) {
        self.echo(format!(
            "{} {} ── {}",
            style("🔗").cyan(),
            style(from).bold(),
            style(to).bold()
        ));
    }

    fn canvas_cleared(&mut self) {
        self.positions.clear();
        self.states.clear();
        self.echo(format!("{} Canvas cleared", style("🧹").dim()));
    }

    fn vertex_recolored(&mut self, id: VertexId, state: VertexState) {
        if let Some(current) = self.states.get_mut(&id) {
            *current = state;
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::TraversalKind;

    #[test]
    fn test_hit_test_uses_vertex_radius() {
        let mut canvas = TerminalCanvas::silent();
        canvas.vertex_added(VertexId::new(0), Point::new(100.0, 100.0));
        canvas.vertex_added(VertexId::new(1), Point::new(200.0, 100.0));

        assert_eq!(canvas.vertex_at(Point::new(100.0, 100.0)), Some(VertexId::new(0)));
        assert_eq!(canvas.vertex_at(Point::new(110.0, 109.0)), Some(VertexId::new(0)));
        assert_eq!(canvas.vertex_at(Point::new(190.0, 100.0)), Some(VertexId::new(1)));
        assert_eq!(canvas.vertex_at(Point::new(150.0, 100.0)), None);
    }

    #[test]
    fn test_overlapping_vertices_pick_newest() {
        let mut canvas = TerminalCanvas::silent();
        canvas.vertex_added(VertexId::new(0), Point::new(100.0, 100.0));
        canvas.vertex_added(VertexId::new(1), Point::new(110.0, 100.0));

        assert_eq!(canvas.vertex_at(Point::new(105.0, 100.0)), Some(VertexId::new(1)));
    }

    #[test]
    fn test_recolor_and_clear() {
        let mut canvas = TerminalCanvas::silent();
        let a = VertexId::new(0);
        canvas.vertex_added(a, Point::default());
        assert_eq!(canvas.state(a), VertexState::Default);

        canvas.vertex_recolored(a, VertexState::Visiting(TraversalKind::DepthFirst));
        assert_eq!(canvas.highlighted(), vec![a]);

        // unknown vertices are not resurrected
        canvas.vertex_recolored(VertexId::new(9), VertexState::Default);
        assert_eq!(canvas.vertex_count(), 1);

        canvas.canvas_cleared();
        assert_eq!(canvas.vertex_count(), 0);
        assert_eq!(canvas.vertex_at(Point::default()), None);
        assert!(canvas.highlighted().is_empty());
    }
}
