//! Two-click edge creation

use crate::core::VertexId;
use crate::graph::GraphStore;

/// What a vertex click did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// First click of a pair: the vertex is now pending
    Selected(VertexId),
    /// Second click of a pair: one edge creation was attempted
    EdgeAttempted {
        from: VertexId,
        to: VertexId,
        created: bool,
    },
}

/// Tracks the vertex waiting for a second click
#[derive(Debug, Default)]
pub struct SelectionController {
    pending: Option<VertexId>,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a click on `vertex`.
    ///
    /// The second click always consumes the pending vertex, whether or not
    /// the store accepted the edge (self-clicks and duplicates are no-ops
    /// there).
    pub fn on_vertex_clicked(&mut self, vertex: VertexId, store: &mut GraphStore) -> SelectionOutcome {
        match self.pending.take() {
            None => {
                self.pending = Some(vertex);
                SelectionOutcome::Selected(vertex)
            }
            Some(from) => SelectionOutcome::EdgeAttempted {
                from,
                to: vertex,
                created: store.connect(from, vertex),
            },
        }
    }

    pub fn pending(&self) -> Option<VertexId> {
        self.pending
    }

    pub fn reset(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (SelectionController, GraphStore, VertexId, VertexId) {
        let mut store = GraphStore::new();
        let a = store.add_vertex();
        let b = store.add_vertex();
        (SelectionController::new(), store, a, b)
    }

    #[test]
    fn test_first_click_only_selects() {
        let (mut selection, mut store, a, _) = setup();

        assert_eq!(
            selection.on_vertex_clicked(a, &mut store),
            SelectionOutcome::Selected(a)
        );
        assert_eq!(selection.pending(), Some(a));
        assert_eq!(store.edge_count(), 0);
    }

    #[test]
    fn test_second_click_connects_and_clears() {
        let (mut selection, mut store, a, b) = setup();

        selection.on_vertex_clicked(a, &mut store);
        assert_eq!(
            selection.on_vertex_clicked(b, &mut store),
            SelectionOutcome::EdgeAttempted {
                from: a,
                to: b,
                created: true
            }
        );
        assert_eq!(selection.pending(), None);
        assert!(store.are_connected(a, b));
    }

    #[test]
    fn test_clicking_same_vertex_twice_consumes_selection() {
        let (mut selection, mut store, a, _) = setup();

        selection.on_vertex_clicked(a, &mut store);
        assert_eq!(
            selection.on_vertex_clicked(a, &mut store),
            SelectionOutcome::EdgeAttempted {
                from: a,
                to: a,
                created: false
            }
        );
        assert_eq!(selection.pending(), None);
        assert_eq!(store.edge_count(), 0);
    }

    #[test]
    fn test_duplicate_edge_still_consumes_selection() {
        let (mut selection, mut store, a, b) = setup();
        store.connect(a, b);

        selection.on_vertex_clicked(b, &mut store);
        let outcome = selection.on_vertex_clicked(a, &mut store);

        assert_eq!(
            outcome,
            SelectionOutcome::EdgeAttempted {
                from: b,
                to: a,
                created: false
            }
        );
        assert_eq!(selection.pending(), None);
        assert_eq!(store.edge_count(), 1);
    }

    #[test]
    fn test_pairs_alternate() {
        let (mut selection, mut store, a, b) = setup();
        let c = store.add_vertex();

        let outcomes: Vec<_> = [a, b, b, c, c]
            .into_iter()
            .map(|v| selection.on_vertex_clicked(v, &mut store))
            .collect();

        assert!(matches!(outcomes[0], SelectionOutcome::Selected(_)));
        assert!(matches!(outcomes[1], SelectionOutcome::EdgeAttempted { created: true, .. }));
        assert!(matches!(outcomes[2], SelectionOutcome::Selected(_)));
        assert!(matches!(outcomes[3], SelectionOutcome::EdgeAttempted { created: true, .. }));
        assert_eq!(outcomes[4], SelectionOutcome::Selected(c));
        assert_eq!(store.edge_count(), 2);
    }

    #[test]
    fn test_reset_drops_pending() {
        let (mut selection, mut store, a, b) = setup();
        selection.on_vertex_clicked(a, &mut store);
        selection.reset();

        assert_eq!(
            selection.on_vertex_clicked(b, &mut store),
            SelectionOutcome::Selected(b)
        );
    }
}
