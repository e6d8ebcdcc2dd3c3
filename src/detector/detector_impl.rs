use std::collections::HashMap;

use crate::core::VertexId;
use crate::graph::GraphStore;

/// Whether any connected component of `store` contains a cycle
pub fn has_cycle(store: &GraphStore) -> bool {
    search(store).cycle.is_some()
}

/// Detector for finding a cycle in the undirected graph
///
/// Holds the result of the last [`CycleDetector::detect_cycles`] call. The
/// store is only read, so detection can run any number of times.
#[derive(Debug, Default)]
pub struct CycleDetector {
    cycle: Vec<VertexId>,
    components_checked: usize,
}

impl CycleDetector {
    /// Create a new cycle detector
    pub fn new() -> Self {
        Self::default()
    }

    /// Search every component of the graph, keeping the first cycle found
    pub fn detect_cycles(&mut self, store: &GraphStore) {
        let outcome = search(store);
        self.cycle = outcome.cycle.unwrap_or_default();
        self.components_checked = outcome.components_checked;
    }

    /// Check if a cycle was detected
    pub fn has_cycles(&self) -> bool {
        !self.cycle.is_empty()
    }

    /// The detected cycle as a vertex path; the last vertex connects back to
    /// the first. Empty when the graph is acyclic.
    pub fn cycle(&self) -> &[VertexId] {
        &self.cycle
    }

    /// The edge whose discovery proved the cycle
    pub fn closing_edge(&self) -> Option<(VertexId, VertexId)> {
        match (self.cycle.first(), self.cycle.last()) {
            (Some(&first), Some(&last)) => Some((last, first)),
            _ => None,
        }
    }

    /// Number of connected components searched before stopping
    pub fn components_checked(&self) -> usize {
        self.components_checked
    }
}

struct SearchOutcome {
    cycle: Option<Vec<VertexId>>,
    components_checked: usize,
}

fn search(store: &GraphStore) -> SearchOutcome {
    // Arrival parent of every discovered vertex; also serves as the visited set
    let mut parents: HashMap<VertexId, Option<VertexId>> = HashMap::new();
    let mut components_checked = 0;

    for root in store.vertices() {
        if parents.contains_key(&root) {
            continue;
        }
        components_checked += 1;
        parents.insert(root, None);

        let mut stack = vec![(root, store.neighbors(root))];
        while let Some((vertex, neighbors)) = stack.last_mut() {
            let vertex = *vertex;
            let Some(next) = neighbors.next() else {
                stack.pop();
                continue;
            };

            match parents.get(&next) {
                None => {
                    parents.insert(next, Some(vertex));
                    stack.push((next, store.neighbors(next)));
                }
                Some(_) if parents.get(&vertex).copied().flatten() == Some(next) => {}
                Some(_) => {
                    return SearchOutcome {
                        cycle: Some(trace_cycle(&parents, vertex, next)),
                        components_checked,
                    };
                }
            }
        }
    }

    SearchOutcome {
        cycle: None,
        components_checked,
    }
}

/// Walk parent links from `from` up to `ancestor`, returning the path in
/// ancestor-first order
fn trace_cycle(
    parents: &HashMap<VertexId, Option<VertexId>>,
    from: VertexId,
    ancestor: VertexId,
) -> Vec<VertexId> {
    let mut path = vec![from];
    let mut current = from;
    while current != ancestor {
        match parents.get(&current).copied().flatten() {
            Some(parent) => {
                path.push(parent);
                current = parent;
            }
            None => break,
        }
    }
    path.reverse();
    path
}
