use std::io::Write;

use miette::Result;

use crate::core::VertexId;
use crate::error::GraphAnalyzerError;
use crate::graph::GraphStore;

// Light blue vertices as on the canvas, orange for the highlighted cycle
mod colors {
    pub const NORMAL_NODE_FILL: &str = "#ADD8E6"; // Light blue
    pub const NORMAL_NODE_STROKE: &str = "#000000"; // Black outline
    pub const CYCLE_NODE_FILL: &str = "#FFF3E0"; // Light orange
    pub const CYCLE_NODE_STROKE: &str = "#F57C00"; // Vibrant orange
    pub const NORMAL_EDGE: &str = "#000000";
    pub const CYCLE_EDGE: &str = "#FF6500"; // Deep orange
}

// Helper macro for write operations that converts IO errors
macro_rules! writeln_out {
    ($dst:expr) => {
        writeln!($dst).map_err(GraphAnalyzerError::from)
    };
    ($dst:expr, $($arg:tt)*) => {
        writeln!($dst, $($arg)*).map_err(GraphAnalyzerError::from)
    };
}

/// Draws a [`GraphStore`] as text
///
/// `cycle` is a witness cycle as reported by
/// [`crate::detector::CycleDetector::cycle`]; pass an empty slice when there
/// is nothing to highlight.
pub struct GraphRenderer {
    highlight_cycles: bool,
}

impl GraphRenderer {
    pub fn new(highlight_cycles: bool) -> Self {
        Self { highlight_cycles }
    }

    pub fn render_ascii(
        &self,
        store: &GraphStore,
        cycle: &[VertexId],
        output: &mut dyn Write,
    ) -> Result<()> {
        if store.is_empty() {
            writeln_out!(output, "No vertices to visualize")?;
            return Ok(());
        }

        writeln_out!(output, "\n🕸  Undirected Graph\n")?;

        for vertex in store.vertices() {
            let in_cycle = self.highlight_cycles && cycle.contains(&vertex);

            if in_cycle {
                writeln_out!(output, "┌───────────────────────┐")?;
                writeln_out!(output, "│ {} ⚠️  IN CYCLE", vertex)?;
                writeln_out!(output, "└───────────────────────┘")?;
            } else {
                writeln_out!(output, "{}", vertex)?;
            }

            let neighbors: Vec<VertexId> = store.neighbors(vertex).collect();
            if neighbors.is_empty() {
                writeln_out!(output, "  └── (isolated)")?;
            }

            for (i, neighbor) in neighbors.iter().enumerate() {
                let prefix = if i == neighbors.len() - 1 {
                    "└──"
                } else {
                    "├──"
                };
                let marker = if self.highlight_cycles && is_edge_in_cycle(vertex, *neighbor, cycle)
                {
                    " ⚠️  [CYCLE]"
                } else {
                    ""
                };
                writeln_out!(output, "  {} ── {}{}", prefix, neighbor, marker)?;
            }

            writeln_out!(output)?;
        }

        if self.highlight_cycles && !cycle.is_empty() {
            writeln_out!(output, "⚠️  = Part of a cycle")?;
        }

        Ok(())
    }

    pub fn render_mermaid(
        &self,
        store: &GraphStore,
        cycle: &[VertexId],
        output: &mut dyn Write,
    ) -> Result<()> {
        writeln_out!(output, "graph LR")?;

        for vertex in store.vertices() {
            writeln_out!(output, "    {}((\"{}\"))", vertex, vertex)?;

            let (fill, stroke, width) = if self.highlight_cycles && cycle.contains(&vertex) {
                (colors::CYCLE_NODE_FILL, colors::CYCLE_NODE_STROKE, 3)
            } else {
                (colors::NORMAL_NODE_FILL, colors::NORMAL_NODE_STROKE, 2)
            };
            writeln_out!(
                output,
                "    style {} fill:{},stroke:{},stroke-width:{}px",
                vertex,
                fill,
                stroke,
                width
            )?;
        }

        writeln_out!(output)?;

        for (link_style_index, (a, b)) in store.edges().enumerate() {
            writeln_out!(output, "    {} --- {}", a, b)?;

            if self.highlight_cycles && is_edge_in_cycle(a, b, cycle) {
                writeln_out!(
                    output,
                    "    linkStyle {} stroke:{},stroke-width:3px",
                    link_style_index,
                    colors::CYCLE_EDGE
                )?;
            }
        }

        Ok(())
    }

    pub fn render_dot(
        &self,
        store: &GraphStore,
        cycle: &[VertexId],
        output: &mut dyn Write,
    ) -> Result<()> {
        writeln_out!(output, "graph undirected_graph {{")?;
        writeln_out!(output, "    node [shape=circle, style=filled];")?;
        writeln_out!(output)?;

        for vertex in store.vertices() {
            let (fill_color, stroke_color) = if self.highlight_cycles && cycle.contains(&vertex) {
                (colors::CYCLE_NODE_FILL, colors::CYCLE_NODE_STROKE)
            } else {
                (colors::NORMAL_NODE_FILL, colors::NORMAL_NODE_STROKE)
            };

            writeln_out!(
                output,
                r#"    "{}" [fillcolor="{}", color="{}", penwidth=2];"#,
                vertex,
                fill_color,
                stroke_color
            )?;
        }

        writeln_out!(output)?;

        for (a, b) in store.edges() {
            if self.highlight_cycles && is_edge_in_cycle(a, b, cycle) {
                writeln_out!(
                    output,
                    r#"    "{}" -- "{}" [color="{}", penwidth=3];"#,
                    a,
                    b,
                    colors::CYCLE_EDGE
                )?;
            } else {
                writeln_out!(
                    output,
                    r#"    "{}" -- "{}" [color="{}", penwidth=2];"#,
                    a,
                    b,
                    colors::NORMAL_EDGE
                )?;
            }
        }

        writeln_out!(output, "}}")?;
        Ok(())
    }
}

/// Whether `a` and `b` are adjacent on the closed walk `cycle`
fn is_edge_in_cycle(a: VertexId, b: VertexId, cycle: &[VertexId]) -> bool {
    if cycle.len() < 3 {
        return false;
    }
    cycle
        .iter()
        .zip(cycle.iter().cycle().skip(1))
        .any(|(&x, &y)| (x == a && y == b) || (x == b && y == a))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl Fn(&GraphRenderer, &mut Vec<u8>) -> Result<()>) -> String {
        let renderer = GraphRenderer::new(true);
        let mut output = Vec::new();
        f(&renderer, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    fn triangle_with_tail() -> (GraphStore, Vec<VertexId>) {
        let mut store = GraphStore::new();
        let ids: Vec<_> = (0..4).map(|_| store.add_vertex()).collect();
        store.connect(ids[0], ids[1]);
        store.connect(ids[1], ids[2]);
        store.connect(ids[2], ids[0]);
        store.connect(ids[2], ids[3]);
        (store, ids)
    }

    #[test]
    fn test_edge_in_cycle_wraps_around() {
        let cycle = [VertexId::new(0), VertexId::new(1), VertexId::new(2)];
        assert!(is_edge_in_cycle(VertexId::new(0), VertexId::new(1), &cycle));
        assert!(is_edge_in_cycle(VertexId::new(0), VertexId::new(2), &cycle));
        assert!(is_edge_in_cycle(VertexId::new(2), VertexId::new(1), &cycle));
        assert!(!is_edge_in_cycle(VertexId::new(2), VertexId::new(3), &cycle));
        assert!(!is_edge_in_cycle(VertexId::new(0), VertexId::new(1), &[]));
    }

    #[test]
    fn test_ascii_empty_graph() {
        let store = GraphStore::new();
        let output = render(|r, out| r.render_ascii(&store, &[], out));
        assert!(output.contains("No vertices to visualize"));
    }

    #[test]
    fn test_ascii_marks_cycle() {
        let (store, ids) = triangle_with_tail();
        let cycle = &ids[..3];
        let output = render(|r, out| r.render_ascii(&store, cycle, out));

        assert!(output.contains("│ V0 ⚠️  IN CYCLE"));
        assert!(output.contains("── V1 ⚠️  [CYCLE]"));
        assert!(output.contains("└── ── V3\n"));
        assert!(output.contains("⚠️  = Part of a cycle"));
    }

    #[test]
    fn test_ascii_without_highlighting() {
        let (store, ids) = triangle_with_tail();
        let renderer = GraphRenderer::new(false);
        let mut output = Vec::new();
        renderer.render_ascii(&store, &ids[..3], &mut output).unwrap();
        let output = String::from_utf8(output).unwrap();

        assert!(!output.contains("CYCLE"));
        assert!(output.contains("V3\n  └── ── V2"));
    }

    #[test]
    fn test_dot_output() {
        let (store, ids) = triangle_with_tail();
        let output = render(|r, out| r.render_dot(&store, &ids[..3], out));

        assert!(output.starts_with("graph undirected_graph {"));
        assert!(output.contains(r##""V0" -- "V1" [color="#FF6500", penwidth=3];"##));
        assert!(output.contains(r##""V2" -- "V3" [color="#000000", penwidth=2];"##));
        assert!(output.contains(r##""V3" [fillcolor="#ADD8E6""##));
        assert!(output.trim_end().ends_with('}'));
    }

    #[test]
    fn test_mermaid_output() {
        let (store, ids) = triangle_with_tail();
        let output = render(|r, out| r.render_mermaid(&store, &ids[..3], out));

        assert!(output.starts_with("graph LR"));
        assert!(output.contains("V0((\"V0\"))"));
        assert!(output.contains("V2 --- V3"));
        // edges 0..=2 form the triangle, edge 3 is the tail
        assert!(output.contains("linkStyle 0 stroke:#FF6500"));
        assert!(output.contains("linkStyle 2 stroke:#FF6500"));
        assert!(!output.contains("linkStyle 3"));
    }
}
