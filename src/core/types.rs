//! Core type definitions
//!
//! This module contains the basic data structures shared by the graph store,
//! the algorithms and the collaborators, with minimal logic - focusing on
//! data representation.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::constants::vertex::LABEL_PREFIX;

/// Identifier of a vertex, displayed as `V0`, `V1`, ...
///
/// Ids are handed out by [`crate::graph::GraphStore::add_vertex`] from an
/// incrementing counter and are never reused within a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(u32);

impl VertexId {
    pub fn new(index: u32) -> Self {
        Self(index)
    }

    pub fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{LABEL_PREFIX}{}", self.0)
    }
}

/// Error returned when a string is not a `V<n>` vertex label
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a vertex label (expected something like V0)")]
pub struct InvalidVertexLabel(pub String);

impl FromStr for VertexId {
    type Err = InvalidVertexLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix(LABEL_PREFIX)
            .or_else(|| trimmed.strip_prefix(&LABEL_PREFIX.to_lowercase()))
            .ok_or_else(|| InvalidVertexLabel(s.to_string()))?;

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidVertexLabel(s.to_string()));
        }

        digits
            .parse::<u32>()
            .map(VertexId)
            .map_err(|_| InvalidVertexLabel(s.to_string()))
    }
}

impl Serialize for VertexId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A position on the drawing surface, as reported by the input collaborator
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Frontier discipline of a traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalKind {
    DepthFirst,
    BreadthFirst,
}

impl TraversalKind {
    pub fn short_name(self) -> &'static str {
        match self {
            TraversalKind::DepthFirst => "dfs",
            TraversalKind::BreadthFirst => "bfs",
        }
    }
}

impl fmt::Display for TraversalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraversalKind::DepthFirst => write!(f, "depth-first"),
            TraversalKind::BreadthFirst => write!(f, "breadth-first"),
        }
    }
}

/// Visual state of a vertex as seen by the rendering collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VertexState {
    #[default]
    Default,
    Visiting(TraversalKind),
}

/// Outcome of a single traversal tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    /// The vertex was finalized on this tick
    Visited(VertexId),
    /// The popped vertex had already been visited; nothing happened
    Skipped(VertexId),
    /// The frontier is empty; no more ticks should occur
    Done,
}

impl StepResult {
    pub fn is_done(&self) -> bool {
        matches!(self, StepResult::Done)
    }
}

/// What a finished traversal did, handed to the notifier on completion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraversalSummary {
    #[serde(serialize_with = "serialize_kind")]
    pub kind: TraversalKind,
    pub order: Vec<VertexId>,
    pub skipped_steps: usize,
}

fn serialize_kind<S: Serializer>(kind: &TraversalKind, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(kind.short_name())
}

/// User-facing outcomes surfaced through the notifier collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Notice {
    EmptyGraph,
    TraversalComplete(TraversalSummary),
    /// `cycle` is the witness path when one was found, empty otherwise
    CycleCheck { has_cycle: bool, cycle: Vec<VertexId> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_label_display() {
        assert_eq!(VertexId::new(0).to_string(), "V0");
        assert_eq!(VertexId::new(42).to_string(), "V42");
    }

    #[test]
    fn test_vertex_label_parse() {
        assert_eq!("V7".parse::<VertexId>(), Ok(VertexId::new(7)));
        assert_eq!("v12".parse::<VertexId>(), Ok(VertexId::new(12)));
        assert_eq!(" V3 ".parse::<VertexId>(), Ok(VertexId::new(3)));
        assert!("X1".parse::<VertexId>().is_err());
        assert!("V".parse::<VertexId>().is_err());
        assert!("V-1".parse::<VertexId>().is_err());
        assert!("V+3".parse::<VertexId>().is_err());
        assert!("V 3".parse::<VertexId>().is_err());
        assert!("V3.0".parse::<VertexId>().is_err());
    }

    #[test]
    fn test_vertex_serializes_as_label() {
        let json = serde_json::to_string(&VertexId::new(5)).unwrap();
        assert_eq!(json, "\"V5\"");
    }

    #[test]
    fn test_summary_serialization() {
        let summary = TraversalSummary {
            kind: TraversalKind::BreadthFirst,
            order: vec![VertexId::new(0), VertexId::new(1)],
            skipped_steps: 2,
        };
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["kind"], "bfs");
        assert_eq!(value["order"][1], "V1");
        assert_eq!(value["skipped_steps"], 2);
    }

    #[test]
    fn test_notice_serialization_is_tagged() {
        let value = serde_json::to_value(Notice::CycleCheck {
            has_cycle: true,
            cycle: vec![VertexId::new(0), VertexId::new(1), VertexId::new(2)],
        })
        .unwrap();
        assert_eq!(value["type"], "cycle_check");
        assert_eq!(value["has_cycle"], true);
        assert_eq!(value["cycle"][2], "V2");

        let value = serde_json::to_value(Notice::EmptyGraph).unwrap();
        assert_eq!(value, serde_json::json!({ "type": "empty_graph" }));
    }

    #[test]
    fn test_point_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance_to(&b), 5.0);
    }
}
