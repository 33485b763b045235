//! Read-only graph snapshots for rendering collaborators.

use std::fmt::Display;
use std::hash::Hash;

use rv_core::Real;
use rv_graph::WeightedGraph;
use serde::{Deserialize, Serialize};

/// One edge of a snapshot, endpoints as display labels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EdgeView {
    pub u: String,
    pub v: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<Real>,
}

/// Read-only view of a graph handed to rendering collaborators.
///
/// Carries node labels (insertion order), edges with their stored
/// weights, and an optional highlighted route as an ordered label
/// sequence. The snapshot is a one-way copy: renderers never mutate
/// the graph through it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GraphSnapshot {
    pub nodes: Vec<String>,
    pub edges: Vec<EdgeView>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<Vec<String>>,
}

impl GraphSnapshot {
    /// Capture the current node/edge/weight state of a graph.
    pub fn from_graph<N>(graph: &WeightedGraph<N>) -> Self
    where
        N: Clone + Eq + Hash + Display,
    {
        Self {
            nodes: graph.nodes().map(|n| n.to_string()).collect(),
            edges: graph
                .edges()
                .map(|(u, v, weight)| EdgeView {
                    u: u.to_string(),
                    v: v.to_string(),
                    weight,
                })
                .collect(),
            route: None,
        }
    }

    /// Attach a highlighted route (ordered node labels).
    pub fn with_route<N: Display>(mut self, route: &[N]) -> Self {
        self.route = Some(route.iter().map(|n| n.to_string()).collect());
        self
    }
}
