//! rv-graph: weighted undirected graph core for routeviz.
//!
//! Provides:
//! - `WeightedGraph<N>`: node/edge storage over caller-supplied identifiers
//! - Dijkstra shortest-path routing with structured failure results
//!
//! # Example
//!
//! ```
//! use rv_graph::WeightedGraph;
//!
//! let mut graph = WeightedGraph::new();
//! graph.add_edge(1, 3, 3.2);
//! graph.add_edge(3, 5, 2.7);
//! graph.add_edge(1, 5, 6.7);
//!
//! let path = graph.shortest_path(&1, &5).unwrap();
//! assert_eq!(path, vec![1, 3, 5]);
//! ```

pub mod error;
pub mod graph;
pub mod route;

// Re-exports for ergonomics
pub use error::RouteError;
pub use graph::{DEFAULT_EDGE_COST, WeightedGraph};
pub use route::shortest_path;
