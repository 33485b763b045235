//! Weighted undirected graph storage.

use std::collections::HashMap;
use std::hash::Hash;

use rv_core::{Real, RvError, RvResult, ensure_finite};

/// Routing cost of an edge stored without an explicit weight.
pub const DEFAULT_EDGE_COST: Real = 1.0;

/// One direction of a stored undirected edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct HalfEdge {
    pub(crate) to: usize,
    pub(crate) weight: Option<Real>,
}

/// A weighted undirected graph over caller-supplied node identifiers.
///
/// Node identifiers are opaque keys (anything `Clone + Eq + Hash`); the
/// graph assigns no meaning to them beyond identity. Edges are unordered
/// pairs with an optional weight; an edge stored without a weight is
/// distinct from one weighing 0.0 and costs [`DEFAULT_EDGE_COST`] in the
/// routing metric.
///
/// Invariants:
/// - adding an edge creates missing endpoints implicitly
/// - at most one edge per unordered pair (re-adding overwrites the weight)
/// - self-loops are stored but never appear on a shortest path
///
/// There are no deletion operations. Mutation is single-threaded; wrap the
/// graph in a lock if shared access is ever needed.
#[derive(Debug, Clone)]
pub struct WeightedGraph<N> {
    /// Node keys in insertion order.
    keys: Vec<N>,
    /// Reverse lookup: key -> dense index into `keys`/`adj`.
    index: HashMap<N, usize>,
    /// Adjacency: for node i, the half-edges leaving it.
    adj: Vec<Vec<HalfEdge>>,
    edge_count: usize,
}

impl<N> Default for WeightedGraph<N> {
    fn default() -> Self {
        Self {
            keys: Vec::new(),
            index: HashMap::new(),
            adj: Vec::new(),
            edge_count: 0,
        }
    }
}

impl<N: Clone + Eq + Hash> WeightedGraph<N> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node. Idempotent: re-adding an existing identifier is a
    /// no-op.
    pub fn add_node(&mut self, id: N) {
        self.intern(id);
    }

    /// Insert an undirected edge with the given weight.
    ///
    /// Missing endpoints are created implicitly. If the edge already
    /// exists its weight is overwritten. Self-loops (`u == v`) are
    /// permitted.
    pub fn add_edge(&mut self, u: N, v: N, weight: Real) {
        self.insert_edge(u, v, Some(weight));
    }

    /// Insert an undirected edge with no explicit weight.
    ///
    /// The edge participates in routing with cost [`DEFAULT_EDGE_COST`];
    /// this is distinct from an explicit weight of 0.0.
    pub fn add_unweighted_edge(&mut self, u: N, v: N) {
        self.insert_edge(u, v, None);
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.keys.len()
    }

    /// Number of edges (each unordered pair counted once).
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn contains_node(&self, id: &N) -> bool {
        self.index.contains_key(id)
    }

    /// Iterate over node identifiers in insertion order.
    ///
    /// Insertion order is stable but not a semantic guarantee.
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.keys.iter()
    }

    /// Neighbors of a node with their stored weights, in edge insertion
    /// order. `None` if the node is not in the graph.
    pub fn neighbors(&self, id: &N) -> Option<impl Iterator<Item = (&N, Option<Real>)>> {
        let &i = self.index.get(id)?;
        Some(self.adj[i].iter().map(|h| (&self.keys[h.to], h.weight)))
    }

    /// Stored weight of the edge {u, v}.
    ///
    /// `Some(None)` means the edge exists but carries no explicit weight;
    /// `None` means there is no such edge.
    pub fn edge_weight(&self, u: &N, v: &N) -> Option<Option<Real>> {
        let &ui = self.index.get(u)?;
        let &vi = self.index.get(v)?;
        self.adj[ui].iter().find(|h| h.to == vi).map(|h| h.weight)
    }

    /// Iterate over all edges, each reported once with endpoints in
    /// insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&N, &N, Option<Real>)> {
        self.adj.iter().enumerate().flat_map(move |(ui, halves)| {
            halves
                .iter()
                .filter(move |h| h.to >= ui)
                .map(move |h| (&self.keys[ui], &self.keys[h.to], h.weight))
        })
    }

    /// Total routing cost along a path of consecutive stored edges.
    ///
    /// Unweighted edges contribute [`DEFAULT_EDGE_COST`]. Fails with
    /// `InvalidArg` for an empty path, a path node absent from the graph,
    /// or a consecutive pair that is not a stored edge.
    pub fn path_cost(&self, path: &[N]) -> RvResult<Real> {
        if path.is_empty() {
            return Err(RvError::InvalidArg { what: "empty path" });
        }
        if !self.contains_node(&path[0]) {
            return Err(RvError::InvalidArg {
                what: "path node not in graph",
            });
        }
        let mut total = 0.0;
        for pair in path.windows(2) {
            match self.edge_weight(&pair[0], &pair[1]) {
                Some(weight) => total += weight.unwrap_or(DEFAULT_EDGE_COST),
                None => {
                    return Err(RvError::InvalidArg {
                        what: "path pair is not a stored edge",
                    });
                }
            }
        }
        ensure_finite(total, "path cost")
    }

    /// Dense index of a node key, if present.
    pub(crate) fn index_of(&self, id: &N) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Node key at a dense index.
    pub(crate) fn key(&self, i: usize) -> &N {
        &self.keys[i]
    }

    /// Half-edges leaving a dense index.
    pub(crate) fn half_edges(&self, i: usize) -> &[HalfEdge] {
        &self.adj[i]
    }

    /// Look up or create the dense index for a key.
    fn intern(&mut self, id: N) -> usize {
        if let Some(&i) = self.index.get(&id) {
            return i;
        }
        let i = self.keys.len();
        self.index.insert(id.clone(), i);
        self.keys.push(id);
        self.adj.push(Vec::new());
        i
    }

    fn insert_edge(&mut self, u: N, v: N, weight: Option<Real>) {
        let ui = self.intern(u);
        let vi = self.intern(v);

        // Overwrite an existing edge in place (both directions).
        if let Some(half) = self.adj[ui].iter_mut().find(|h| h.to == vi) {
            half.weight = weight;
            if ui != vi {
                if let Some(back) = self.adj[vi].iter_mut().find(|h| h.to == ui) {
                    back.weight = weight;
                }
            }
            return;
        }

        self.adj[ui].push(HalfEdge { to: vi, weight });
        if ui != vi {
            self.adj[vi].push(HalfEdge { to: ui, weight });
        }
        self.edge_count += 1;
    }
}
