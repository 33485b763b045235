//! Dijkstra shortest-path routing.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

use rv_core::Real;

use crate::error::RouteError;
use crate::graph::{DEFAULT_EDGE_COST, WeightedGraph};

/// Heap entry ordered so the smallest cost pops first; equal costs break
/// toward the earlier-inserted node.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Visit {
    cost: Real,
    node: usize,
}

impl Eq for Visit {}

impl Ord for Visit {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap.
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for Visit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Compute the minimum-total-cost path from `start` to `end`.
///
/// Edge cost is the stored weight, or [`DEFAULT_EDGE_COST`] for an edge
/// stored without one. Weights are assumed finite and non-negative;
/// ingestion layers enforce this before graphs reach the router.
///
/// Outcomes:
/// - `start` absent: `NodeNotFound(start)` (checked before `end`, so
///   `start` is the one reported when both are missing)
/// - `end` absent: `NodeNotFound(end)`
/// - `start == end`: the degenerate single-node path `[start]`
/// - no connection: `NoRoute`
/// - otherwise the node sequence from `start` to `end` inclusive
///
/// Equal-cost ties resolve toward earlier-inserted nodes. That keeps
/// results reproducible for tests but is not a semantic contract.
pub fn shortest_path<N>(
    graph: &WeightedGraph<N>,
    start: &N,
    end: &N,
) -> Result<Vec<N>, RouteError<N>>
where
    N: Clone + Eq + Hash + std::fmt::Debug + std::fmt::Display,
{
    let Some(s) = graph.index_of(start) else {
        return Err(RouteError::NodeNotFound(start.clone()));
    };
    let Some(t) = graph.index_of(end) else {
        return Err(RouteError::NodeNotFound(end.clone()));
    };
    if s == t {
        return Ok(vec![start.clone()]);
    }

    let n = graph.node_count();
    let mut dist = vec![Real::INFINITY; n];
    let mut prev: Vec<Option<usize>> = vec![None; n];
    let mut settled = vec![false; n];
    let mut heap = BinaryHeap::new();

    dist[s] = 0.0;
    heap.push(Visit { cost: 0.0, node: s });

    while let Some(Visit { cost, node }) = heap.pop() {
        if settled[node] {
            continue; // stale entry
        }
        settled[node] = true;
        if node == t {
            break;
        }
        for half in graph.half_edges(node) {
            if settled[half.to] {
                continue;
            }
            let next = cost + half.weight.unwrap_or(DEFAULT_EDGE_COST);
            if next < dist[half.to] {
                dist[half.to] = next;
                prev[half.to] = Some(node);
                heap.push(Visit {
                    cost: next,
                    node: half.to,
                });
            }
        }
    }

    if !settled[t] {
        return Err(RouteError::NoRoute {
            start: start.clone(),
            end: end.clone(),
        });
    }

    // Walk predecessors back from the target.
    let mut order = vec![t];
    let mut cur = t;
    while let Some(p) = prev[cur] {
        order.push(p);
        cur = p;
    }
    order.reverse();
    Ok(order.into_iter().map(|i| graph.key(i).clone()).collect())
}

impl<N> WeightedGraph<N>
where
    N: Clone + Eq + Hash + std::fmt::Debug + std::fmt::Display,
{
    /// See [`shortest_path`].
    pub fn shortest_path(&self, start: &N, end: &N) -> Result<Vec<N>, RouteError<N>> {
        shortest_path(self, start, end)
    }
}
