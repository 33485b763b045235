//! Routing error types.

use thiserror::Error;

/// Failure outcomes of a shortest-path query.
///
/// Both are ordinary data outcomes the caller can branch on; neither is
/// fatal. User-facing message formatting belongs to the driver, not here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError<N>
where
    N: std::fmt::Debug + std::fmt::Display,
{
    /// The query referenced an identifier absent from the graph.
    #[error("node {0} not found in graph")]
    NodeNotFound(N),

    /// Both endpoints exist but lie in different connected components.
    #[error("no route between {start} and {end}")]
    NoRoute { start: N, end: N },
}
