//! rv-render: read-only snapshots and Graphviz output for routeviz graphs.
//!
//! Rendering consumes a [`GraphSnapshot`] — node labels, edges with
//! optional weights, and an optional highlighted route — and produces
//! either Graphviz DOT text or a JSON export. Nothing flows back into
//! the graph; layout is left to the consumer.

pub mod dot;
pub mod snapshot;

pub use dot::to_dot;
pub use snapshot::{EdgeView, GraphSnapshot};

pub type RenderResult<T> = Result<T, RenderError>;

#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serialize a snapshot to pretty-printed JSON for external renderers.
pub fn to_json(snapshot: &GraphSnapshot) -> RenderResult<String> {
    Ok(serde_json::to_string_pretty(snapshot)?)
}
