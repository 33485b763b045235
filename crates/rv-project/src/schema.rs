//! Project file schema definitions.

use rv_core::Real;
use serde::{Deserialize, Serialize};

/// Latest supported project file version.
pub const LATEST_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub graphs: Vec<GraphDef>,
}

/// One graph described in a project file.
///
/// Node identifiers are strings at the file boundary; edge endpoints not
/// listed under `nodes` are created implicitly when the graph is built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GraphDef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub nodes: Vec<NodeDef>,
    #[serde(default)]
    pub edges: Vec<EdgeDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NodeDef {
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EdgeDef {
    pub u: String,
    pub v: String,
    /// Omitted weight means the edge routes at unit cost.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<Real>,
}
