//! Project validation logic.

use std::collections::HashSet;

use crate::schema::{GraphDef, LATEST_VERSION, Project};

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_project(project: &Project) -> Result<(), ValidationError> {
    if project.version == 0 || project.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: project.version,
        });
    }

    let mut graph_ids = HashSet::new();
    for graph in &project.graphs {
        if !graph_ids.insert(&graph.id) {
            return Err(ValidationError::DuplicateId {
                id: graph.id.clone(),
                context: "graphs".to_string(),
            });
        }
        validate_graph(graph)?;
    }

    Ok(())
}

fn validate_graph(graph: &GraphDef) -> Result<(), ValidationError> {
    let mut node_ids = HashSet::new();
    for node in &graph.nodes {
        if !node_ids.insert(&node.id) {
            return Err(ValidationError::DuplicateId {
                id: node.id.clone(),
                context: format!("graph '{}' nodes", graph.id),
            });
        }
    }

    // Edge endpoints may reference undeclared nodes (created implicitly),
    // but weights must satisfy the router's precondition.
    for (i, edge) in graph.edges.iter().enumerate() {
        if let Some(weight) = edge.weight {
            let field = format!("graph '{}' edges[{}].weight", graph.id, i);
            if !weight.is_finite() {
                return Err(ValidationError::InvalidValue {
                    field,
                    value: weight.to_string(),
                    reason: "must be finite".to_string(),
                });
            }
            if weight < 0.0 {
                return Err(ValidationError::InvalidValue {
                    field,
                    value: weight.to_string(),
                    reason: "shortest-path weights must be non-negative".to_string(),
                });
            }
        }
    }

    Ok(())
}
