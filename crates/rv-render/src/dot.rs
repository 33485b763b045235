//! Graphviz DOT emission.

use std::fmt::Write;

use crate::snapshot::{EdgeView, GraphSnapshot};

/// Render a snapshot as a Graphviz `graph`.
///
/// Plain nodes are filled sky-blue with gray edges; weighted edges carry
/// their weight as a label. A highlighted route turns its nodes red and
/// its edges red with a heavier pen, leaving the rest of the drawing
/// untouched. Node placement is Graphviz's business.
pub fn to_dot(snapshot: &GraphSnapshot) -> String {
    let route: &[String] = snapshot.route.as_deref().unwrap_or(&[]);
    let mut out = String::new();

    out.push_str("graph {\n");
    out.push_str("    node [style=filled, fillcolor=skyblue];\n");
    out.push_str("    edge [color=gray];\n");

    for node in &snapshot.nodes {
        if route.contains(node) {
            let _ = writeln!(out, "    {} [fillcolor=red];", quote(node));
        } else {
            let _ = writeln!(out, "    {};", quote(node));
        }
    }

    for edge in &snapshot.edges {
        let mut attrs: Vec<String> = Vec::new();
        if let Some(weight) = edge.weight {
            attrs.push(format!("label=\"{weight}\""));
        }
        if on_route(edge, route) {
            attrs.push("color=red".to_string());
            attrs.push("penwidth=3".to_string());
        }
        if attrs.is_empty() {
            let _ = writeln!(out, "    {} -- {};", quote(&edge.u), quote(&edge.v));
        } else {
            let _ = writeln!(
                out,
                "    {} -- {} [{}];",
                quote(&edge.u),
                quote(&edge.v),
                attrs.join(", ")
            );
        }
    }

    out.push_str("}\n");
    out
}

/// Whether an edge joins two consecutive route nodes, in either direction.
fn on_route(edge: &EdgeView, route: &[String]) -> bool {
    route.windows(2).any(|pair| {
        (pair[0] == edge.u && pair[1] == edge.v) || (pair[0] == edge.v && pair[1] == edge.u)
    })
}

/// Quote a label for DOT output.
fn quote(label: &str) -> String {
    format!("\"{}\"", label.replace('\\', "\\\\").replace('"', "\\\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rv_graph::WeightedGraph;

    fn reference_snapshot() -> GraphSnapshot {
        let mut graph = WeightedGraph::new();
        for id in 1..=5 {
            graph.add_node(id);
        }
        graph.add_edge(1, 2, 4.5);
        graph.add_edge(1, 3, 3.2);
        graph.add_edge(2, 4, 2.7);
        graph.add_edge(3, 4, 1.8);
        graph.add_edge(1, 4, 6.7);
        graph.add_edge(3, 5, 2.7);
        GraphSnapshot::from_graph(&graph)
    }

    #[test]
    fn plain_graph_has_default_styling() {
        let dot = to_dot(&reference_snapshot());
        assert!(dot.starts_with("graph {\n"));
        assert!(dot.contains("node [style=filled, fillcolor=skyblue];"));
        assert!(dot.contains("edge [color=gray];"));
        assert!(dot.contains("\"1\" -- \"2\" [label=\"4.5\"];"));
        assert!(!dot.contains("red"));
    }

    #[test]
    fn route_nodes_and_edges_turn_red() {
        let snapshot = reference_snapshot().with_route(&[1, 3, 5]);
        let dot = to_dot(&snapshot);

        assert!(dot.contains("\"1\" [fillcolor=red];"));
        assert!(dot.contains("\"3\" [fillcolor=red];"));
        assert!(dot.contains("\"5\" [fillcolor=red];"));
        assert!(dot.contains("\"2\";"));

        assert!(dot.contains("\"1\" -- \"3\" [label=\"3.2\", color=red, penwidth=3];"));
        assert!(dot.contains("\"3\" -- \"5\" [label=\"2.7\", color=red, penwidth=3];"));
        // Off-route edges keep default styling.
        assert!(dot.contains("\"1\" -- \"2\" [label=\"4.5\"];"));
    }

    #[test]
    fn unweighted_edges_have_no_label() {
        let mut graph = WeightedGraph::new();
        graph.add_unweighted_edge("a", "b");
        let dot = to_dot(&GraphSnapshot::from_graph(&graph));
        assert!(dot.contains("\"a\" -- \"b\";"));
        assert!(!dot.contains("label"));
    }

    #[test]
    fn route_edge_matches_either_direction() {
        let mut graph = WeightedGraph::new();
        graph.add_edge("b", "a", 1.0);
        let snapshot = GraphSnapshot::from_graph(&graph).with_route(&["a", "b"]);
        let dot = to_dot(&snapshot);
        assert!(dot.contains("color=red"));
    }

    #[test]
    fn labels_are_quoted_and_escaped() {
        let mut graph = WeightedGraph::new();
        graph.add_edge("say \"hi\"".to_string(), "b".to_string(), 1.0);
        let dot = to_dot(&GraphSnapshot::from_graph(&graph));
        assert!(dot.contains("\"say \\\"hi\\\"\""));
    }
}
