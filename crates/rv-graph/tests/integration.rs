//! Integration tests for rv-graph.

use rv_graph::{RouteError, WeightedGraph};

/// The full demo flow: build the reference graph, route, inspect.
#[test]
fn build_and_route_reference_graph() {
    let mut graph = WeightedGraph::new();
    for id in [1, 2, 3, 4, 5] {
        graph.add_node(id);
    }
    graph.add_edge(1, 2, 4.5);
    graph.add_edge(1, 3, 3.2);
    graph.add_edge(2, 4, 2.7);
    graph.add_edge(3, 4, 1.8);
    graph.add_edge(1, 4, 6.7);
    graph.add_edge(3, 5, 2.7);

    assert_eq!(graph.node_count(), 5);
    assert_eq!(graph.edge_count(), 6);

    // 1 -> 5: via 3 beats the 1-4 detours (4 has no edge to 5).
    let path = graph.shortest_path(&1, &5).unwrap();
    assert_eq!(path, vec![1, 3, 5]);
    let cost = graph.path_cost(&path).unwrap();
    assert!((cost - 5.9).abs() < 1e-12);

    // A node that was never added.
    assert_eq!(graph.shortest_path(&1, &6), Err(RouteError::NodeNotFound(6)));
}

#[test]
fn string_keyed_graph() {
    // Node identifiers are caller-supplied; strings work as well as ints.
    let mut graph = WeightedGraph::new();
    graph.add_edge("depot".to_string(), "north".to_string(), 2.0);
    graph.add_edge("north".to_string(), "summit".to_string(), 3.0);
    graph.add_edge("depot".to_string(), "summit".to_string(), 6.0);

    let path = graph
        .shortest_path(&"depot".to_string(), &"summit".to_string())
        .unwrap();
    assert_eq!(path, vec!["depot", "north", "summit"]);
}

#[test]
fn route_respects_edge_overwrites() {
    let mut graph = WeightedGraph::new();
    graph.add_edge('a', 'b', 1.0);
    graph.add_edge('b', 'c', 1.0);
    graph.add_edge('a', 'c', 10.0);
    assert_eq!(graph.shortest_path(&'a', &'c').unwrap(), vec!['a', 'b', 'c']);

    // Exactly one edge remains between a and c, now cheap.
    graph.add_edge('a', 'c', 0.5);
    assert_eq!(graph.edge_count(), 3);
    assert_eq!(graph.shortest_path(&'a', &'c').unwrap(), vec!['a', 'c']);
}

#[test]
fn mixed_weighted_and_unweighted_edges() {
    let mut graph = WeightedGraph::new();
    graph.add_unweighted_edge(0, 1);
    graph.add_edge(1, 2, 0.25);
    graph.add_edge(0, 2, 1.5);

    // 0-1-2 costs 1.0 + 0.25; the direct edge costs 1.5.
    let path = graph.shortest_path(&0, &2).unwrap();
    assert_eq!(path, vec![0, 1, 2]);
    assert_eq!(graph.path_cost(&path).unwrap(), 1.25);
}

#[test]
fn isolated_node_has_no_route_anywhere() {
    let mut graph = WeightedGraph::new();
    graph.add_node("island");
    graph.add_edge("a", "b", 1.0);

    assert_eq!(
        graph.shortest_path(&"island", &"b"),
        Err(RouteError::NoRoute {
            start: "island",
            end: "b"
        })
    );
    // But routing to itself still works.
    assert_eq!(
        graph.shortest_path(&"island", &"island").unwrap(),
        vec!["island"]
    );
}

#[test]
fn empty_graph() {
    let graph: WeightedGraph<u32> = WeightedGraph::new();
    assert!(graph.is_empty());
    assert_eq!(graph.node_count(), 0);
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.shortest_path(&1, &2), Err(RouteError::NodeNotFound(1)));
}

#[test]
fn larger_chain_routes_end_to_end() {
    let mut graph = WeightedGraph::new();
    for i in 0..100u32 {
        graph.add_edge(i, i + 1, 1.0);
    }
    // A single expensive shortcut should not be taken.
    graph.add_edge(0, 100, 150.0);

    let path = graph.shortest_path(&0, &100).unwrap();
    assert_eq!(path.len(), 101);
    assert_eq!(graph.path_cost(&path).unwrap(), 100.0);
}
