use cairn::{Dijkstra, Distance, EdgeState, Error, Graph, ShortestPath, Traversal};

fn roads() -> Graph {
    let mut g = Graph::undirected();
    for v in ["A", "B", "C", "D", "E", "F", "G", "H"] {
        g.add_vertex(v).unwrap();
    }
    let edges = [
        ("A", "D", 9),
        ("A", "E", 5),
        ("D", "B", 5),
        ("B", "C", 1),
        ("C", "E", 9),
        ("D", "F", 3),
        ("B", "G", 8),
        ("B", "F", 9),
        ("C", "G", 6),
        ("G", "H", 8),
    ];
    for (from, to, weight) in edges {
        g.add_weighted_edge(from, to, weight).unwrap();
    }
    g
}

#[test]
fn finds_cheapest_path() {
    let g = roads();
    let mut dijkstra = Dijkstra::new(&g).unwrap();
    assert_eq!(
        dijkstra.shortest_path("A", "H"),
        Some(vec!["A", "E", "C", "G", "H"])
    );
    assert_eq!(dijkstra.shortest_path_cost("A", "H"), Some(28));
}

#[test]
fn paths_are_walkable_in_either_direction() {
    let g = roads();
    let mut dijkstra = Dijkstra::new(&g).unwrap();
    assert_eq!(
        dijkstra.shortest_path("H", "A"),
        Some(vec!["H", "G", "C", "E", "A"])
    );
    assert_eq!(dijkstra.shortest_path_cost("F", "C"), Some(9));
}

#[test]
fn distance_renders_unreachable_as_infinity() {
    let mut g = roads();
    g.add_vertex("Z").unwrap();
    let mut dijkstra = Dijkstra::new(&g).unwrap();

    assert_eq!(dijkstra.distance("A", "H"), Distance::Finite(28));
    assert_eq!(dijkstra.distance("A", "H").to_string(), "28");
    assert_eq!(dijkstra.distance("A", "Z"), Distance::Infinite);
    assert_eq!(dijkstra.distance("A", "Z").to_string(), "INFINITY");
    assert_eq!(dijkstra.distance("A", "nowhere"), Distance::Infinite);

    assert_eq!(dijkstra.shortest_path("A", "Z"), None);
    assert_eq!(dijkstra.shortest_path_cost("Z", "A"), None);
}

#[test]
fn every_reachable_vertex_ends_visited() {
    let g = roads();
    let mut dijkstra = Dijkstra::new(&g).unwrap();
    dijkstra.shortest_path("A", "B").unwrap();

    assert!(dijkstra.state().vertices().all(|(_, v)| v.visited));
    assert!(
        dijkstra
            .state()
            .edges()
            .all(|(_, s)| matches!(s, EdgeState::OnPath | EdgeState::Relaxed))
    );
    assert_eq!(dijkstra.edge_state("E", "A"), Some(EdgeState::OnPath));
    assert_eq!(dijkstra.edge_state("C", "E"), Some(EdgeState::OnPath));
    assert_eq!(dijkstra.edge_state("B", "G"), Some(EdgeState::Relaxed));
}

#[test]
fn path_to_self_is_the_vertex_alone() {
    let g = roads();
    let mut dijkstra = Dijkstra::new(&g).unwrap();
    assert_eq!(dijkstra.shortest_path("G", "G"), Some(vec!["G"]));
    assert_eq!(dijkstra.shortest_path_cost("G", "G"), Some(0));
}

#[test]
fn overflowing_distance_is_not_reported() {
    let mut g = Graph::undirected();
    for v in ["a", "b", "c"] {
        g.add_vertex(v).unwrap();
    }
    g.add_weighted_edge("a", "b", i64::MAX).unwrap();
    g.add_weighted_edge("b", "c", 10).unwrap();

    let mut dijkstra = Dijkstra::new(&g).unwrap();
    assert_eq!(dijkstra.distance("a", "b"), Distance::Finite(i64::MAX));
    assert_eq!(dijkstra.distance("a", "c"), Distance::Infinite);
    assert_eq!(dijkstra.shortest_path_cost("a", "c"), None);
    assert_eq!(dijkstra.shortest_path_cost("c", "b"), Some(10));
}

#[test]
fn weights_below_one_are_rejected_up_front() {
    let mut g = roads();
    g.set_edge_weight("C", "G", 0).unwrap();
    assert_eq!(
        Dijkstra::new(&g).err(),
        Some(Error::InvalidWeight {
            algorithm: "Dijkstra",
            from: "C".to_string(),
            to: "G".to_string(),
            weight: 0
        })
    );
}

#[test]
fn directed_graph_is_rejected() {
    let g = Graph::directed();
    assert_eq!(
        Dijkstra::new(&g).err(),
        Some(Error::WrongGraphKind {
            algorithm: "Dijkstra",
            expected: "undirected"
        })
    );
}
