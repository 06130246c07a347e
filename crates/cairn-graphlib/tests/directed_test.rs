use cairn_graphlib::{Graph, GraphError};

fn people() -> Graph {
    let mut g = Graph::directed();
    g.add_vertex("Riko").unwrap();
    g.add_vertex("Adam").unwrap();
    g
}

#[test]
fn add_vertex_makes_it_findable_by_label() {
    let g = people();
    assert!(g.vertex("Riko").is_some());
    assert!(g.vertex("Adam").is_some());
    assert!(g.vertex("Eve").is_none());
    assert_eq!(g.vertex_count(), 2);
}

#[test]
fn labels_compare_by_value() {
    let mut g = Graph::directed();
    g.add_vertex(String::from("Riko")).unwrap();
    let built: String = ['R', 'i', 'k', 'o'].iter().collect();
    assert!(g.vertex(&built).is_some());
    assert_eq!(
        g.add_vertex(built),
        Err(GraphError::DuplicateLabel {
            label: "Riko".to_string()
        })
    );
}

#[test]
fn char_labels_are_accepted() {
    let mut g = Graph::directed();
    g.add_vertex('A').unwrap();
    g.add_vertex('B').unwrap();
    g.add_weighted_edge('A', 'B', 3).unwrap();
    assert_eq!(g.edge("A", "B").map(|e| e.weight()), Some(3));
}

#[test]
fn remove_vertex_drops_it_and_its_edges() {
    let mut g = people();
    g.add_vertex("Eve").unwrap();
    g.add_edge("Riko", "Adam").unwrap();
    g.add_edge("Adam", "Eve").unwrap();
    g.add_edge("Eve", "Riko").unwrap();

    assert!(g.remove_vertex("Riko"));
    assert!(g.vertex("Riko").is_none());
    assert!(g.vertex("Adam").is_some());
    assert_eq!(g.edge_count(), 1);
    assert!(g.has_edge("Adam", "Eve"));
    assert_eq!(g.out_edges("Eve").len(), 0);
    assert_eq!(g.out_edges("Adam")[0].target(), "Eve");
}

#[test]
fn remove_vertex_of_unknown_label_is_a_no_op() {
    let mut g = people();
    assert!(!g.remove_vertex("Eve"));
    assert_eq!(g.vertex_count(), 2);
}

#[test]
fn rename_vertex_keeps_its_edges() {
    let mut g = people();
    g.add_weighted_edge("Riko", "Adam", 4).unwrap();

    g.rename_vertex("Riko", "Athanase").unwrap();
    assert!(g.vertex("Riko").is_none());
    assert!(g.vertex("Athanase").is_some());
    assert_eq!(g.edge("Athanase", "Adam").map(|e| e.weight()), Some(4));
    assert!(!g.has_edge("Riko", "Adam"));

    assert_eq!(
        g.rename_vertex("Athanase", "Adam"),
        Err(GraphError::DuplicateLabel {
            label: "Adam".to_string()
        })
    );
    assert_eq!(
        g.rename_vertex("Nobody", "Someone"),
        Err(GraphError::UnknownVertex {
            label: "Nobody".to_string()
        })
    );
}

#[test]
fn add_edge_is_directional() {
    let mut g = people();
    g.add_edge("Riko", "Adam").unwrap();
    assert!(g.has_edge("Riko", "Adam"));
    assert!(!g.has_edge("Adam", "Riko"));
    assert_eq!(g.edge("Riko", "Adam").map(|e| e.weight()), Some(1));

    // The reverse direction is a different edge.
    g.add_edge("Adam", "Riko").unwrap();
    assert_eq!(g.edge_count(), 2);
}

#[test]
fn duplicate_edge_is_rejected_without_mutation() {
    let mut g = people();
    g.add_weighted_edge("Riko", "Adam", 2).unwrap();
    assert_eq!(
        g.add_weighted_edge("Riko", "Adam", 9),
        Err(GraphError::DuplicateEdge {
            from: "Riko".to_string(),
            to: "Adam".to_string()
        })
    );
    assert_eq!(g.edge_count(), 1);
    assert_eq!(g.edge("Riko", "Adam").map(|e| e.weight()), Some(2));
}

#[test]
fn self_loop_is_rejected() {
    let mut g = people();
    assert_eq!(
        g.add_edge("Riko", "Riko"),
        Err(GraphError::SelfLoop {
            label: "Riko".to_string()
        })
    );
    assert_eq!(g.edge_count(), 0);
}

#[test]
fn edge_to_unknown_vertex_is_rejected() {
    let mut g = people();
    assert_eq!(
        g.add_edge("Riko", "Eve"),
        Err(GraphError::UnknownVertex {
            label: "Eve".to_string()
        })
    );
    assert_eq!(
        g.add_edge("Eve", "Eve"),
        Err(GraphError::UnknownVertex {
            label: "Eve".to_string()
        })
    );
}

#[test]
fn remove_edge_only_touches_that_direction() {
    let mut g = people();
    g.add_edge("Riko", "Adam").unwrap();
    g.add_edge("Adam", "Riko").unwrap();
    assert!(g.remove_edge("Riko", "Adam"));
    assert!(!g.has_edge("Riko", "Adam"));
    assert!(g.has_edge("Adam", "Riko"));
    assert!(!g.remove_edge("Riko", "Adam"));
}

#[test]
fn set_edge_weight_updates_existing_edge() {
    let mut g = people();
    g.add_edge("Riko", "Adam").unwrap();
    g.set_edge_weight("Riko", "Adam", 5).unwrap();
    assert_eq!(g.edge("Riko", "Adam").map(|e| e.weight()), Some(5));

    assert_eq!(
        g.set_edge_weight("Adam", "Riko", 5),
        Err(GraphError::EdgeNotFound {
            from: "Adam".to_string(),
            to: "Riko".to_string()
        })
    );
}

#[test]
fn vertex_exposes_outgoing_edges_in_insertion_order() {
    let mut g = Graph::directed();
    for v in ["a", "b", "c", "d"] {
        g.add_vertex(v).unwrap();
    }
    g.add_weighted_edge("a", "c", 2).unwrap();
    g.add_weighted_edge("b", "a", 7).unwrap();
    g.add_weighted_edge("a", "b", 1).unwrap();
    g.add_weighted_edge("a", "d", -4).unwrap();

    let a = g.vertex("a").unwrap();
    assert_eq!(a.label(), "a");
    let out: Vec<(&str, i64)> = a.out_edges().map(|e| (e.target(), e.weight())).collect();
    assert_eq!(out, vec![("c", 2), ("b", 1), ("d", -4)]);
    assert_eq!(a.degree(), 3);

    let incident: Vec<&str> = g.incident_edges("a").iter().map(|e| e.source()).collect();
    assert_eq!(incident, vec!["a", "b", "a", "a"]);
}

#[test]
fn vertices_iterate_in_insertion_order() {
    let mut g = Graph::directed();
    for v in ["s", "a", "b"] {
        g.add_vertex(v).unwrap();
    }
    let labels: Vec<&str> = g.vertices().map(|v| v.label()).collect();
    assert_eq!(labels, vec!["s", "a", "b"]);
    g.remove_vertex("a");
    let labels: Vec<&str> = g.vertices().map(|v| v.label()).collect();
    assert_eq!(labels, vec!["s", "b"]);
    assert_eq!(g.vertex("b").map(|v| v.id().index()), Some(1));
}
