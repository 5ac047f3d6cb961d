use ordered_float::OrderedFloat;
use pathwatch::{Error, Graph};

type W = OrderedFloat<f64>;

#[test]
fn test_vertex_name_must_not_be_blank() {
    let mut graph: Graph<W> = Graph::new();

    assert!(matches!(graph.add_vertex(""), Err(Error::InvalidName(_))));
    assert!(matches!(graph.add_vertex("   "), Err(Error::InvalidName(_))));
    assert!(matches!(graph.add_vertex("\t\n"), Err(Error::InvalidName(_))));
    assert_eq!(graph.vertex_count(), 0);

    let a = graph.add_vertex("A").unwrap();
    assert_eq!(graph.vertex_name(a), Some("A"));
}

#[test]
fn test_rename_validates_like_creation() {
    let mut graph: Graph<W> = Graph::new();
    let a = graph.add_vertex("A").unwrap();

    assert!(matches!(
        graph.rename_vertex(a, "  "),
        Err(Error::InvalidName(_))
    ));
    assert_eq!(graph.vertex_name(a), Some("A"), "Failed rename must not stick");

    graph.rename_vertex(a, "Start").unwrap();
    assert_eq!(graph.vertex_name(a), Some("Start"));

    graph.remove_vertex(a);
    assert!(matches!(
        graph.rename_vertex(a, "Ghost"),
        Err(Error::UnknownVertex(_))
    ));
}

#[test]
fn test_add_edge_requires_live_endpoints() {
    let mut graph: Graph<W> = Graph::new();
    let a = graph.add_vertex("A").unwrap();
    let b = graph.add_vertex("B").unwrap();
    graph.remove_vertex(b);

    assert!(matches!(
        graph.add_edge(a, b, OrderedFloat(1.0)),
        Err(Error::UnknownVertex(_))
    ));
    assert!(matches!(
        graph.add_edge(b, a, OrderedFloat(1.0)),
        Err(Error::UnknownVertex(_))
    ));
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_edges_keep_insertion_order() {
    let mut graph: Graph<W> = Graph::new();
    let a = graph.add_vertex("A").unwrap();
    let b = graph.add_vertex("B").unwrap();
    let c = graph.add_vertex("C").unwrap();

    let first = graph.add_edge(a, b, OrderedFloat(2.0)).unwrap();
    let second = graph.add_edge(a, c, OrderedFloat(1.0)).unwrap();
    let third = graph.add_edge(a, b, OrderedFloat(9.0)).unwrap();

    let ids: Vec<_> = graph.edges_of(a).map(|e| e.id()).collect();
    assert_eq!(ids, vec![first, second, third]);

    let vertex = graph.vertex(a).unwrap();
    assert_eq!(vertex.name(), "A");
    assert_eq!(vertex.edges().len(), 3);
}

#[test]
fn test_remove_edge_is_idempotent() {
    let mut graph: Graph<W> = Graph::new();
    let a = graph.add_vertex("A").unwrap();
    let b = graph.add_vertex("B").unwrap();
    let e = graph.add_edge(a, b, OrderedFloat(4.0)).unwrap();

    assert!(graph.remove_edge(e));
    assert_eq!(graph.edge_count(), 0);
    assert!(!graph.remove_edge(e), "Second removal must be a no-op");
}

#[test]
fn test_remove_vertex_cascades_to_incident_edges() {
    let mut graph: Graph<W> = Graph::new();
    let a = graph.add_vertex("A").unwrap();
    let b = graph.add_vertex("B").unwrap();
    let c = graph.add_vertex("C").unwrap();

    graph.add_edge(a, b, OrderedFloat(1.0)).unwrap();
    let b_c = graph.add_edge(b, c, OrderedFloat(1.0)).unwrap();
    let c_b = graph.add_edge(c, b, OrderedFloat(1.0)).unwrap();
    let a_c = graph.add_edge(a, c, OrderedFloat(1.0)).unwrap();

    assert!(graph.remove_vertex(b));
    assert!(!graph.contains_vertex(b));
    assert_eq!(graph.vertex_count(), 2);

    // Outgoing edges died with the vertex, edges targeting it were swept
    // from their owners; the unrelated A->C edge survives.
    assert_eq!(graph.edge_weight(b_c), None);
    assert_eq!(graph.edge_weight(c_b), None);
    assert_eq!(graph.edge_weight(a_c), Some(OrderedFloat(1.0)));
    assert_eq!(graph.edge_count(), 1);

    assert!(!graph.remove_vertex(b), "Second removal must be a no-op");
}

#[test]
fn test_edge_weight_is_mutable() {
    let mut graph: Graph<W> = Graph::new();
    let a = graph.add_vertex("A").unwrap();
    let b = graph.add_vertex("B").unwrap();
    let e = graph.add_edge(a, b, OrderedFloat(4.0)).unwrap();

    assert!(graph.set_edge_weight(e, OrderedFloat(2.5)));
    assert_eq!(graph.edge_weight(e), Some(OrderedFloat(2.5)));

    graph.remove_edge(e);
    assert!(!graph.set_edge_weight(e, OrderedFloat(1.0)));
}

#[test]
fn test_ids_are_never_reused() {
    let mut graph: Graph<W> = Graph::new();
    let a = graph.add_vertex("A").unwrap();
    graph.remove_vertex(a);
    let b = graph.add_vertex("B").unwrap();

    assert_ne!(a, b);
    assert_eq!(graph.vertex_name(a), None, "Stale handle must dangle");
    assert_eq!(graph.vertex_name(b), Some("B"));
}
