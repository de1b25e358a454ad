use medusa::{Error, Graph, GraphSpec};

const VERTICES: [&str; 8] = ["a", "b", "c", "d", "e", "f", "g", "h"];

fn with_vertices(spec: GraphSpec) -> Graph<&'static str> {
    let mut graph: Graph<&'static str> = Graph::new(spec);
    for v in VERTICES {
        assert!(graph.add_vertex(v));
    }
    graph
}

#[test]
fn simple_graph_rejects_duplicate_and_reversed_edges() {
    let mut graph = with_vertices(GraphSpec::simple());

    let edge1 = graph.add_edge(&"b", &"c").unwrap();
    let edge2 = graph.add_edge(&"b", &"c").unwrap();
    let edge3 = graph.add_edge(&"c", &"b").unwrap();

    graph.add_edge(&"c", &"d").unwrap();
    graph.add_edge(&"c", &"e").unwrap();
    graph.add_edge(&"e", &"f").unwrap();
    graph.add_edge(&"e", &"g").unwrap();
    graph.add_edge(&"e", &"h").unwrap();
    graph.add_edge(&"f", &"g").unwrap();
    graph.add_edge(&"f", &"h").unwrap();
    graph.add_edge(&"g", &"h").unwrap();

    assert!(edge1.is_some());
    assert!(edge2.is_none());
    assert!(edge3.is_none());
    assert_eq!(graph.vertex_count(), 8);
    assert_eq!(graph.edge_count(), 9);
    assert_eq!(graph.edges().count(), 9);
}

#[test]
fn simple_graph_rejects_self_loops() {
    let mut graph = with_vertices(GraphSpec::simple());

    assert!(matches!(
        graph.add_edge(&"a", &"a"),
        Err(Error::SelfLoopsNotAllowed)
    ));
}

#[test]
fn multigraph_keeps_parallel_edges_distinct() {
    let mut graph = with_vertices(GraphSpec::multigraph());

    let edge1 = graph.add_edge(&"b", &"c").unwrap();
    let edge2 = graph.add_edge(&"b", &"c").unwrap();
    let edge3 = graph.add_edge(&"c", &"b").unwrap();

    assert_ne!(edge1, edge2);
    assert_ne!(edge1, edge3);
    assert_eq!(graph.vertex_count(), 8);
    assert_eq!(graph.edge_count(), 3);
    assert_eq!(graph.get_all_edges(&"b", &"c").len(), 3);
}

#[test]
fn pseudograph_accepts_parallel_edges_and_self_loops() {
    let mut graph = with_vertices(GraphSpec::pseudograph());

    let edge1 = graph.add_edge(&"b", &"c").unwrap();
    let edge2 = graph.add_edge(&"b", &"c").unwrap();
    let edge3 = graph.add_edge(&"c", &"b").unwrap();
    let edge4 = graph.add_edge(&"a", &"a").unwrap();

    assert_ne!(edge1, edge2);
    assert_ne!(edge1, edge3);
    assert!(edge4.is_some());
    assert_eq!(graph.edge_count(), 4);

    // A self-loop counts twice toward degree and once in the edge set.
    assert_eq!(graph.degree(&"a").unwrap(), 2);
    assert_eq!(graph.edges_of(&"a").unwrap().len(), 1);
}

#[test]
fn default_undirected_allows_loops_but_not_parallel_edges() {
    let mut graph = with_vertices(GraphSpec::default_undirected());

    let edge1 = graph.add_edge(&"b", &"c").unwrap();
    let edge2 = graph.add_edge(&"b", &"c").unwrap();
    let edge3 = graph.add_edge(&"c", &"b").unwrap();
    let edge4 = graph.add_edge(&"a", &"a").unwrap();

    assert!(edge1.is_some());
    assert!(edge2.is_none());
    assert!(edge3.is_none());
    assert!(edge4.is_some());
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn simple_directed_graph_distinguishes_edge_direction() {
    let mut graph = with_vertices(GraphSpec::simple_directed());

    let forward = graph.add_edge(&"b", &"c").unwrap();
    let duplicate = graph.add_edge(&"b", &"c").unwrap();
    let reverse = graph.add_edge(&"c", &"b").unwrap();

    assert!(forward.is_some());
    assert!(duplicate.is_none());
    assert!(reverse.is_some());
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.out_degree(&"b").unwrap(), 1);
    assert_eq!(graph.in_degree(&"b").unwrap(), 1);
}

#[test]
fn directed_flavor_matrix_follows_its_flags() {
    let mut graph = with_vertices(GraphSpec::directed_multigraph());
    assert!(graph.allows_multiple_edges());
    assert!(!graph.allows_self_loops());
    let edge1 = graph.add_edge(&"a", &"b").unwrap();
    let edge2 = graph.add_edge(&"a", &"b").unwrap();
    assert_ne!(edge1, edge2);
    assert!(matches!(
        graph.add_edge(&"a", &"a"),
        Err(Error::SelfLoopsNotAllowed)
    ));

    let mut graph = with_vertices(GraphSpec::directed_pseudograph());
    assert!(graph.add_edge(&"a", &"a").unwrap().is_some());
    assert_eq!(graph.degree(&"a").unwrap(), 2);

    let mut graph = with_vertices(GraphSpec::default_directed());
    assert!(graph.is_directed());
    assert!(!graph.is_weighted());
    assert!(graph.add_edge(&"a", &"a").unwrap().is_some());
    assert!(graph.add_edge(&"a", &"b").unwrap().is_some());
    assert!(graph.add_edge(&"a", &"b").unwrap().is_none());
}

#[test]
fn weighted_graph_stores_weights() {
    let mut graph = with_vertices(GraphSpec::simple().weighted());

    let edge = graph.add_edge(&"b", &"c").unwrap().unwrap();
    assert_eq!(graph.edge_weight(edge), Some(medusa::DEFAULT_EDGE_WEIGHT));

    graph.set_edge_weight(edge, 2.5).unwrap();
    assert_eq!(graph.edge_weight(edge), Some(2.5));

    assert!(matches!(
        graph.add_edge(&"a", &"a"),
        Err(Error::SelfLoopsNotAllowed)
    ));
}

#[test]
fn weighted_multigraph_weights_parallel_edges_independently() {
    let mut graph = with_vertices(GraphSpec::multigraph().weighted());

    let edge1 = graph.add_edge(&"a", &"b").unwrap().unwrap();
    let edge2 = graph.add_edge(&"a", &"b").unwrap().unwrap();
    graph.set_edge_weight(edge1, 1.0).unwrap();
    graph.set_edge_weight(edge2, 2.0).unwrap();

    assert_eq!(graph.get_all_edges(&"a", &"b").len(), 2);
    assert_eq!(graph.edge_weight(edge1), Some(1.0));
    assert_eq!(graph.edge_weight(edge2), Some(2.0));
}

#[test]
fn unweighted_graph_rejects_weight_updates() {
    let mut graph = with_vertices(GraphSpec::simple());

    let edge = graph.add_edge(&"b", &"c").unwrap().unwrap();
    assert!(matches!(
        graph.set_edge_weight(edge, 2.0),
        Err(Error::NotWeighted)
    ));
}

#[test]
fn edges_require_existing_endpoints() {
    let mut graph = with_vertices(GraphSpec::simple());

    assert!(matches!(
        graph.add_edge(&"a", &"nope"),
        Err(Error::VertexNotFound(_))
    ));
    assert!(matches!(
        graph.add_edge(&"nope", &"a"),
        Err(Error::VertexNotFound(_))
    ));
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn neighbors_deduplicate_and_preserve_encounter_order() {
    let mut graph = with_vertices(GraphSpec::multigraph());

    graph.add_edge(&"b", &"c").unwrap();
    graph.add_edge(&"b", &"c").unwrap();
    graph.add_edge(&"a", &"b").unwrap();

    assert_eq!(graph.neighbors_of(&"b").unwrap(), vec![&"c", &"a"]);
    assert_eq!(graph.degree(&"b").unwrap(), 3);
}

#[test]
fn edge_labels_round_trip() {
    let mut graph: Graph<&'static str, String> = Graph::new(GraphSpec::simple());
    for v in ["a", "b", "c"] {
        graph.add_vertex(v);
    }

    let tagged = graph
        .add_edge_with_label(&"a", &"b", "ab".to_string())
        .unwrap()
        .unwrap();
    let plain = graph.add_edge(&"b", &"c").unwrap().unwrap();

    assert_eq!(graph.edge_label(tagged).map(String::as_str), Some("ab"));
    assert_eq!(graph.edge_label(plain).map(String::as_str), Some(""));

    *graph.edge_label_mut(plain).unwrap() = "bc".to_string();
    assert_eq!(graph.edge_label(plain).map(String::as_str), Some("bc"));

    graph.set_default_edge_label(|| "edge".to_string());
    let defaulted = graph.add_edge(&"a", &"c").unwrap().unwrap();
    assert_eq!(graph.edge_label(defaulted).map(String::as_str), Some("edge"));
}

#[test]
fn undirected_lookup_ignores_endpoint_order() {
    let mut graph = with_vertices(GraphSpec::simple());

    let edge = graph.add_edge(&"b", &"c").unwrap().unwrap();
    assert_eq!(graph.get_edge(&"c", &"b"), Some(edge));
    assert!(graph.contains_edge(&"c", &"b"));
    assert_eq!(graph.edge_endpoints(edge), Some((&"b", &"c")));
    assert_eq!(graph.format_edge(edge).unwrap(), "(b : c)");
}
