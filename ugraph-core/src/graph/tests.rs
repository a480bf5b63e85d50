//! Unit and property tests for the adjacency graph.

use proptest::prelude::*;
use rstest::{fixture, rstest};

use crate::{
    Edge, Graph, GraphError, Vertex,
    test_utils::{labelled_vertices, suite_proptest_config},
};

#[fixture]
fn triangle_parts() -> (Vec<Vertex>, Graph) {
    let vertices = labelled_vertices("uvw");
    let graph = Graph::from_parts(vertices.clone(), []).expect("vertices only");
    (vertices, graph)
}

#[rstest]
fn get_edge_is_symmetric_and_returns_the_stored_record() {
    let (u, v) = (Vertex::new("u"), Vertex::new("v"));
    let e = Edge::new(u.clone(), v.clone());
    let graph = Graph::from_parts([u.clone(), v.clone()], [e.clone()]).expect("valid graph");

    assert_eq!(graph.get_edge(&u, &v), Some(&e));
    assert_eq!(graph.get_edge(&v, &u), Some(&e));
    assert_eq!(graph.edges(), vec![e]);
}

#[rstest]
fn get_edge_reports_absence_without_error() {
    let (u, v, stranger) = (Vertex::new("u"), Vertex::new("v"), Vertex::new("x"));
    let graph = Graph::from_parts([u.clone(), v.clone()], []).expect("valid graph");

    assert_eq!(graph.get_edge(&u, &v), None);
    assert_eq!(graph.get_edge(&u, &stranger), None);
    assert_eq!(graph.get_edge(&stranger, &u), None);
}

#[rstest]
fn remove_edge_clears_both_directions() {
    let (u, v) = (Vertex::new("u"), Vertex::new("v"));
    let e = Edge::new(u.clone(), v.clone());
    let mut graph = Graph::from_parts([u.clone(), v.clone()], [e.clone()]).expect("valid graph");

    graph.remove_edge(&e).expect("edge exists");

    assert!(graph.edges().is_empty());
    assert_eq!(graph.get_edge(&v, &u), None);
    assert_eq!(graph.degree(&u), Ok(0));
}

#[rstest]
fn remove_edge_matches_reversed_endpoints() {
    let (u, v) = (Vertex::new("u"), Vertex::new("v"));
    let mut graph = Graph::from_parts(
        [u.clone(), v.clone()],
        [Edge::new(u.clone(), v.clone())],
    )
    .expect("valid graph");

    graph
        .remove_edge(&Edge::new(v.clone(), u.clone()))
        .expect("reverse record names the same connection");
    assert_eq!(graph.edge_count(), 0);
}

#[rstest]
fn remove_missing_edge_is_an_error(triangle_parts: (Vec<Vertex>, Graph)) {
    let (vertices, mut graph) = triangle_parts;
    let [u, v, _] = vertices.as_slice() else {
        panic!("fixture yields three vertices");
    };

    let err = graph
        .remove_edge(&Edge::new(u.clone(), v.clone()))
        .expect_err("nothing to remove");
    assert_eq!(
        err,
        GraphError::MissingEdge {
            first: u.id(),
            second: v.id(),
        }
    );
}

#[rstest]
fn add_edge_rejects_unknown_vertices_without_mutating() {
    let (u, stranger) = (Vertex::new("u"), Vertex::new("stranger"));
    let mut graph = Graph::from_parts([u.clone()], []).expect("valid graph");

    let err = graph
        .add_edge(Edge::new(u.clone(), stranger.clone()))
        .expect_err("stranger was never added");

    assert!(matches!(
        err,
        GraphError::UnknownVertex { vertex, ref label } if vertex == stranger.id() && label == "stranger"
    ));
    assert_eq!(graph.degree(&u), Ok(0));
    assert!(!graph.contains_vertex(&stranger));
}

#[rstest]
fn from_parts_propagates_unknown_vertex() {
    let (u, v) = (Vertex::new("u"), Vertex::new("v"));
    let result = Graph::from_parts([u.clone()], [Edge::new(u, v)]);
    assert!(matches!(result, Err(GraphError::UnknownVertex { .. })));
}

#[rstest]
fn add_edge_replaces_prior_record_in_both_directions() {
    let (u, v) = (Vertex::new("u"), Vertex::new("v"));
    let forward = Edge::new(u.clone(), v.clone());
    let reverse = Edge::new(v.clone(), u.clone());
    let mut graph = Graph::from_parts([u.clone(), v.clone()], [forward]).expect("valid graph");

    graph.add_edge(reverse.clone()).expect("known vertices");

    assert_eq!(graph.get_edge(&u, &v), Some(&reverse));
    assert_eq!(graph.get_edge(&v, &u), Some(&reverse));
    assert_eq!(graph.edges(), vec![reverse]);
}

#[rstest]
fn out_vertices_and_out_edges_describe_the_same_neighbourhood(
    triangle_parts: (Vec<Vertex>, Graph),
) {
    let (vertices, mut graph) = triangle_parts;
    let [u, v, w] = vertices.as_slice() else {
        panic!("fixture yields three vertices");
    };
    let e = Edge::new(u.clone(), v.clone());
    let f = Edge::new(u.clone(), w.clone());
    graph.add_edge(e.clone()).expect("known vertices");
    graph.add_edge(f.clone()).expect("known vertices");

    assert_eq!(graph.out_vertices(u), Ok(vec![v.clone(), w.clone()]));
    assert_eq!(graph.out_edges(u), Ok(vec![e, f]));
    assert_eq!(graph.out_vertices(v), Ok(vec![u.clone()]));
}

#[rstest]
fn neighbourhood_queries_reject_unknown_vertices(triangle_parts: (Vec<Vertex>, Graph)) {
    let (_, graph) = triangle_parts;
    let stranger = Vertex::new("x");

    assert!(matches!(
        graph.out_vertices(&stranger),
        Err(GraphError::UnknownVertex { .. })
    ));
    assert!(matches!(
        graph.out_edges(&stranger),
        Err(GraphError::UnknownVertex { .. })
    ));
    assert!(matches!(
        graph.degree(&stranger),
        Err(GraphError::UnknownVertex { .. })
    ));
}

#[rstest]
fn re_adding_a_vertex_discards_its_edges_on_both_sides(triangle_parts: (Vec<Vertex>, Graph)) {
    let (vertices, mut graph) = triangle_parts;
    let [u, v, w] = vertices.as_slice() else {
        panic!("fixture yields three vertices");
    };
    graph.add_all_edges();

    graph.add_vertex(u.clone());

    assert_eq!(graph.degree(u), Ok(0));
    assert_eq!(graph.out_vertices(v), Ok(vec![w.clone()]));
    assert_eq!(graph.out_vertices(w), Ok(vec![v.clone()]));
    assert_eq!(graph.edge_count(), 1);
}

#[rstest]
fn remove_vertex_drops_incident_edges(triangle_parts: (Vec<Vertex>, Graph)) {
    let (vertices, mut graph) = triangle_parts;
    let [u, v, w] = vertices.as_slice() else {
        panic!("fixture yields three vertices");
    };
    graph.add_all_edges();

    graph.remove_vertex(v).expect("vertex exists");

    assert!(!graph.contains_vertex(v));
    assert_eq!(graph.vertices(), vec![u.clone(), w.clone()]);
    assert_eq!(graph.edge_count(), 1);
    assert!(matches!(
        graph.remove_vertex(v),
        Err(GraphError::UnknownVertex { .. })
    ));
}

#[rstest]
fn add_all_edges_connects_each_pair(triangle_parts: (Vec<Vertex>, Graph)) {
    let (vertices, mut graph) = triangle_parts;
    let [u, v, w] = vertices.as_slice() else {
        panic!("fixture yields three vertices");
    };

    graph.add_all_edges();

    assert_eq!(graph.out_vertices(u), Ok(vec![v.clone(), w.clone()]));
    assert_eq!(graph.out_vertices(v), Ok(vec![u.clone(), w.clone()]));
    assert_eq!(graph.out_vertices(w), Ok(vec![u.clone(), v.clone()]));
    assert!(graph.edges().iter().all(|edge| !edge.is_loop()));
}

#[rstest]
#[case(0, 0)]
#[case(1, 0)]
#[case(2, 1)]
#[case(5, 10)]
#[case(16, 120)]
fn complete_graph_edge_count(#[case] n: usize, #[case] expected: usize) {
    let mut graph =
        Graph::from_parts((0..n).map(|i| Vertex::new(i.to_string())), []).expect("valid graph");

    graph.add_all_edges();

    assert_eq!(graph.edge_count(), expected);
    assert_eq!(graph.edges().len(), expected);
    assert!(graph.is_regular());
    for vertex in graph.vertices() {
        assert_eq!(graph.degree(&vertex), Ok(n.saturating_sub(1)));
    }
}

#[rstest]
fn self_loops_are_stored_once() {
    let u = Vertex::new("u");
    let mut graph = Graph::from_parts([u.clone()], []).expect("valid graph");

    graph
        .add_edge(Edge::new(u.clone(), u.clone()))
        .expect("loops are allowed when explicit");

    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.edges().len(), 1);
    assert_eq!(graph.out_vertices(&u), Ok(vec![u.clone()]));
}

#[rstest]
fn is_regular_detects_uneven_degrees(triangle_parts: (Vec<Vertex>, Graph)) {
    let (vertices, mut graph) = triangle_parts;
    let [u, v, _] = vertices.as_slice() else {
        panic!("fixture yields three vertices");
    };
    assert!(graph.is_regular());

    graph
        .add_edge(Edge::new(u.clone(), v.clone()))
        .expect("known vertices");
    assert!(!graph.is_regular());
    assert!(Graph::new().is_regular());
}

#[rstest]
fn relabelling_a_caller_handle_is_visible_through_the_graph() {
    let u = Vertex::new("u");
    let graph = Graph::from_parts([u.clone()], []).expect("valid graph");

    u.set_label("renamed");

    let stored = graph.vertices();
    assert_eq!(stored.first().map(Vertex::label).as_deref(), Some("renamed"));
}

#[rstest]
fn display_lists_vertices_and_edges() {
    let (u, v) = (Vertex::new("u"), Vertex::new("v"));
    let graph = Graph::from_parts(
        [u.clone(), v.clone()],
        [Edge::new(u, v)],
    )
    .expect("valid graph");

    assert_eq!(
        graph.to_string(),
        "Graph([Vertex('u'), Vertex('v')], [Edge(Vertex('u'), Vertex('v'))])"
    );
}

fn edge_pairs_strategy() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (2usize..24).prop_flat_map(|n| {
        let pair = (0..n, 0..n).prop_filter("no loops", |(a, b)| a != b);
        (Just(n), proptest::collection::vec(pair, 0..64))
    })
}

proptest! {
    #![proptest_config(suite_proptest_config(128))]

    #[test]
    fn inserted_edges_are_symmetric_and_listed_once((n, pairs) in edge_pairs_strategy()) {
        let vertices: Vec<_> = (0..n).map(|i| Vertex::new(i.to_string())).collect();
        let mut graph = Graph::from_parts(vertices.clone(), []).expect("vertices only");
        let mut expected = std::collections::HashSet::new();

        for (a, b) in pairs {
            let (Some(first), Some(second)) = (vertices.get(a), vertices.get(b)) else {
                continue;
            };
            let edge = Edge::new(first.clone(), second.clone());
            graph.add_edge(edge.clone()).expect("known vertices");
            prop_assert_eq!(graph.get_edge(first, second), Some(&edge));
            prop_assert_eq!(graph.get_edge(second, first), Some(&edge));
            expected.insert((a.min(b), a.max(b)));
        }

        prop_assert_eq!(graph.edges().len(), expected.len());
        prop_assert_eq!(graph.edge_count(), expected.len());

        for vertex in &vertices {
            let neighbours = graph.out_vertices(vertex).expect("known vertex");
            let incident = graph.out_edges(vertex).expect("known vertex");
            prop_assert_eq!(neighbours.len(), incident.len());
            prop_assert!(incident.iter().all(|edge| edge.other(vertex).is_some()));
        }
    }
}
