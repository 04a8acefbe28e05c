use adjgraph::{algo::*, io::*, prelude::*};
use itertools::Itertools;

fn four_cycle<G: GraphFromScratch>() -> G {
    G::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)])
}

/// Two triangles joined by the edge `(2, 3)`, which is inserted last
fn two_triangles<G: GraphFromScratch>() -> G {
    G::from_edges(
        6,
        [(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3), (2, 3)],
    )
}

fn check_four_cycle<G>(graph: &G)
where
    G: AdjacencyList + GraphType<Dir = Undirected>,
{
    let tree = graph.bfs_distances([0]);
    assert_eq!(tree.distances(), &[Some(0), Some(1), Some(2), Some(1)]);
    assert_eq!(tree.path_to(2).map(|p| p.len()), Some(3));

    let bipartition: NodeBitSet = graph.compute_bipartition().unwrap();
    assert_eq!(
        graph
            .vertices()
            .map(|u| bipartition.is_on_left_side(u))
            .collect_vec(),
        vec![true, false, true, false]
    );
}

#[test]
fn four_cycle_distances_and_coloring() {
    check_four_cycle(&four_cycle::<AdjListUndir>());
    check_four_cycle(&four_cycle::<SparseAdjListUndir>());
    check_four_cycle(&four_cycle::<AdjMatrixUndir>());
}

#[test]
fn four_cycle_from_edge_list() {
    let input = "c 4-cycle with 1-based ids\n4 4\n1 2\n2 3\n3 4\n4 1\n";
    let graph: AdjListUndir = EdgeListReader::new().try_read_graph(input.as_bytes()).unwrap();
    check_four_cycle(&graph);
}

#[test]
fn triangle_is_not_bipartite() {
    let undirected = AdjListUndir::from_edges(3, [(0, 1), (1, 2), (2, 0)]);
    assert!(!undirected.is_bipartite());

    let cycle = undirected.find_cycle().unwrap();
    assert_eq!(cycle.len(), 4);
    assert_eq!(cycle.first(), cycle.last());
    assert_eq!(cycle[..3].iter().sorted().collect_vec(), vec![&0, &1, &2]);

    let directed = AdjList::from_edges(3, [(0, 1), (1, 2), (2, 0)]);
    assert_eq!(directed.find_cycle(), Some(vec![0, 1, 2, 0]));

    let matrix = AdjMatrix::from_edges(3, [(0, 1), (1, 2), (2, 0)]);
    assert_eq!(matrix.find_cycle(), Some(vec![0, 1, 2, 0]));
}

#[test]
fn bridge_between_triangles() {
    let graph: AdjListUndir = two_triangles();
    assert_eq!(
        graph.compute_bridges(),
        vec![Bridge {
            id: 6,
            edge: Edge(2, 3)
        }]
    );
    assert_eq!(
        graph.compute_articulation_points().iter_set_bits().collect_vec(),
        vec![2, 3]
    );

    let graph: AdjMatrixUndir = two_triangles();
    assert_eq!(
        graph.compute_bridges().iter().map(|b| b.edge).collect_vec(),
        vec![Edge(2, 3)]
    );
    assert_eq!(
        graph.compute_articulation_points().iter_set_bits().collect_vec(),
        vec![2, 3]
    );
}

#[test]
fn balanced_euler_circuit() {
    let edges = [(0, 1), (1, 2), (2, 0), (0, 3), (3, 4), (4, 0)];
    let graph = AdjList::from_edges(5, edges);

    let trail = graph.eulerian_trail().unwrap();
    assert_eq!(trail.len(), edges.len() + 1);
    assert_eq!(trail.first(), trail.last());

    let walked = trail
        .iter()
        .tuple_windows()
        .map(|(&u, &v)| Edge(u, v))
        .sorted()
        .collect_vec();
    assert_eq!(walked, graph.ordered_edges(false));
}

#[test]
fn condensation_with_zero_one_queries() {
    // components {0, 1}, {2}, {3, 4}, {5} and the isolated node 6
    let graph = AdjList::from_edges(
        7,
        [(0, 1), (1, 0), (2, 0), (2, 3), (3, 4), (4, 3), (5, 3)],
    );
    let sccs = graph.strongly_connected_components();
    assert_eq!(sccs.number_of_components(), 5);

    // moving along an edge is free, moving against it costs one reversal
    let condensation = Condensation::new(&graph, &sccs).weight(0);
    let mut dag = condensation.build();
    for Edge(u, v) in dag.ordered_edges(false) {
        dag.add_weighted_edge(v, u, 1);
    }

    let reversals = |s: Node, t: Node| {
        dag.zero_one_distances([sccs.component_of(s)])
            .unwrap()
            .distance_to(sccs.component_of(t))
    };

    assert_eq!(reversals(3, 4), Some(0));
    assert_eq!(reversals(2, 4), Some(0));
    assert_eq!(reversals(0, 4), Some(1));
    assert_eq!(reversals(0, 5), Some(2));
    assert_eq!(reversals(0, 6), None);

    // {0, 1}, {3, 4} and {6} have no outgoing edges
    let sinks = condensation.sink_components();
    assert_eq!(sinks.len(), 3);
    assert!(sinks.contains(&sccs.component_of(0)));
    assert!(sinks.contains(&sccs.component_of(4)));
    assert!(sinks.contains(&sccs.component_of(6)));
}

#[test]
fn multi_source_distance_field() {
    let graph = AdjListUndir::from_edges(7, [(0, 1), (1, 2), (2, 3), (3, 4), (4, 5)]);
    let tree = graph.bfs_distances([0, 5]);

    assert_eq!(
        tree.distances(),
        &[Some(0), Some(1), Some(2), Some(2), Some(1), Some(0), None]
    );
    assert_eq!(tree.path_to(3), Some(vec![5, 4, 3]));
}

#[test]
fn components_and_labels() {
    let undirected = AdjListUndir::from_edges(6, [(0, 4), (4, 2), (1, 5)]);
    assert_eq!(
        sort_components(undirected.connected_components().collect()),
        vec![vec![0, 2, 4], vec![1, 5], vec![3]]
    );

    let directed = AdjMatrix::from_edges(4, [(0, 1), (1, 0), (2, 1), (3, 3)]);
    assert_eq!(
        directed.weakly_connected_components(),
        vec![vec![0, 1, 2], vec![3]]
    );

    let sccs = directed.strongly_connected_components();
    assert_eq!(sccs.number_of_components(), 3);
    assert_eq!(sccs.component_of(0), sccs.component_of(1));
    assert_ne!(sccs.component_of(1), sccs.component_of(2));
}
