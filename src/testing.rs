/// Instantiates the storage contract tests for a graph representation.
///
/// Arguments: module name, representation, whether it is undirected, whether it keeps
/// parallel edges (list representations) or overwrites them (matrix representations).
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident, $undirected:literal, $multi_edges:literal) => {
        #[cfg(test)]
        mod $env {
            use crate::{error::GraphError, ops::*, repr::*};
            use itertools::Itertools;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;

            /// Creates a list of at most `m_ub` distinct random edges for nodes `0..n`
            fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m_ub: NumEdges) -> Vec<Edge> {
                let mut edges: Vec<Edge> = (0..m_ub)
                    .map(|_| {
                        let u = rng.random_range(0..n);
                        let v = rng.random_range(0..n);

                        if $undirected {
                            Edge(u, v).normalized()
                        } else {
                            Edge(u, v)
                        }
                    })
                    .collect_vec();
                edges.sort_unstable();
                edges.dedup();

                edges
            }

            #[test]
            fn graph_new() {
                for n in 0..50 {
                    let graph = <$graph>::new(n);

                    assert_eq!(graph.number_of_edges(), 0);
                    assert_eq!(graph.number_of_nodes(), n);
                    assert_eq!(graph.is_empty(), n == 0);

                    assert_eq!(graph.vertices_range().len(), n as usize);
                    assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
                    assert_eq!(<$graph>::is_undirected(), $undirected);
                }
            }

            #[test]
            fn adjacency_list() {
                let rng = &mut Pcg64Mcg::seed_from_u64(3);

                for n in [10 as NumNodes, 20, 50] {
                    for m_ub in [n * 2, n * 5, n * 10] {
                        for _ in 0..10 {
                            let edges = random_edges(rng, n, m_ub as NumEdges);

                            let mut adj_matrix: Vec<NodeBitSet> =
                                vec![NodeBitSet::new(n); n as usize];
                            for &Edge(u, v) in &edges {
                                adj_matrix[u as usize].set_bit(v);
                                if $undirected {
                                    adj_matrix[v as usize].set_bit(u);
                                }
                            }

                            let graph = <$graph>::from_edges(n, edges.iter());

                            assert_eq!(graph.number_of_nodes(), n);
                            assert_eq!(graph.number_of_edges(), edges.len() as NumEdges);
                            assert_eq!(graph.edge_id_bound(), edges.len() as EdgeId);
                            assert_eq!(edges, graph.ordered_edges($undirected));

                            for u in 0..n {
                                assert_eq!(graph.neighbors_of_as_bitset(u), adj_matrix[u as usize]);
                                assert_eq!(graph.degree_of(u), adj_matrix[u as usize].cardinality());
                                for v in 0..n {
                                    assert_eq!(graph.has_edge(u, v), adj_matrix[u as usize].get_bit(v));
                                }
                            }
                        }
                    }
                }
            }

            #[test]
            fn edge_ids_and_weights() {
                let mut graph = <$graph>::new(4);

                assert_eq!(graph.try_add_weighted_edge(0, 1, 5), Ok(0));
                assert_eq!(graph.try_add_weighted_edge(2, 1, 7), Ok(1));
                assert_eq!(graph.add_edge(3, 3), 2);

                assert_eq!(graph.weight_of(0, 1), Some(5));
                assert_eq!(graph.weight_of(1, 0), if $undirected { Some(5) } else { None });
                assert_eq!(graph.weight_of(3, 3), Some(DEFAULT_WEIGHT));
                assert_eq!(graph.degree_of(3), 1);

                // duplicate of the first edge
                let id = graph.try_add_weighted_edge(0, 1, 9).unwrap();
                if $multi_edges {
                    assert_eq!(id, 3);
                    assert_eq!(graph.number_of_edges(), 4);
                    assert_eq!(graph.degree_of(0), 2);
                    assert_eq!(graph.weight_of(0, 1), Some(5));
                } else {
                    assert_eq!(id, 0);
                    assert_eq!(graph.number_of_edges(), 3);
                    assert_eq!(graph.degree_of(0), 1);
                    assert_eq!(graph.weight_of(0, 1), Some(9));
                }

                if $undirected {
                    let arc = graph.arcs_of(1).find(|nb| nb.node == 2).unwrap();
                    assert_eq!(arc, Neighbor::new(2, 7, 1));
                }
            }

            #[test]
            fn arc_order() {
                let mut graph = <$graph>::new(6);
                for v in [4, 1, 5, 2] {
                    graph.add_edge(0, v);
                }

                let order = graph.neighbors_of(0).collect_vec();
                if $multi_edges {
                    assert_eq!(order, vec![4, 1, 5, 2]);
                } else {
                    assert_eq!(order, vec![1, 2, 4, 5]);
                }
            }

            #[test]
            fn invalid_insertions() {
                let mut graph = <$graph>::new(3);

                assert_eq!(
                    graph.try_add_edge(0, 3),
                    Err(GraphError::InvalidVertex {
                        vertex: 3,
                        number_of_nodes: 3
                    })
                );
                assert_eq!(
                    graph.try_add_weighted_edge(0, 1, Weight::MAX),
                    Err(GraphError::InvalidWeight { weight: Weight::MAX })
                );
                assert!(graph.is_edgeless());
                assert_eq!(graph.edge_id_bound(), 0);
            }

            #[test]
            #[should_panic]
            fn add_edge_out_of_range_panics() {
                let mut graph = <$graph>::new(3);
                graph.add_edge(5, 0);
            }

            #[test]
            fn graph_edge_editing() {
                let rng = &mut Pcg64Mcg::seed_from_u64(3);

                for n in [10 as NumNodes, 20, 50] {
                    for m_ub in [n * 2, n * 5, n * 10] {
                        for _ in 0..10 {
                            let edges = random_edges(rng, n, m_ub as NumEdges);

                            let mut graph = <$graph>::new(n);
                            let mut adj_matrix: Vec<NodeBitSet> =
                                vec![NodeBitSet::new(n); n as usize];

                            for &Edge(u, v) in &edges {
                                adj_matrix[u as usize].set_bit(v);
                                graph.try_add_edge(u, v).unwrap();

                                if $undirected {
                                    adj_matrix[v as usize].set_bit(u);
                                }
                            }

                            let rng = &mut Pcg64Mcg::seed_from_u64(4);

                            let mut m = graph.number_of_edges();
                            for _ in 0..(m / 2) {
                                let u = rng.random_range(0..n);
                                let v = rng.random_range(0..n);

                                if adj_matrix[u as usize].clear_bit(v) {
                                    assert!(graph.try_remove_edge(u, v));
                                    m -= 1;

                                    if $undirected && u != v {
                                        assert!(adj_matrix[v as usize].clear_bit(u));
                                    }
                                } else {
                                    assert!(!graph.try_remove_edge(u, v));
                                }

                                assert_eq!(m, graph.number_of_edges());
                            }

                            for Edge(u, v) in graph.ordered_edges($undirected) {
                                graph.remove_edge(u, v);
                            }
                            assert!(graph.is_edgeless());
                            assert_eq!(graph.edge_id_bound(), edges.len() as EdgeId);
                        }
                    }
                }
            }
        }
    };
}

pub(crate) use test_graph_ops;
