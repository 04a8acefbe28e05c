/*!
Single- and multi-source shortest distances for unweighted and `{0, 1}`-weighted graphs.

Both searches produce a [`ShortestPathTree`] holding, for every node, its distance from the
closest source and its parent on one shortest path. Unreached nodes have neither.
*/

use std::collections::VecDeque;

use tracing::{debug, debug_span};

use super::*;

/// Distances and parent pointers computed by a shortest path search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathTree {
    dist: Vec<Option<Weight>>,
    parent: Vec<Option<Node>>,
}

impl ShortestPathTree {
    fn new(n: NumNodes) -> Self {
        Self {
            dist: vec![None; n as usize],
            parent: vec![None; n as usize],
        }
    }

    /// Returns the distance of `u` from the closest source or `None` if `u` was not reached
    /// ** Panics if `u >= n` **
    pub fn distance_to(&self, u: Node) -> Option<Weight> {
        self.dist[u as usize]
    }

    /// Returns the predecessor of `u` on a shortest path; sources and unreached nodes have none
    /// ** Panics if `u >= n` **
    pub fn parent_of(&self, u: Node) -> Option<Node> {
        self.parent[u as usize]
    }

    /// Returns *true* if `u` was reached
    pub fn is_reachable(&self, u: Node) -> bool {
        self.dist[u as usize].is_some()
    }

    /// Returns the distances of all nodes
    pub fn distances(&self) -> &[Option<Weight>] {
        &self.dist
    }

    /// Returns the parents of all nodes
    pub fn parents(&self) -> &[Option<Node>] {
        &self.parent
    }

    /// Returns a shortest path from the closest source to `u` (both included)
    /// or `None` if `u` was not reached.
    /// ** Panics if `u >= n` **
    pub fn path_to(&self, u: Node) -> Option<Vec<Node>> {
        self.is_reachable(u)
            .then(|| walk_back(u, |v| self.parent[v as usize]))
    }
}

/// Shortest distance searches on unweighted and `{0, 1}`-weighted graphs
pub trait Distances: AdjacencyList + Sized {
    /// Runs a breadth-first search from all `sources` simultaneously.
    /// Distances count edges; weights are ignored.
    ///
    /// ** Panics if any source is `>= n` **
    ///
    /// # Examples
    /// ```
    /// use adjgraph::{prelude::*, algo::*};
    ///
    /// let g = AdjListUndir::from_edges(5, [(0, 1), (1, 2), (2, 3)]);
    /// let tree = g.bfs_distances([0, 3]);
    ///
    /// assert_eq!(tree.distances(), &[Some(0), Some(1), Some(1), Some(0), None]);
    /// assert_eq!(tree.path_to(2), Some(vec![3, 2]));
    /// assert_eq!(tree.path_to(4), None);
    /// ```
    fn bfs_distances<I>(&self, sources: I) -> ShortestPathTree
    where
        I: IntoIterator<Item = Node>,
    {
        let _span = debug_span!("bfs_distances", n = self.number_of_nodes()).entered();

        let mut tree = ShortestPathTree::new(self.number_of_nodes());
        let mut queue = VecDeque::new();

        for s in sources {
            if tree.dist[s as usize].is_none() {
                tree.dist[s as usize] = Some(0);
                queue.push_back(s);
            }
        }

        while let Some(u) = queue.pop_front() {
            let next = tree.dist[u as usize].map(|d| d + 1);
            for v in self.neighbors_of(u) {
                if tree.dist[v as usize].is_none() {
                    tree.dist[v as usize] = next;
                    tree.parent[v as usize] = Some(u);
                    queue.push_back(v);
                }
            }
        }

        debug!(
            reached = tree.dist.iter().filter(|d| d.is_some()).count(),
            "bfs finished"
        );
        tree
    }

    /// Runs a `0-1 BFS` from all `sources` simultaneously: edges of weight `0` are taken
    /// before finishing the current distance level, edges of weight `1` extend it.
    ///
    /// Fails with [`GraphError::UnsupportedWeight`] if any edge of the graph has a weight
    /// other than `0` or `1`. This is *not* a general shortest path algorithm.
    ///
    /// ** Panics if any source is `>= n` **
    ///
    /// # Examples
    /// ```
    /// use adjgraph::{prelude::*, algo::*};
    ///
    /// let mut g = AdjList::new(4);
    /// g.add_weighted_edge(0, 1, 1);
    /// g.add_weighted_edge(1, 2, 1);
    /// g.add_weighted_edge(0, 3, 0);
    /// g.add_weighted_edge(3, 2, 0);
    ///
    /// let tree = g.zero_one_distances([0]).unwrap();
    /// assert_eq!(tree.distance_to(2), Some(0));
    /// assert_eq!(tree.path_to(2), Some(vec![0, 3, 2]));
    ///
    /// g.add_weighted_edge(2, 0, 5);
    /// assert!(g.zero_one_distances([0]).is_err());
    /// ```
    fn zero_one_distances<I>(&self, sources: I) -> Result<ShortestPathTree, GraphError>
    where
        I: IntoIterator<Item = Node>,
    {
        let _span = debug_span!("zero_one_distances", n = self.number_of_nodes()).entered();

        if let Some(WeightedEdge(from, to, weight)) = self.weighted_edges(false).find(|e| e.2 > 1)
        {
            return Err(GraphError::UnsupportedWeight { from, to, weight });
        }

        let mut tree = ShortestPathTree::new(self.number_of_nodes());
        let mut done = self.vertex_bitset_unset();
        let mut deque = VecDeque::new();

        for s in sources {
            if tree.dist[s as usize].is_none() {
                tree.dist[s as usize] = Some(0);
                deque.push_back(s);
            }
        }

        while let Some(u) = deque.pop_front() {
            // a node may be queued once per improvement, only the first pop is final
            if done.set_bit(u) {
                continue;
            }

            let Some(du) = tree.dist[u as usize] else {
                continue;
            };

            for nb in self.arcs_of(u) {
                let candidate = du + nb.weight;
                if tree.dist[nb.node as usize].is_none_or(|dv| candidate < dv) {
                    tree.dist[nb.node as usize] = Some(candidate);
                    tree.parent[nb.node as usize] = Some(u);
                    if nb.weight == 0 {
                        deque.push_front(nb.node);
                    } else {
                        deque.push_back(nb.node);
                    }
                }
            }
        }

        debug!(reached = done.cardinality(), "0-1 bfs finished");
        Ok(tree)
    }
}

impl<G> Distances for G where G: AdjacencyList + Sized {}

#[cfg(test)]
mod test {
    use itertools::Itertools;
    use quickcheck_macros::quickcheck;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::gens::*;

    #[test]
    fn four_cycle() {
        let graph = AdjMatrixUndir::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]);
        let tree = graph.bfs_distances([0]);

        assert_eq!(tree.distances(), &[Some(0), Some(1), Some(2), Some(1)]);
        assert_eq!(tree.parent_of(0), None);
        assert_eq!(tree.path_to(2).unwrap().len(), 3);
    }

    #[test]
    fn duplicate_sources() {
        let graph = AdjList::from_edges(3, [(0, 1), (1, 2)]);
        let tree = graph.bfs_distances([0, 0, 1]);
        assert_eq!(tree.distances(), &[Some(0), Some(0), Some(1)]);
        assert_eq!(tree.path_to(2), Some(vec![1, 2]));
    }

    #[test]
    fn zero_one_prefers_zero_edges() {
        // 0 -1-> 1 -1-> 2 -1-> 3 and a zero-weight detour 0 -0-> 4 -0-> 5 -1-> 3
        let graph = AdjList::try_from_weighted_edges(
            6,
            [
                (0, 1, 1),
                (1, 2, 1),
                (2, 3, 1),
                (0, 4, 0),
                (4, 5, 0),
                (5, 3, 1),
            ],
        )
        .unwrap();

        let tree = graph.zero_one_distances([0]).unwrap();
        assert_eq!(
            tree.distances(),
            &[Some(0), Some(1), Some(2), Some(1), Some(0), Some(0)]
        );
        assert_eq!(tree.path_to(3), Some(vec![0, 4, 5, 3]));
    }

    #[test]
    fn zero_one_rejects_other_weights() {
        let graph = AdjListUndir::try_from_weighted_edges(3, [(0, 1, 0), (1, 2, 2)]).unwrap();
        assert_eq!(
            graph.zero_one_distances([0]),
            Err(GraphError::UnsupportedWeight {
                from: 1,
                to: 2,
                weight: 2
            })
        );
    }

    /// Bellman-Ford style reference: relax all edges `n` times
    fn reference_distances<G: AdjacencyList>(graph: &G, source: Node) -> Vec<Option<Weight>> {
        let mut dist = vec![None; graph.len()];
        dist[source as usize] = Some(0);
        for _ in graph.vertices() {
            for WeightedEdge(u, v, w) in graph.weighted_edges(false).collect_vec() {
                if let Some(du) = dist[u as usize] {
                    if dist[v as usize].is_none_or(|dv: Weight| du + w < dv) {
                        dist[v as usize] = Some(du + w);
                    }
                }
            }
        }
        dist
    }

    #[test]
    fn zero_one_matches_reference() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);

        for _ in 0..30 {
            let n = rng.random_range(1..40);
            let graph: AdjList = Gnp::new()
                .nodes(n)
                .prob(0.1)
                .weights(0..=1)
                .graph(rng);

            let source = rng.random_range(0..n);
            let tree = graph.zero_one_distances([source]).unwrap();
            assert_eq!(tree.distances(), reference_distances(&graph, source));

            for u in graph.vertices() {
                if let Some(path) = tree.path_to(u) {
                    let cost: Weight = path
                        .iter()
                        .tuple_windows()
                        .map(|(&a, &b)| graph.weight_of(a, b).unwrap())
                        .sum();
                    assert_eq!(Some(cost), tree.distance_to(u));
                }
            }
        }
    }

    #[quickcheck]
    fn bfs_paths_are_shortest_and_valid(edges: Vec<(u8, u8)>, source: u8) -> bool {
        let n = 16;
        let graph = AdjList::from_edges(
            n,
            edges.iter().map(|&(u, v)| (u as Node % n, v as Node % n)),
        );
        let source = source as Node % n;

        let tree = graph.bfs_distances([source]);
        let reference = reference_distances(&graph, source);

        graph.vertices().all(|u| match tree.path_to(u) {
            None => reference[u as usize].is_none(),
            Some(path) => {
                path.len() as Weight == tree.distance_to(u).unwrap() + 1
                    && path[0] == source
                    && path.iter().tuple_windows().all(|(&a, &b)| graph.has_edge(a, b))
                    && reference[u as usize] == tree.distance_to(u)
            }
        })
    }
}
