/*!
# Bipartite Graph Algorithms

This module provides traits and algorithms for working with **bipartite graphs**.

Functionality includes:
- Defining and handling bipartitions of a graph
- Testing whether a graph is bipartite
- Computing a valid bipartition if one exists

A bipartition is proposed by a breadth-first search that puts every node on the side opposite
to its predecessor, and then validated against all edges. Only undirected graphs are considered.
*/

use tracing::{debug, debug_span};

use super::*;

/// A trait for representing a bipartition of the node set.
///
/// - Nodes in the set are considered to be on the **right** (1) side
/// - Nodes not in the set are considered to be on the **left** (0) side
pub trait Bipartition: Set<Node> {
    /// Returns `true` if the node is on the left (0) side of the partition.
    fn is_on_left_side(&self, u: Node) -> bool;

    /// Returns `true` if the node is on the right (1) side of the partition.
    fn is_on_right_side(&self, u: Node) -> bool;
}

impl<B> Bipartition for B
where
    B: Set<Node>,
{
    #[inline]
    fn is_on_left_side(&self, u: Node) -> bool {
        !self.contains(&u)
    }

    #[inline]
    fn is_on_right_side(&self, u: Node) -> bool {
        self.contains(&u)
    }
}

/// A trait for testing and computing bipartitions in undirected graphs.
pub trait BipartiteTest {
    /// Tests whether the given candidate partition is a valid bipartition,
    /// i.e. no edge joins two nodes of the same side. A graph with a loop has none.
    ///
    /// # Examples
    /// ```
    /// use adjgraph::{prelude::*, algo::*, gens::*};
    ///
    /// let mut g = AdjListUndir::new(10);
    /// g.connect_path(0..10 as Node);
    ///
    /// assert!(g.is_bipartition(&NodeBitSet::new_with_bits_set(10, vec![0 as Node, 2, 4, 6, 8])));
    /// assert!(!g.is_bipartition(&NodeBitSet::new_with_bits_set(10, vec![0 as Node, 1])));
    /// ```
    fn is_bipartition<B>(&self, bipartition: &B) -> bool
    where
        B: Bipartition;

    /// Computes a valid bipartition of the graph, if one exists.
    /// Returns `None` if the graph is not bipartite. The first node of every
    /// connected component is placed on the left side.
    ///
    /// # Examples
    /// ```
    /// use adjgraph::{prelude::*, algo::*, gens::*};
    ///
    /// let mut g = AdjListUndir::new(10);
    /// g.connect_path(0..10 as Node);
    ///
    /// let bip: NodeBitSet = g.compute_bipartition().unwrap();
    /// assert_eq!(bip.cardinality(), 5);
    /// assert!(bip.is_on_left_side(0));
    /// ```
    fn compute_bipartition<B>(&self) -> Option<B>
    where
        B: Bipartition + FromCapacity;

    /// Tests whether the graph is bipartite.
    ///
    /// This is equivalent to checking whether `compute_bipartition` succeeds
    /// when using `NodeBitSet` as the underlying bipartition representation.
    ///
    /// # Examples
    /// ```
    /// use adjgraph::{prelude::*, algo::*, gens::*};
    ///
    /// let mut g = AdjListUndir::new(10);
    /// g.connect_path(0..10 as Node);
    /// assert!(g.is_bipartite());
    ///
    /// g.add_edge(0, 2);
    /// assert!(!g.is_bipartite());
    /// ```
    fn is_bipartite(&self) -> bool {
        self.compute_bipartition::<NodeBitSet>().is_some()
    }
}

impl<G> BipartiteTest for G
where
    G: AdjacencyList + GraphType<Dir = Undirected>,
{
    fn is_bipartition<B>(&self, bipartition: &B) -> bool
    where
        B: Bipartition,
    {
        self.edges(true)
            .all(|Edge(u, v)| bipartition.is_on_left_side(u) != bipartition.is_on_left_side(v))
    }

    fn compute_bipartition<B>(&self) -> Option<B>
    where
        B: Bipartition + FromCapacity,
    {
        let _span = debug_span!("compute_bipartition", n = self.number_of_nodes()).entered();

        let bipartition: B = propose_possibly_illegal_bipartition(self);
        let valid = self.is_bipartition(&bipartition);

        debug!(bipartite = valid, right = bipartition.len(), "bipartition proposed");
        valid.then_some(bipartition)
    }
}

/// Computes a candidate bipartition of the graph using BFS traversal.
///
/// - If the graph is bipartite, the returned partition is valid
/// - If the graph is not bipartite, the returned partition may be invalid
fn propose_possibly_illegal_bipartition<G, B>(graph: &G) -> B
where
    G: AdjacencyList,
    B: Bipartition + FromCapacity,
{
    let n = graph.number_of_nodes() as usize;
    let mut bipartition = B::from_total_used_capacity(n, n);
    if graph.is_empty() {
        return bipartition;
    }

    let mut bfs = graph.bfs_with_predecessor(0);

    loop {
        for (node, pred) in bfs
            .by_ref()
            .filter_map(|x| Some((x.item(), x.predecessor()?)))
        {
            if !bipartition.contains(&pred) {
                bipartition.insert(node);
            }
        }

        if !bfs.try_restart_at_unvisited() {
            break;
        }
    }

    bipartition
}
