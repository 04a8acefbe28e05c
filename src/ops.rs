/*!
# Graph Operations

Capability traits shared by every graph representation in [`crate::repr`].
Algorithms in [`crate::algo`] are written against these traits only, so any representation
(adjacency list or adjacency matrix, directed or undirected) can be plugged in.
*/

use std::ops::Range;

use itertools::Itertools;

use crate::{error::GraphError, *};

/// Marker for the orientation of a graph
pub trait GraphDir {
    const DIRECTED: bool;
}

/// Edges have an orientation: `(u, v)` and `(v, u)` are distinct
#[derive(Debug, Copy, Clone, Default)]
pub struct Directed;

/// Edges have no orientation: `(u, v)` and `(v, u)` are the same edge
#[derive(Debug, Copy, Clone, Default)]
pub struct Undirected;

impl GraphDir for Directed {
    const DIRECTED: bool = true;
}

impl GraphDir for Undirected {
    const DIRECTED: bool = false;
}

/// Attaches the orientation to a graph type
pub trait GraphType {
    type Dir: GraphDir;

    /// Returns *true* if the graph is directed
    fn is_directed() -> bool {
        Self::Dir::DIRECTED
    }

    /// Returns *true* if the graph is undirected
    fn is_undirected() -> bool {
        !Self::is_directed()
    }
}

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range()
    }

    /// Returns the range of all vertices.
    /// In contrast to self.vertices(), the range does not borrow self and hence may be used
    /// where additional mutable references of self are needed
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        NodeBitSet::new(self.number_of_nodes())
    }

    /// Returns full bitset with one entry per node
    fn vertex_bitset_set(&self) -> NodeBitSet {
        NodeBitSet::new_all_set(self.number_of_nodes())
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an error if `u` is not a vertex of the graph
    fn check_node(&self, u: Node) -> Result<(), GraphError> {
        if u < self.number_of_nodes() {
            Ok(())
        } else {
            Err(GraphError::InvalidVertex {
                vertex: u,
                number_of_nodes: self.number_of_nodes(),
            })
        }
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph.
    /// An undirected edge counts once.
    fn number_of_edges(&self) -> NumEdges;

    /// Returns an upper bound (exclusive) on all edge ids ever handed out.
    /// As ids are never reused, this may exceed `number_of_edges` after removals.
    fn edge_id_bound(&self) -> EdgeId;

    /// Returns empty bitset with one entry per edge id
    fn edge_bitset_unset(&self) -> EdgeBitSet {
        EdgeBitSet::new(self.edge_id_bound())
    }

    /// Returns *true* if the graph has no edges
    fn is_edgeless(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over all adjacency entries of `u`: in insertion order for
    /// list representations, in ascending order of the endpoint for matrix representations.
    /// ** Panics if `u >= n` **
    fn arcs_of(&self, u: Node) -> impl Iterator<Item = Neighbor> + '_;

    /// Returns an iterator over the (open) neighborhood of a given vertex.
    /// Parallel edges yield the same neighbor multiple times.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.arcs_of(u).map(|nb| nb.node)
    }

    /// Returns the number of (outgoing) adjacency entries of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns an iterator over the degrees of all nodes
    fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(|u| self.degree_of(u))
    }

    /// Returns an iterator to all vertices with non-zero degree
    fn vertices_with_neighbors(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices().filter(|&u| self.degree_of(u) > 0)
    }

    /// Returns the maximum degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.degrees().max().unwrap_or(0)
    }

    /// Returns a NodeBitSet of the neighbors of `u`
    /// ** Panics if `u >= n` **
    fn neighbors_of_as_bitset(&self, u: Node) -> NodeBitSet {
        NodeBitSet::new_with_bits_set(self.number_of_nodes(), self.neighbors_of(u))
    }

    /// Returns an iterator over outgoing edges of a given vertex.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.neighbors_of(u)
            .map(move |v| Edge(u, v))
            .filter(move |e| !only_normalized || e.is_normalized())
    }

    /// Returns an iterator over all edges in the graph.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered which
    /// reports every edge of an undirected graph exactly once.
    fn edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.vertices_range()
            .flat_map(move |u| self.edges_of(u, only_normalized))
    }

    /// Returns a sorted vector of all edges in the graph.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn ordered_edges(&self, only_normalized: bool) -> Vec<Edge> {
        let mut edges = self.edges(only_normalized).collect_vec();
        edges.sort_unstable();
        edges
    }

    /// Returns an iterator over all edges with their weights.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn weighted_edges(&self, only_normalized: bool) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.vertices_range().flat_map(move |u| {
            self.arcs_of(u)
                .filter(move |nb| !only_normalized || u <= nb.node)
                .map(move |nb| WeightedEdge(u, nb.node, nb.weight))
        })
    }
}

/// Trait to test existence of certain structures in a graph.
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns the weight of the first stored edge `(u, v)` or `None` if there is none
    /// ** Panics if `u >= n || v >= n` **
    fn weight_of(&self, u: Node, v: Node) -> Option<Weight>;

    /// Returns *true* if the egde (u,v) exists in the graph.
    /// ** Panics if `u >= n || v >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.weight_of(u, v).is_some()
    }

    /// Returns *true* if a self-loop (u,u) exists.
    /// ** Panics if `u >= n` **
    fn has_self_loop(&self, u: Node) -> bool {
        self.has_edge(u, u)
    }
}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates an empty graph with n singleton nodes
    fn new(n: NumNodes) -> Self;
}

/// Provides functions to insert/delete edges
pub trait GraphEdgeEditing: GraphNew {
    /// Adds the edge `(u, v)` with weight `weight` and returns its id.
    /// For an undirected graph, the mirrored entry `(v, u)` shares the id.
    ///
    /// Fails if an endpoint is out of range or `weight == Weight::MAX`.
    /// Representations that store at most one edge per ordered pair overwrite the weight of
    /// an existing edge and return its id.
    fn try_add_weighted_edge(
        &mut self,
        u: Node,
        v: Node,
        weight: Weight,
    ) -> Result<EdgeId, GraphError>;

    /// Adds the edge `(u, v)` with `DEFAULT_WEIGHT` and returns its id.
    fn try_add_edge(&mut self, u: Node, v: Node) -> Result<EdgeId, GraphError> {
        self.try_add_weighted_edge(u, v, DEFAULT_WEIGHT)
    }

    /// Adds the edge `(u, v)` with weight `weight` to the graph.
    /// ** Panics if `u >= n || v >= n` or `weight == Weight::MAX` **
    fn add_weighted_edge(&mut self, u: Node, v: Node, weight: Weight) -> EdgeId {
        match self.try_add_weighted_edge(u, v, weight) {
            Ok(id) => id,
            Err(err) => panic!("cannot add edge ({u},{v}): {err}"),
        }
    }

    /// Adds the edge *(u,v)* with `DEFAULT_WEIGHT` to the graph.
    /// ** Panics if `u >= n || v >= n` **
    fn add_edge(&mut self, u: Node, v: Node) -> EdgeId {
        self.add_weighted_edge(u, v, DEFAULT_WEIGHT)
    }

    /// Adds all edges in the collection
    /// ** Panics if any endpoint is out of range **
    fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) {
        for Edge(u, v) in edges.into_iter().map(|d| d.into()) {
            self.add_edge(u, v);
        }
    }

    /// Adds all weighted edges in the collection, stopping at the first invalid one
    fn try_add_weighted_edges(
        &mut self,
        edges: impl IntoIterator<Item = impl Into<WeightedEdge>>,
    ) -> Result<(), GraphError> {
        for WeightedEdge(u, v, w) in edges.into_iter().map(|d| d.into()) {
            self.try_add_weighted_edge(u, v, w)?;
        }
        Ok(())
    }

    /// Removes one stored edge *(u,v)* from the graph (and its mirrored entry if undirected).
    /// If an edge was removed, returns *true* and *false* otherwise.
    /// ** Panics if u, v >= n **
    fn try_remove_edge(&mut self, u: Node, v: Node) -> bool;

    /// Removes the edge *(u,v)* from the graph.
    /// ** Panics if the edge is not present or u, v >= n **
    fn remove_edge(&mut self, u: Node, v: Node) {
        assert!(self.try_remove_edge(u, v));
    }
}

/// A super trait for creating a graph from scratch from a set of edges and a number of nodes
pub trait GraphFromScratch: Sized {
    /// Create a graph from a number of nodes and an iterator over Edges.
    /// ** Panics if any endpoint is out of range **
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self;

    /// Create a graph from a number of nodes and weighted edges
    fn try_from_weighted_edges(
        n: NumNodes,
        edges: impl IntoIterator<Item = impl Into<WeightedEdge>>,
    ) -> Result<Self, GraphError>;
}

impl<G: GraphNew + GraphEdgeEditing> GraphFromScratch for G {
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self {
        let mut graph = Self::new(n);
        graph.add_edges(edges);
        graph
    }

    fn try_from_weighted_edges(
        n: NumNodes,
        edges: impl IntoIterator<Item = impl Into<WeightedEdge>>,
    ) -> Result<Self, GraphError> {
        let mut graph = Self::new(n);
        graph.try_add_weighted_edges(edges)?;
        Ok(graph)
    }
}
