/*!
Graph traversal iterators and traversal-derived utilities.

This module provides:
- Generic traversal iterators (BFS, DFS, with and without predecessor tracking).
- `TraversalSearch`, the configurable search behind all of them (stop nodes,
  excluded nodes, restarts).
- A high-level `Traversal` trait that exposes traversal algorithms
  directly as methods on graph data structures.

Traversal iterators are lazy and can be restarted at unvisited nodes, which is
how component iterators cover the whole graph.
*/

use super::*;
use std::{collections::VecDeque, marker::PhantomData};

/// Abstraction for items yielded by a traversal iterator.
///
/// A `SequencedItem` encodes both the **node currently visited**
/// and an **optional predecessor** that represents its parent
/// in the traversal tree.
///
/// Two implementations are provided:
/// - [`Node`]: stores only the node (no predecessor information).
/// - [`PredecessorOfNode`]: stores `(predecessor, node)` pairs.
pub trait SequencedItem: Clone + Copy {
    /// Constructs a new item with a predecessor.
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self;

    /// Constructs a new item without predecessor information.
    fn new_without_predecessor(item: Node) -> Self;

    /// Returns the node represented by this item.
    fn item(&self) -> Node;

    /// Returns the predecessor of this node, if any.
    fn predecessor(&self) -> Option<Node>;

    /// Returns a pair `(predecessor, item)` where the predecessor
    /// may be `None` if not tracked.
    fn predecessor_with_item(&self) -> (Option<Node>, Node) {
        (self.predecessor(), self.item())
    }
}

impl SequencedItem for Node {
    fn new_with_predecessor(_: Node, item: Node) -> Self {
        item
    }
    fn new_without_predecessor(item: Node) -> Self {
        item
    }
    fn item(&self) -> Node {
        *self
    }
    fn predecessor(&self) -> Option<Node> {
        None
    }
}

/// Compact representation of `(predecessor, node)` used for
/// traversals with parent tracking.
///
/// The absence of a predecessor is encoded by setting both entries to the same node.
pub type PredecessorOfNode = (Node, Node);

impl SequencedItem for PredecessorOfNode {
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self {
        (predecessor, item)
    }
    fn new_without_predecessor(item: Node) -> Self {
        (item, item)
    }

    fn item(&self) -> Node {
        self.1
    }

    fn predecessor(&self) -> Option<Node> {
        if self.0 == self.1 { None } else { Some(self.0) }
    }
}

/// Abstraction for the traversal frontier data structure.
///
/// - [`VecDeque`] -> queue semantics -> **BFS**
/// - [`Vec`] -> stack semantics -> **DFS**
pub trait NodeSequencer<T> {
    /// Creates a new sequencer initialized with a single node.
    fn init(u: T) -> Self;

    /// Pushes a node into the frontier.
    fn push(&mut self, item: T);

    /// Removes and returns the next node from the frontier.
    fn pop(&mut self) -> Option<T>;

    /// Returns the number of items currently in the frontier.
    fn cardinality(&self) -> usize;
}

impl<T> NodeSequencer<T> for VecDeque<T> {
    fn init(u: T) -> Self {
        Self::from(vec![u])
    }
    fn push(&mut self, u: T) {
        self.push_back(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

impl<T> NodeSequencer<T> for Vec<T> {
    fn init(u: T) -> Self {
        vec![u]
    }
    fn push(&mut self, u: T) {
        self.push(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

/// Generic traversal iterator supporting BFS and DFS variants.
///
/// Maintains an explicit frontier (queue or stack) of nodes to visit and a set of visited
/// nodes. A node is marked visited when it is pushed, so every node is yielded at most once.
///
/// Note that the stack variant yields a valid *search* order but not the classic recursive
/// preorder; [`DepthFirstSearch::dfs_forest`] computes the latter including timestamps.
pub struct TraversalSearch<'a, G, S, I, V>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
    V: Set<Node>,
{
    graph: &'a G,
    visited: V,
    sequencer: S,
    stop_at: Option<Node>,
    _item: PhantomData<I>,
}

/// A BFS traversal iterator over the graph, visiting nodes in
/// breadth-first order from a given starting node.
pub type BFS<'a, G> = TraversalSearch<'a, G, VecDeque<Node>, Node, NodeBitSet>;

/// A DFS traversal iterator over the graph, visiting nodes in
/// depth-first order from a given starting node.
pub type DFS<'a, G> = TraversalSearch<'a, G, Vec<Node>, Node, NodeBitSet>;

/// A BFS traversal iterator that records predecessor information,
/// producing a spanning tree of the search.
pub type BFSWithPredecessor<'a, G> =
    TraversalSearch<'a, G, VecDeque<PredecessorOfNode>, PredecessorOfNode, NodeBitSet>;

/// A DFS traversal iterator that records predecessor information,
/// producing a spanning tree of the search.
pub type DFSWithPredecessor<'a, G> =
    TraversalSearch<'a, G, Vec<PredecessorOfNode>, PredecessorOfNode, NodeBitSet>;

impl<G, S, I, V> Iterator for TraversalSearch<'_, G, S, I, V>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
    V: Set<Node>,
{
    type Item = I;

    fn next(&mut self) -> Option<Self::Item> {
        let popped = self.sequencer.pop()?;
        let u = popped.item();

        if self.stop_at == Some(u) {
            while self.sequencer.pop().is_some() {} // drop all
        } else {
            for v in self.graph.neighbors_of(u) {
                if !self.visited.insert(v) {
                    self.sequencer.push(I::new_with_predecessor(u, v));
                }
            }
        }

        Some(popped)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (
            self.sequencer.cardinality(),
            Some(self.graph.len() - self.visited.len() + self.sequencer.cardinality()),
        )
    }
}

impl<'a, G, S, I, V> TraversalSearch<'a, G, S, I, V>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
    V: Set<Node> + FromCapacity,
{
    /// Creates a new traversal iterator starting from `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        let len = graph.len();
        let mut visited = V::from_total_used_capacity(len, len);
        visited.insert(start);
        Self {
            graph,
            visited,
            sequencer: S::init(I::new_without_predecessor(start)),
            stop_at: None,
            _item: PhantomData,
        }
    }
}

impl<G, S, I, V> TraversalSearch<'_, G, S, I, V>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
    V: Set<Node>,
{
    /// Tries to restart the search at an yet unvisited node and returns
    /// true iff successful. Requires that search came to a hold earlier,
    /// i.e. self.next() returned None
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        assert_eq!(self.sequencer.cardinality(), 0);
        let node = self.graph.vertices().find(|u| !self.visited.contains(u));
        match node {
            None => false,
            Some(x) => {
                tracing::trace!(node = x, "restart traversal");
                self.visited.insert(x);
                self.sequencer.push(I::new_without_predecessor(x));
                true
            }
        }
    }

    /// Sets a stopper node. If this node is reached, the iterator returns it and afterwards only None.
    pub fn set_stop_at(&mut self, stopper: Node) {
        self.stop_at = Some(stopper);
    }

    /// Sets a stopper node. If this node is reached, the iterator returns it and afterwards only None.
    pub fn stop_at(mut self, stopper: Node) -> Self {
        self.set_stop_at(stopper);
        self
    }

    /// Excludes a node from the search. It will be treated as if it was already visited,
    /// i.e. no edges to or from that node will be taken.
    ///
    /// # Warning
    /// Calling this method has no effect if the node is already on the stack. It is therefore highly
    /// recommended to call this method directly after the constructor.
    pub fn exclude_node(&mut self, u: Node) {
        self.visited.insert(u);
    }

    /// Builder variant of [`TraversalSearch::exclude_node`].
    pub fn with_node_excluded(mut self, u: Node) -> Self {
        self.exclude_node(u);
        self
    }

    /// Exclude multiple nodes from traversal. It is functionally equivalent to repeatedly
    /// calling [`TraversalSearch::exclude_node`].
    pub fn exclude_nodes<N>(&mut self, us: N)
    where
        N: IntoIterator<Item = Node>,
    {
        for u in us {
            self.exclude_node(u);
        }
    }

    /// Builder variant of [`TraversalSearch::exclude_nodes`].
    pub fn with_nodes_excluded<N>(mut self, us: N) -> Self
    where
        N: IntoIterator<Item = Node>,
    {
        self.exclude_nodes(us);
        self
    }

    /// Consumes the traversal search and returns true iff the requested node can be visited, i.e.
    /// if there exists a path with at least one edge from the start node to u.
    ///
    /// # Warning
    /// The result is meaningless for a partially executed iterator.
    pub fn is_node_reachable(mut self, u: Node) -> bool {
        assert_eq!(self.sequencer.cardinality(), 1);
        self.visited.remove(&u);
        self.next();
        self.any(|v| v.item() == u)
    }
}

/// Provides convenient traversal methods (BFS, DFS, shortest paths)
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **breadth-first search (BFS) order**.
    ///
    /// # Examples
    /// ```
    /// use adjgraph::{prelude::*, algo::*};
    ///
    /// let g = AdjListUndir::from_edges(2, [(0, 1)]);
    ///
    /// let order: Vec<_> = g.bfs(0).collect();
    /// assert_eq!(order, vec![0, 1]);
    /// ```
    fn bfs(&self, start: Node) -> BFS<'_, Self> {
        BFS::new(self, start)
    }

    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **depth-first search (DFS) order**.
    ///
    /// # Examples
    /// ```
    /// use adjgraph::{prelude::*, algo::*};
    ///
    /// let g = AdjListUndir::from_edges(2, [(0, 1)]);
    ///
    /// let order: Vec<_> = g.dfs(0).collect();
    /// assert_eq!(order, vec![0, 1]);
    /// ```
    fn dfs(&self, start: Node) -> DFS<'_, Self> {
        DFS::new(self, start)
    }

    /// Returns a BFS iterator starting from `start` that additionally
    /// yields the predecessor relation (edges traversed).
    ///
    /// # Examples
    /// ```
    /// use adjgraph::{prelude::*, algo::*};
    ///
    /// let g = AdjListUndir::from_edges(2, [(0, 1)]);
    ///
    /// let mut it = g.bfs_with_predecessor(0);
    /// assert_eq!(it.next().unwrap().item(), 0);
    /// assert_eq!(it.next().unwrap().predecessor(), Some(0));
    /// ```
    fn bfs_with_predecessor(&self, start: Node) -> BFSWithPredecessor<'_, Self> {
        BFSWithPredecessor::new(self, start)
    }

    /// Returns a DFS iterator starting from `start` that additionally
    /// yields the predecessor relation (edges traversed).
    fn dfs_with_predecessor(&self, start: Node) -> DFSWithPredecessor<'_, Self> {
        DFSWithPredecessor::new(self, start)
    }

    /// Returns `true` if node `u` lies on a directed cycle, i.e. `u` can reach itself
    /// using at least one edge.
    ///
    /// # Examples
    /// ```
    /// use adjgraph::{prelude::*, algo::*};
    ///
    /// let g = AdjList::from_edges(3, [(0, 1), (1, 2), (2, 1)]);
    /// assert!(!g.is_node_on_cycle(0));
    /// assert!(g.is_node_on_cycle(1));
    /// ```
    fn is_node_on_cycle(&self, u: Node) -> bool
    where
        Self: GraphType<Dir = Directed>,
    {
        self.bfs(u).is_node_reachable(u)
    }

    /// Computes a **shortest path** (by number of edges) from `start` to `end` using BFS.
    ///
    /// - Returns `Some(path)` with `path[0] == start` and `path.last() == end`.
    /// - Returns `None` if `end` is unreachable.
    ///
    /// ** Panics if `start >= n || end >= n` **
    ///
    /// # Examples
    /// ```
    /// use adjgraph::{prelude::*, algo::*};
    ///
    /// let g = AdjListUndir::from_edges(4, [(0, 1), (1, 2)]);
    ///
    /// assert_eq!(g.shortest_path(0, 2), Some(vec![0, 1, 2]));
    /// assert_eq!(g.shortest_path(1, 1), Some(vec![1]));
    /// assert_eq!(g.shortest_path(0, 3), None);
    /// ```
    fn shortest_path(&self, start: Node, end: Node) -> Option<Vec<Node>> {
        let mut parent: Vec<Option<Node>> = vec![None; self.len()];
        let mut reached = false;

        for item in self.bfs_with_predecessor(start).stop_at(end) {
            parent[item.item() as usize] = item.predecessor();
            reached |= item.item() == end;
        }

        reached.then(|| walk_back(end, |u| parent[u as usize]))
    }
}

impl<G> Traversal for G where G: AdjacencyList + Sized {}
