/*!
Depth-first search forests with discovery and finishing timestamps.

The search simulates the classic recursive DFS with an explicit stack of
`(node, remaining neighbors)` frames, so deep graphs do not overflow the call stack.
*/

use itertools::Itertools;
use tracing::{debug, debug_span};

use super::*;

/// DFS timestamps. A node is discovered at `time_in` and finished at `time_out`;
/// every timestamp in `0..2n` is used exactly once.
pub type Time = u64;

/// The result of a full depth-first search over all nodes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DfsForest {
    time_in: Vec<Time>,
    time_out: Vec<Time>,
    parent: Vec<Option<Node>>,
    finish_order: Vec<Node>,
}

impl DfsForest {
    /// Time at which `u` was discovered
    pub fn time_in(&self, u: Node) -> Time {
        self.time_in[u as usize]
    }

    /// Time at which `u` was finished
    pub fn time_out(&self, u: Node) -> Time {
        self.time_out[u as usize]
    }

    /// Parent of `u` in the forest; roots have none
    pub fn parent_of(&self, u: Node) -> Option<Node> {
        self.parent[u as usize]
    }

    /// All nodes ordered by increasing finishing time
    pub fn finish_order(&self) -> &[Node] {
        &self.finish_order
    }

    /// Roots of the forest in the order they were started
    pub fn roots(&self) -> impl Iterator<Item = Node> + '_ {
        let mut roots = (0..self.parent.len() as Node)
            .filter(|&u| self.parent[u as usize].is_none())
            .collect_vec();
        roots.sort_unstable_by_key(|&u| self.time_in[u as usize]);
        roots.into_iter()
    }

    /// Returns *true* if `u` is an ancestor of `v` in the forest (every node is its own ancestor)
    pub fn is_ancestor(&self, u: Node, v: Node) -> bool {
        self.time_in(u) <= self.time_in(v) && self.time_out(v) <= self.time_out(u)
    }

    /// Path from the root of `u`'s tree down to `u`
    pub fn tree_path_to(&self, u: Node) -> Vec<Node> {
        walk_back(u, |v| self.parent_of(v))
    }
}

/// Depth-first search over the whole graph
pub trait DepthFirstSearch: AdjacencyList + Sized {
    /// Computes a DFS forest, starting new trees at unvisited nodes in increasing order.
    /// Neighbors are explored in the order of [`AdjacencyList::neighbors_of`].
    ///
    /// # Examples
    /// ```
    /// use adjgraph::{prelude::*, algo::*};
    ///
    /// let g = AdjList::from_edges(4, [(0, 1), (1, 2), (0, 2)]);
    /// let forest = g.dfs_forest();
    ///
    /// assert_eq!(forest.finish_order(), &[2, 1, 0, 3]);
    /// assert_eq!(forest.parent_of(2), Some(1));
    /// assert!(forest.is_ancestor(0, 2));
    /// assert_eq!(forest.roots().collect::<Vec<_>>(), vec![0, 3]);
    /// ```
    fn dfs_forest(&self) -> DfsForest {
        let _span = debug_span!("dfs_forest", n = self.number_of_nodes()).entered();

        let n = self.len();
        let mut forest = DfsForest {
            time_in: vec![0; n],
            time_out: vec![0; n],
            parent: vec![None; n],
            finish_order: Vec::with_capacity(n),
        };

        let mut visited = self.vertex_bitset_unset();
        let mut time: Time = 0;
        let mut stack = Vec::new();

        for root in self.vertices_range() {
            if visited.set_bit(root) {
                continue;
            }

            forest.time_in[root as usize] = time;
            time += 1;
            stack.push((root, self.neighbors_of(root)));

            while let Some((u, neighbors)) = stack.last_mut() {
                let u = *u;
                if let Some(v) = neighbors.find(|&v| !visited.get_bit(v)) {
                    visited.set_bit(v);
                    forest.parent[v as usize] = Some(u);
                    forest.time_in[v as usize] = time;
                    time += 1;
                    stack.push((v, self.neighbors_of(v)));
                } else {
                    forest.time_out[u as usize] = time;
                    time += 1;
                    forest.finish_order.push(u);
                    stack.pop();
                }
            }
        }

        debug!(roots = forest.parent.iter().filter(|p| p.is_none()).count(), "dfs finished");
        forest
    }

    /// Returns the nodes in topological order (every edge points forward) or `None`
    /// if the graph contains a directed cycle. Computed as the reverse finishing order.
    ///
    /// # Examples
    /// ```
    /// use adjgraph::{prelude::*, algo::*};
    ///
    /// let mut g = AdjList::from_edges(4, [(2, 0), (0, 1), (3, 1)]);
    /// assert_eq!(g.topological_order(), Some(vec![3, 2, 0, 1]));
    ///
    /// g.add_edge(1, 2);
    /// assert_eq!(g.topological_order(), None);
    /// ```
    fn topological_order(&self) -> Option<Vec<Node>>
    where
        Self: GraphType<Dir = Directed>,
    {
        if self.has_cycle() {
            return None;
        }

        let mut order = self.dfs_forest().finish_order;
        order.reverse();
        Some(order)
    }
}

impl<G> DepthFirstSearch for G where G: AdjacencyList + Sized {}
