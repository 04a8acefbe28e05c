use tracing::{debug, debug_span};

use super::*;

/// Computes cut vertices of undirected graphs
pub trait ArticulationPoints: GraphType<Dir = Undirected> {
    /// Returns the set of articulation points, i.e. nodes whose removal increases the number
    /// of connected components. All components of the graph are searched.
    ///
    /// # Examples
    /// ```
    /// use adjgraph::{prelude::*, algo::*};
    ///
    /// // two triangles sharing node 2
    /// let g = AdjListUndir::from_edges(5, [(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 2)]);
    /// assert_eq!(g.compute_articulation_points().iter_set_bits().collect::<Vec<_>>(), vec![2]);
    /// ```
    fn compute_articulation_points(&self) -> NodeBitSet;
}

impl<G> ArticulationPoints for G
where
    G: AdjacencyList + GraphType<Dir = Undirected>,
{
    fn compute_articulation_points(&self) -> NodeBitSet {
        let _span =
            debug_span!("compute_articulation_points", n = self.number_of_nodes()).entered();

        let aps = ArticulationPointSearch::new(self).compute();

        debug!(articulation_points = aps.cardinality(), "articulation points computed");
        aps
    }
}

/// Low-link search with an explicit stack. Every stack frame remembers the id of the tree edge
/// that entered its node; only this very edge is ignored when looking for back edges.
struct ArticulationPointSearch<'a, G>
where
    G: AdjacencyList + GraphType<Dir = Undirected>,
{
    graph: &'a G,
    low_point: Vec<NumNodes>,
    dfs_num: Vec<NumNodes>,
    visited: NodeBitSet,
    articulation_points: NodeBitSet,
    current_dfs_num: NumNodes,
}

impl<'a, G> ArticulationPointSearch<'a, G>
where
    G: AdjacencyList + GraphType<Dir = Undirected>,
{
    fn new(graph: &'a G) -> Self {
        let n = graph.number_of_nodes();
        Self {
            graph,
            low_point: vec![0; n as usize],
            dfs_num: vec![0; n as usize],
            visited: NodeBitSet::new(n),
            articulation_points: NodeBitSet::new(n),
            current_dfs_num: 0,
        }
    }

    fn visit(&mut self, u: Node) {
        self.visited.set_bit(u);
        self.dfs_num[u as usize] = self.current_dfs_num;
        self.low_point[u as usize] = self.current_dfs_num;
        self.current_dfs_num += 1;
    }

    fn compute(mut self) -> NodeBitSet {
        let graph = self.graph;
        let mut stack = Vec::new();

        for root in graph.vertices_range() {
            if self.visited.get_bit(root) {
                continue;
            }

            self.visit(root);
            stack.push((root, None, graph.arcs_of(root)));

            // counts number of tree neighbors of the root
            let mut root_children = 0;

            while let Some((u, entered_by, arcs)) = stack.last_mut() {
                let u = *u;

                if let Some(nb) = arcs.next() {
                    if Some(nb.edge) == *entered_by {
                        continue;
                    }

                    let v = nb.node;
                    if self.visited.get_bit(v) {
                        // back edge
                        self.low_point[u as usize] =
                            self.low_point[u as usize].min(self.dfs_num[v as usize]);
                    } else {
                        self.visit(v);
                        stack.push((v, Some(nb.edge), graph.arcs_of(v)));
                    }
                    continue;
                }

                stack.pop();
                let Some((parent, _, _)) = stack.last() else {
                    continue;
                };
                let parent = *parent;

                self.low_point[parent as usize] =
                    self.low_point[parent as usize].min(self.low_point[u as usize]);

                if parent == root {
                    root_children += 1;
                } else if self.low_point[u as usize] >= self.dfs_num[parent as usize] {
                    self.articulation_points.set_bit(parent);
                }
            }

            if root_children > 1 {
                self.articulation_points.set_bit(root);
            }
        }

        self.articulation_points
    }
}
