use tracing::{debug, debug_span};

use super::*;

/// An edge whose removal disconnects its endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Bridge {
    /// Id the edge was assigned on insertion
    pub id: EdgeId,
    /// Endpoints of the edge, normalized such that `edge.0 <= edge.1`
    pub edge: Edge,
}

pub trait Bridges: GraphType<Dir = Undirected> {
    /// Returns all bridges of the graph sorted by edge id.
    ///
    /// Parallel edges are distinguished by their ids, so an edge that has a parallel copy is
    /// never a bridge. Loops are never bridges.
    ///
    /// # Examples
    /// ```
    /// use adjgraph::{prelude::*, algo::*};
    ///
    /// let mut g = AdjListUndir::from_edges(4, [(0, 1), (1, 2), (2, 0), (2, 3)]);
    /// assert_eq!(g.compute_bridges(), vec![Bridge { id: 3, edge: Edge(2, 3) }]);
    ///
    /// g.add_edge(3, 2);
    /// assert!(g.compute_bridges().is_empty());
    /// ```
    fn compute_bridges(&self) -> Vec<Bridge>;
}

impl<G> Bridges for G
where
    G: AdjacencyList + GraphType<Dir = Undirected>,
{
    fn compute_bridges(&self) -> Vec<Bridge> {
        let _span = debug_span!("compute_bridges", n = self.number_of_nodes()).entered();

        let mut bridges = BridgeSearch::new(self).compute();
        bridges.sort_unstable();

        debug!(bridges = bridges.len(), "bridges computed");
        bridges
    }
}

struct BridgeSearch<'a, G>
where
    G: AdjacencyList + GraphType<Dir = Undirected>,
{
    graph: &'a G,
    visited: NodeBitSet,
    nodes_info: Vec<NodeInfo>,
    time: NumNodes,
    bridges: Vec<Bridge>,
}

impl<'a, G> BridgeSearch<'a, G>
where
    G: AdjacencyList + GraphType<Dir = Undirected>,
{
    fn new(graph: &'a G) -> Self {
        let n = graph.number_of_nodes();
        Self {
            graph,
            visited: NodeBitSet::new(n),
            nodes_info: vec![NodeInfo::default(); n as usize],
            time: 0,
            bridges: Vec::new(),
        }
    }

    fn visit(&mut self, u: Node) {
        self.visited.set_bit(u);
        self.nodes_info[u as usize] = NodeInfo {
            discovery: self.time,
            low: self.time,
        };
        self.time += 1;
    }

    fn compute(mut self) -> Vec<Bridge> {
        let graph = self.graph;
        // (node, id of the tree edge entering it, remaining arcs)
        let mut stack = Vec::new();

        for root in graph.vertices_with_neighbors() {
            if self.visited.get_bit(root) {
                continue;
            }

            self.visit(root);
            stack.push((root, None, graph.arcs_of(root)));

            while let Some((u, entered_by, arcs)) = stack.last_mut() {
                let u = *u;

                if let Some(nb) = arcs.next() {
                    // only the tree edge itself is skipped, a parallel copy is a back edge
                    if Some(nb.edge) == *entered_by {
                        continue;
                    }

                    let v = nb.node;
                    if self.visited.get_bit(v) {
                        let v_disc = self.nodes_info[v as usize].discovery;
                        self.nodes_info[u as usize].update_low(v_disc);
                    } else {
                        self.visit(v);
                        stack.push((v, Some(nb.edge), graph.arcs_of(v)));
                    }
                    continue;
                }

                let Some((_, Some(id), _)) = stack.pop() else {
                    continue;
                };
                let Some((parent, _, _)) = stack.last() else {
                    continue;
                };
                let parent = *parent;

                let info_u = self.nodes_info[u as usize];
                self.nodes_info[parent as usize].update_low(info_u.low);

                if info_u.low > self.nodes_info[parent as usize].discovery {
                    self.bridges.push(Bridge {
                        id,
                        edge: Edge(parent, u).normalized(),
                    });
                }
            }
        }

        self.bridges
    }
}

#[derive(Clone, Copy, Default)]
struct NodeInfo {
    low: NumNodes,
    discovery: NumNodes,
}

impl NodeInfo {
    fn update_low(&mut self, value: NumNodes) {
        self.low = self.low.min(value);
    }
}

#[cfg(test)]
mod test {
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    use super::*;
    use crate::gens::*;

    fn bridge_edges<G: Bridges>(graph: &G) -> Vec<Edge> {
        graph.compute_bridges().into_iter().map(|b| b.edge).collect_vec()
    }

    #[test]
    fn bridges_in_path() {
        for n in [1, 5, 10, 15] {
            let mut graph = AdjListUndir::new(n);
            for u in 0..(n - 1) {
                graph.add_edge(u, u + 1);
            }

            let bridges = graph.compute_bridges();
            assert_eq!(
                bridges.iter().map(|b| b.id).collect_vec(),
                (0..n - 1).collect_vec()
            );
            assert_eq!(
                bridges.into_iter().map(|b| b.edge).collect_vec(),
                graph.ordered_edges(true)
            );
        }
    }

    #[test]
    fn bridge_in_example() {
        let mut graph = AdjMatrixUndir::new(6);
        graph.add_edges([(0, 1), (0, 2), (2, 1), (1, 3), (3, 4), (4, 5), (5, 3)]);

        assert_eq!(
            graph.compute_bridges(),
            vec![Bridge {
                id: 3,
                edge: Edge(1, 3)
            }]
        );
    }

    #[test]
    fn parallel_edges_are_not_bridges() {
        let mut graph = SparseAdjListUndir::new(4);
        graph.add_edges([(0, 1), (1, 2), (2, 3), (2, 1), (3, 3)]);
        assert_eq!(bridge_edges(&graph), vec![Edge(0, 1), Edge(2, 3)]);

        // the matrix stores a repeated edge once, so it stays a bridge
        let mut graph = AdjMatrixUndir::new(2);
        graph.add_edges([(0, 1), (1, 0)]);
        assert_eq!(bridge_edges(&graph), vec![Edge(0, 1)]);
    }

    #[test]
    fn removal_disconnects_endpoints() {
        let rng = &mut Pcg64::seed_from_u64(17);

        for _ in 0..30 {
            let graph: AdjListUndir = Gnp::new().nodes(30).prob(0.06).graph(rng);
            let bridges = graph.compute_bridges();

            for Edge(u, v) in graph.ordered_edges(true).into_iter().dedup() {
                let mut without = graph.clone();
                without.remove_edge(u, v);
                let disconnected = without.shortest_path(u, v).is_none();

                let is_bridge = bridges.iter().any(|b| b.edge == Edge(u, v));
                assert_eq!(is_bridge, disconnected, "edge {u} {v}");
            }
        }
    }
}
