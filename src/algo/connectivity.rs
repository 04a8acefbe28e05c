/*!
# Connected Components

- [`ConnectedComponents`] lazily yields the components of an undirected graph.
- [`Connectivity::weakly_connected_components`] ignores edge directions.
- [`StronglyConnectedComponents`] is computed with Kosaraju's algorithm: a first DFS over the
  graph records the finishing order, a second DFS over the transposed graph, started at nodes in
  reverse finishing order, collects one component per tree.
*/

use std::iter::FusedIterator;

use itertools::Itertools;
use tracing::{debug, debug_span};

use super::*;

pub trait Connectivity: AdjacencyList + Traversal + Sized {
    /// Returns an iterator over the connected components of an undirected graph.
    /// Each component is emitted in BFS order starting at its smallest node; components are
    /// emitted in order of their smallest node. Isolated nodes form their own component.
    ///
    /// # Examples
    /// ```
    /// use adjgraph::{prelude::*, algo::*};
    ///
    /// let g = AdjListUndir::from_edges(5, [(0, 3), (1, 2), (3, 4)]);
    /// let ccs: Vec<_> = g.connected_components().collect();
    /// assert_eq!(ccs, vec![vec![0, 3, 4], vec![1, 2]]);
    /// ```
    fn connected_components(&self) -> ConnectedComponents<'_, Self>
    where
        Self: GraphType<Dir = Undirected>,
    {
        ConnectedComponents::new(self)
    }

    /// Returns the connected components of the graph when edge directions are ignored.
    /// Nodes within a component are sorted, components are ordered by their smallest node.
    ///
    /// # Examples
    /// ```
    /// use adjgraph::{prelude::*, algo::*};
    ///
    /// let g = AdjList::from_edges(4, [(0, 1), (2, 1)]);
    /// assert_eq!(g.weakly_connected_components(), vec![vec![0, 1, 2], vec![3]]);
    /// ```
    fn weakly_connected_components(&self) -> Vec<Vec<Node>>
    where
        Self: GraphType,
    {
        let _span =
            debug_span!("weakly_connected_components", n = self.number_of_nodes()).entered();

        let underlying = self.underlying_undirected();
        let components = sort_components(underlying.connected_components().collect_vec());

        debug!(components = components.len(), "weakly connected components computed");
        components
    }

    /// Computes the strongly connected components of a directed graph.
    ///
    /// # Examples
    /// ```
    /// use adjgraph::{prelude::*, algo::*};
    ///
    /// let g = AdjList::from_edges(4, [(0, 1), (1, 0), (1, 2), (2, 3), (3, 2)]);
    /// let sccs = g.strongly_connected_components();
    ///
    /// assert_eq!(sccs.number_of_components(), 2);
    /// assert_eq!(sccs.component_of(0), sccs.component_of(1));
    /// assert_eq!(sort_components(sccs.into_components()), vec![vec![0, 1], vec![2, 3]]);
    /// ```
    fn strongly_connected_components(&self) -> StronglyConnectedComponents
    where
        Self: GraphType<Dir = Directed>,
    {
        StronglyConnectedComponents::new(self)
    }
}

impl<G> Connectivity for G where G: AdjacencyList + Sized {}

/// Iterator over the connected components of an undirected graph
pub struct ConnectedComponents<'a, G>
where
    G: AdjacencyList + GraphType<Dir = Undirected>,
{
    graph: &'a G,
    excluded: NodeBitSet,
    bfs: Option<BFS<'a, G>>,
}

impl<'a, G> ConnectedComponents<'a, G>
where
    G: AdjacencyList + GraphType<Dir = Undirected>,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            excluded: graph.vertex_bitset_unset(),
            bfs: None,
        }
    }

    /// Excludes nodes from all components; they are never emitted and no edge incident to
    /// them is taken. Has no effect once the iterator was advanced.
    pub fn set_exclude_nodes<I>(&mut self, exclude: I)
    where
        I: IntoIterator<Item = Node>,
    {
        if self.bfs.is_none() {
            self.excluded.set_bits(exclude);
        }
    }

    /// Builder variant of [`ConnectedComponents::set_exclude_nodes`]
    pub fn exclude_nodes<I>(mut self, exclude: I) -> Self
    where
        I: IntoIterator<Item = Node>,
    {
        self.set_exclude_nodes(exclude);
        self
    }
}

impl<G> Iterator for ConnectedComponents<'_, G>
where
    G: AdjacencyList + GraphType<Dir = Undirected>,
{
    type Item = Vec<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bfs.is_none() {
            let start = self.excluded.iter_cleared_bits().next()?;
            self.bfs = Some(
                self.graph
                    .bfs(start)
                    .with_nodes_excluded(self.excluded.iter_set_bits()),
            );
        }

        let bfs = self.bfs.as_mut()?;
        loop {
            let cc = bfs.by_ref().collect_vec();
            if !cc.is_empty() {
                return Some(cc);
            }

            if !bfs.try_restart_at_unvisited() {
                return None;
            }
        }
    }
}

impl<G> FusedIterator for ConnectedComponents<'_, G> where
    G: AdjacencyList + GraphType<Dir = Undirected>
{
}

/// Strongly connected components of a directed graph.
///
/// Components are numbered `0..k` in a topological order of the condensation: if some edge
/// leads from component `a` to a different component `b`, then `a < b`. Within a component,
/// nodes are listed in the order the second DFS discovered them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StronglyConnectedComponents {
    component: Vec<NumNodes>,
    components: Vec<Vec<Node>>,
}

impl StronglyConnectedComponents {
    /// Runs Kosaraju's algorithm on `graph`
    pub fn new<G>(graph: &G) -> Self
    where
        G: AdjacencyList + GraphType<Dir = Directed>,
    {
        let _span =
            debug_span!("strongly_connected_components", n = graph.number_of_nodes()).entered();

        let finish_order = graph.dfs_forest().finish_order().to_vec();
        let transposed = AdjList::from_edges(
            graph.number_of_nodes(),
            graph.edges(false).map(|e| e.reverse()),
        );

        let mut component = vec![INVALID_NODE; graph.len()];
        let mut components = Vec::new();
        let mut stack = Vec::new();

        for &root in finish_order.iter().rev() {
            if component[root as usize] != INVALID_NODE {
                continue;
            }

            let id = components.len() as NumNodes;
            let mut members = Vec::new();

            component[root as usize] = id;
            stack.push(root);

            while let Some(u) = stack.pop() {
                members.push(u);
                for v in transposed.neighbors_of(u) {
                    if component[v as usize] == INVALID_NODE {
                        component[v as usize] = id;
                        stack.push(v);
                    }
                }
            }

            components.push(members);
        }

        debug!(components = components.len(), "strongly connected components computed");
        Self {
            component,
            components,
        }
    }

    /// Number of strongly connected components
    pub fn number_of_components(&self) -> NumNodes {
        self.components.len() as NumNodes
    }

    /// Id of the component containing `u`
    /// ** Panics if `u >= n` **
    pub fn component_of(&self, u: Node) -> NumNodes {
        self.component[u as usize]
    }

    /// Component ids of all nodes
    pub fn labels(&self) -> &[NumNodes] {
        &self.component
    }

    /// Nodes of the component with id `id`
    pub fn members_of(&self, id: NumNodes) -> &[Node] {
        &self.components[id as usize]
    }

    /// All components, indexed by their id
    pub fn components(&self) -> &[Vec<Node>] {
        &self.components
    }

    /// Consumes the result and returns all components, indexed by their id
    pub fn into_components(self) -> Vec<Vec<Node>> {
        self.components
    }

    /// Iterates over components that are not singletons or whose node has a self-loop,
    /// i.e. components containing at least one cycle
    pub fn nontrivial_components<'a, G>(
        &'a self,
        graph: &'a G,
    ) -> impl Iterator<Item = &'a [Node]> + 'a
    where
        G: AdjacencyTest,
    {
        self.components
            .iter()
            .filter(move |c| c.len() > 1 || graph.has_self_loop(c[0]))
            .map(|c| c.as_slice())
    }
}

/// Sorts the nodes in each component increasingly and then the components themselves lexicographically.
pub fn sort_components(mut components: Vec<Vec<Node>>) -> Vec<Vec<Node>> {
    components.iter_mut().for_each(|comp| comp.sort_unstable());
    components.sort_by(|a, b| a[0].cmp(&b[0]));
    components
}

#[cfg(test)]
mod test {
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    use super::*;
    use crate::gens::*;

    #[test]
    fn connected_components() {
        let mut graph = AdjListUndir::new(7);
        graph.add_edges([(1, 2), (2, 3), (4, 5)]);

        let ccs = graph.connected_components().collect_vec();
        assert_eq!(ccs, vec![vec![0], vec![1, 2, 3], vec![4, 5], vec![6]]);

        let ccs = graph.connected_components().exclude_nodes([2, 6]).collect_vec();
        assert_eq!(ccs, vec![vec![0], vec![1], vec![3], vec![4, 5]]);

        assert_eq!(AdjListUndir::new(0).connected_components().count(), 0);
    }

    #[test]
    fn weakly_connected() {
        let graph = AdjMatrix::from_edges(6, [(0, 1), (2, 1), (4, 3), (5, 5)]);
        assert_eq!(
            graph.weakly_connected_components(),
            vec![vec![0, 1, 2], vec![3, 4], vec![5]]
        );

        let graph = SparseAdjListUndir::from_edges(3, [(2, 0)]);
        assert_eq!(graph.weakly_connected_components(), vec![vec![0, 2], vec![1]]);
    }

    #[test]
    pub fn scc() {
        let graph = AdjMatrix::from_edges(
            8,
            [
                (0, 1),
                (1, 2),
                (1, 4),
                (1, 5),
                (2, 6),
                (2, 3),
                (3, 2),
                (3, 7),
                (4, 0),
                (4, 5),
                (5, 6),
                (6, 5),
                (7, 3),
                (7, 6),
            ],
        );

        let sccs = graph.strongly_connected_components();
        assert_eq!(sccs.number_of_components(), 3);

        // {0,1,4} -> {2,3,7} -> {5,6}
        assert_eq!(sccs.component_of(0), 0);
        assert_eq!(sccs.component_of(2), 1);
        assert_eq!(sccs.component_of(5), 2);

        let sccs = sort_components(sccs.into_components());
        assert_eq!(sccs[0], [0, 1, 4]);
        assert_eq!(sccs[1], [2, 3, 7]);
        assert_eq!(sccs[2], [5, 6]);
    }

    #[test]
    pub fn scc_singletons() {
        // {0,1} and {4,5} are scc pairs, 2 is a loop, 3 is a singleton
        let graph = AdjMatrix::from_edges(6, [(0, 1), (1, 0), (2, 2), (4, 5), (5, 4)]);

        let sccs = graph.strongly_connected_components();
        assert_eq!(sccs.number_of_components(), 4);

        let nontrivial = sort_components(
            sccs.nontrivial_components(&graph)
                .map(|c| c.to_vec())
                .collect_vec(),
        );
        assert_eq!(nontrivial, vec![vec![0, 1], vec![2], vec![4, 5]]);

        let sccs = sort_components(sccs.into_components());
        assert_eq!(sccs, vec![vec![0, 1], vec![2], vec![3], vec![4, 5]]);
    }

    #[test]
    pub fn scc_tree() {
        let graph = AdjList::from_edges(7, [(0, 1), (1, 2), (1, 3), (1, 4), (3, 5), (3, 6)]);
        let sccs = graph.strongly_connected_components();

        // in a directed tree each vertex is a strongly connected component
        assert_eq!(sccs.number_of_components(), 7);
        assert_eq!(sccs.members_of(0), &[0]);
        assert!(graph.edges(false).all(|Edge(u, v)| sccs.component_of(u) < sccs.component_of(v)));
    }

    #[test]
    fn scc_labels_match_mutual_reachability() {
        let rng = &mut Pcg64::seed_from_u64(1234);

        for i in 0..10 {
            let n = 40;
            let graph: SparseAdjList = Gnp::new().nodes(n).prob(0.01 * i as f64).graph(rng);
            let sccs = graph.strongly_connected_components();

            assert_eq!(sccs.components().iter().map(|c| c.len()).sum::<usize>(), n as usize);

            let reach = graph
                .vertices()
                .map(|u| {
                    let mut set = graph.vertex_bitset_unset();
                    set.set_bits(graph.bfs(u));
                    set
                })
                .collect_vec();

            for u in graph.vertices() {
                for v in graph.vertices() {
                    let mutual = reach[u as usize].get_bit(v) && reach[v as usize].get_bit(u);
                    assert_eq!(mutual, sccs.component_of(u) == sccs.component_of(v));
                }
            }

            for Edge(u, v) in graph.edges(false) {
                assert!(sccs.component_of(u) <= sccs.component_of(v));
            }
        }
    }

    #[test]
    fn scc_long_cycle() {
        // assert that we can deal with very deep stacks
        let n: Node = 10_000;
        let mut graph = AdjList::new(n);
        graph.connect_cycle(0..n);
        let sccs = graph.strongly_connected_components();
        assert_eq!(sccs.number_of_components(), 1);
        assert_eq!(sccs.members_of(0).len(), n as usize);
    }
}
