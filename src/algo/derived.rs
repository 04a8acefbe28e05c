/*!
Graphs derived from other graphs: the transpose, the underlying undirected graph and the
condensation of a directed graph into its strongly connected components.

Derived graphs are new, independent instances; the source graph is never modified.
*/

use itertools::Itertools;
use tracing::{debug, debug_span};

use super::*;

pub trait DerivedGraphs: AdjacencyList + GraphType + Sized {
    /// Returns a graph of the same representation with every edge `(u, v, w)` replaced by
    /// `(v, u, w)`. Edge ids are reassigned in the order edges are enumerated.
    /// Transposing an undirected graph yields a copy.
    ///
    /// # Examples
    /// ```
    /// use adjgraph::{prelude::*, algo::*};
    ///
    /// let g = AdjMatrix::from_edges(3, [(0, 1), (1, 2)]);
    /// let t = g.transposed();
    /// assert_eq!(t.ordered_edges(false), vec![Edge(1, 0), Edge(2, 1)]);
    /// ```
    fn transposed(&self) -> Self
    where
        Self: GraphNew + GraphEdgeEditing,
    {
        let mut transposed = Self::new(self.number_of_nodes());
        for WeightedEdge(u, v, w) in self.weighted_edges(Self::is_undirected()) {
            transposed.add_weighted_edge(v, u, w);
        }
        transposed
    }

    /// Returns the graph with all edge directions dropped, keeping weights and parallel edges.
    /// For an undirected graph this is a copy as an adjacency list.
    ///
    /// # Examples
    /// ```
    /// use adjgraph::{prelude::*, algo::*};
    ///
    /// let g = AdjList::from_edges(3, [(0, 1), (2, 1)]);
    /// let u = g.underlying_undirected();
    /// assert!(u.has_edge(1, 0) && u.has_edge(1, 2));
    /// ```
    fn underlying_undirected(&self) -> AdjListUndir {
        let mut undirected = AdjListUndir::new(self.number_of_nodes());
        for WeightedEdge(u, v, w) in self.weighted_edges(Self::is_undirected()) {
            undirected.add_weighted_edge(u, v, w);
        }
        undirected
    }
}

impl<G> DerivedGraphs for G where G: AdjacencyList + GraphType + Sized {}

/// Builds the condensation of a directed graph: one node per strongly connected component and
/// an edge between two components for every edge of the graph crossing them.
///
/// By default parallel edges between the same pair of components are merged into one edge
/// carrying the smallest weight; [`Condensation::deduplicate`] disables this. A fixed weight
/// for all condensed edges may be set with [`Condensation::weight`].
///
/// # Examples
/// ```
/// use adjgraph::{prelude::*, algo::*};
///
/// let g = AdjList::from_edges(5, [(0, 1), (1, 0), (1, 2), (0, 2), (2, 3), (3, 2), (4, 3)]);
/// let sccs = g.strongly_connected_components();
///
/// let dag = Condensation::new(&g, &sccs).build();
/// assert_eq!(dag.number_of_nodes(), 3);
/// assert_eq!(dag.number_of_edges(), 2);
/// assert!(dag.is_acyclic());
///
/// let multi = Condensation::new(&g, &sccs).deduplicate(false).build();
/// assert_eq!(multi.number_of_edges(), 3);
/// ```
pub struct Condensation<'a, G>
where
    G: AdjacencyList + GraphType<Dir = Directed>,
{
    graph: &'a G,
    sccs: &'a StronglyConnectedComponents,
    deduplicate: bool,
    weight: Option<Weight>,
}

impl<'a, G> Condensation<'a, G>
where
    G: AdjacencyList + GraphType<Dir = Directed>,
{
    /// `sccs` must have been computed on `graph`
    pub fn new(graph: &'a G, sccs: &'a StronglyConnectedComponents) -> Self {
        debug_assert_eq!(sccs.labels().len(), graph.len());
        Self {
            graph,
            sccs,
            deduplicate: true,
            weight: None,
        }
    }

    /// Merge parallel edges between the same pair of components
    pub fn set_deduplicate(&mut self, deduplicate: bool) {
        self.deduplicate = deduplicate;
    }

    /// Builder variant of [`Condensation::set_deduplicate`]
    pub fn deduplicate(mut self, deduplicate: bool) -> Self {
        self.set_deduplicate(deduplicate);
        self
    }

    /// Assign `weight` to every condensed edge instead of the original weights
    pub fn set_weight(&mut self, weight: Weight) {
        self.weight = Some(weight);
    }

    /// Builder variant of [`Condensation::set_weight`]
    pub fn weight(mut self, weight: Weight) -> Self {
        self.set_weight(weight);
        self
    }

    fn cross_edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.graph.weighted_edges(false).filter_map(|WeightedEdge(u, v, w)| {
            let (cu, cv) = (self.sccs.component_of(u), self.sccs.component_of(v));
            (cu != cv).then(|| WeightedEdge(cu, cv, self.weight.unwrap_or(w)))
        })
    }

    /// Returns the condensation. Node `i` of the result is component `i` of the components
    /// this builder was created with.
    pub fn build(&self) -> AdjList {
        let _span =
            debug_span!("condensation", n = self.sccs.number_of_components()).entered();

        let mut edges = self.cross_edges().collect_vec();
        if self.deduplicate {
            edges.sort_unstable_by_key(|e| (e.0, e.1, e.2));
            edges.dedup_by_key(|e| e.edge());
        }

        let mut condensed = AdjList::new(self.sccs.number_of_components());
        for WeightedEdge(u, v, w) in edges {
            condensed.add_weighted_edge(u, v, w);
        }

        debug!(edges = condensed.number_of_edges(), "condensation built");
        condensed
    }

    /// Returns the components without any edge leaving them, in increasing order of their id
    pub fn sink_components(&self) -> Vec<NumNodes> {
        let mut has_out_edge = NodeBitSet::new(self.sccs.number_of_components());
        has_out_edge.set_bits(self.cross_edges().map(|e| e.0));
        has_out_edge.iter_cleared_bits().collect()
    }
}

#[cfg(test)]
mod test {
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    use super::*;
    use crate::gens::*;

    #[test]
    fn transpose_keeps_weights() {
        let graph =
            AdjList::try_from_weighted_edges(4, [(0, 1, 5), (1, 2, 0), (1, 2, 3), (3, 3, 1)])
                .unwrap();
        let transposed = graph.transposed();

        assert_eq!(transposed.number_of_edges(), 4);
        assert_eq!(
            transposed.weighted_edges(false).collect_vec(),
            vec![
                WeightedEdge(1, 0, 5),
                WeightedEdge(2, 1, 0),
                WeightedEdge(2, 1, 3),
                WeightedEdge(3, 3, 1)
            ]
        );
        assert_eq!(transposed.transposed().ordered_edges(false), graph.ordered_edges(false));

        let undirected = AdjMatrixUndir::from_edges(3, [(0, 1), (2, 1)]);
        assert_eq!(
            undirected.transposed().ordered_edges(false),
            undirected.ordered_edges(false)
        );
    }

    #[test]
    fn underlying_undirected() {
        let graph = AdjMatrix::from_edges(3, [(0, 1), (1, 0), (2, 2)]);
        let undirected = graph.underlying_undirected();

        assert_eq!(undirected.number_of_edges(), 3);
        assert_eq!(undirected.degree_of(0), 2);
        assert!(undirected.has_self_loop(2));
    }

    #[test]
    fn condensation_is_acyclic_and_covers_cross_edges() {
        let rng = &mut Pcg64::seed_from_u64(8);

        for _ in 0..20 {
            let graph: AdjList = Gnp::new().nodes(30).prob(0.05).graph(rng);
            let sccs = graph.strongly_connected_components();
            let condensed = Condensation::new(&graph, &sccs).build();

            assert_eq!(condensed.number_of_nodes(), sccs.number_of_components());
            assert!(condensed.topological_order().is_some());

            for Edge(u, v) in graph.edges(false) {
                let (cu, cv) = (sccs.component_of(u), sccs.component_of(v));
                assert_eq!(cu == cv, !condensed.has_edge(cu, cv));
            }

            // components are numbered topologically
            assert!(condensed.edges(false).all(|Edge(a, b)| a < b));
        }
    }

    #[test]
    fn weights_and_sinks() {
        // {0, 1} -> {2} with weights 4 and 2, {3} -> {2}
        let graph = AdjList::try_from_weighted_edges(
            4,
            [(0, 1, 1), (1, 0, 1), (0, 2, 4), (1, 2, 2), (3, 2, 7)],
        )
        .unwrap();
        let sccs = graph.strongly_connected_components();
        let builder = Condensation::new(&graph, &sccs);

        let condensed = builder.build();
        let (a, c) = (sccs.component_of(0), sccs.component_of(2));
        assert_eq!(condensed.weight_of(a, c), Some(2));
        assert_eq!(builder.sink_components(), vec![c]);

        let zero = Condensation::new(&graph, &sccs).weight(0).build();
        assert_eq!(zero.weight_of(a, c), Some(0));
    }
}
