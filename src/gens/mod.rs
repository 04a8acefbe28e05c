/*!
# Graph Generators

Random and deterministic construction helpers, mainly used to build test instances.

Generators follow a builder-style pattern:

1. Create a generator instance (e.g., `Gnp::new()`).
2. Set parameters (e.g., `.nodes(n).prob(p).weights(0..=1)`).
3. Generate edges via `generate()` / `stream()` or a whole graph via `graph()`.

[`GeneratorSubstructures`] adds paths, cycles and cliques to existing graphs.
*/

use rand::Rng;

use crate::prelude::*;

mod gnp;
mod substructures;

pub use gnp::*;
pub use substructures::*;

/// Trait for generators that allow setting the number of nodes.
pub trait NumNodesGen {
    /// Sets the number of nodes in the graph generator.
    fn nodes(self, n: NumNodes) -> Self;
}

/// General trait for a configurable random edge generator.
///
/// Types implementing this trait can produce a complete edge list,
/// a lazily-evaluated stream (iterator) of edges or a graph.
pub trait GraphGenerator {
    /// Number of nodes of the generated graphs
    fn number_of_nodes(&self) -> NumNodes;

    /// Creates a lazy iterator (stream) over generated edges.
    /// Directed edges `(u, v)` and `(v, u)` are drawn independently.
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = WeightedEdge>
    where
        R: Rng;

    /// Generates a list of random edges by collecting `stream()`.
    fn generate<R>(&self, rng: &mut R) -> Vec<WeightedEdge>
    where
        R: Rng,
    {
        self.stream(rng).collect()
    }

    /// Creates a graph from the generated edges. Undirected graphs only take edges `(u, v)`
    /// with `u <= v` from the stream, so each pair of nodes is drawn once.
    fn graph<G, R>(&self, rng: &mut R) -> G
    where
        G: GraphNew + GraphEdgeEditing + GraphType,
        R: Rng,
    {
        let mut graph = G::new(self.number_of_nodes());
        for WeightedEdge(u, v, w) in self
            .stream(rng)
            .filter(|e| G::is_directed() || e.edge().is_normalized())
        {
            graph.add_weighted_edge(u, v, w);
        }
        graph
    }
}
