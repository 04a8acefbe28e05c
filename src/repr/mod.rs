/*!
# Graph Representations

Every representation is a vector of per-node [`Neighborhood`]s wrapped by either a
[`DirectedGraph`] or an [`UndirectedGraph`]. The neighborhood type decides the storage:

| Neighborhood | Space | Enumeration order | Parallel edges |
|---|---|---|---|
| [`ListNeighborhood`] | `O(n + m)` | insertion | kept, one id each |
| [`SparseListNeighborhood`] | `O(n + m)`, inline for small degrees | insertion | kept, one id each |
| [`MatrixNeighborhood`] | `O(n^2)` | ascending endpoint | overwrite weight, keep id |

Self-loops are accepted by every representation; an undirected loop is stored once.
*/

use crate::{error::GraphError, ops::*, *};

mod directed;
mod neighborhood;
mod undirected;

pub use directed::*;
pub use neighborhood::*;
pub use undirected::*;

/// Validates the endpoints and weight of an edge about to be inserted
pub(crate) fn check_new_edge<G: GraphNodeOrder>(
    graph: &G,
    u: Node,
    v: Node,
    weight: Weight,
) -> Result<(), GraphError> {
    graph.check_node(u)?;
    graph.check_node(v)?;
    if weight == Weight::MAX {
        return Err(GraphError::InvalidWeight { weight });
    }
    Ok(())
}

pub(crate) mod macros {
    macro_rules! impl_common_graph_ops {
        ($struct:ident<$generic:ident> => $nbs:ident, $directed:ident) => {
            impl<$generic: Neighborhood> GraphType for $struct<$generic> {
                type Dir = $directed;
            }

            impl<$generic: Neighborhood> GraphNodeOrder for $struct<$generic> {
                fn number_of_nodes(&self) -> NumNodes {
                    self.$nbs.len() as NumNodes
                }
            }

            impl<$generic: Neighborhood> GraphEdgeOrder for $struct<$generic> {
                fn number_of_edges(&self) -> NumEdges {
                    self.num_edges
                }

                fn edge_id_bound(&self) -> EdgeId {
                    self.next_edge_id
                }
            }

            impl<$generic: Neighborhood> AdjacencyList for $struct<$generic> {
                fn arcs_of(&self, u: Node) -> impl Iterator<Item = Neighbor> + '_ {
                    self.$nbs[u as usize].arcs()
                }

                fn degree_of(&self, u: Node) -> NumNodes {
                    self.$nbs[u as usize].num_of_neighbors()
                }
            }

            impl<$generic: Neighborhood> AdjacencyTest for $struct<$generic> {
                fn weight_of(&self, u: Node, v: Node) -> Option<Weight> {
                    self.$nbs[u as usize].weight_of(v)
                }
            }

            impl<$generic: Neighborhood> GraphNew for $struct<$generic> {
                fn new(n: NumNodes) -> Self {
                    Self {
                        $nbs: vec![$generic::new(n); n as usize],
                        num_edges: 0,
                        next_edge_id: 0,
                    }
                }
            }
        };
    }

    pub(crate) use impl_common_graph_ops;
}
