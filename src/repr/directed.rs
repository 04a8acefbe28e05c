/*!
# Directed Graph Representations

A directed graph is represented by parameterizing [`DirectedGraph`] with a [`Neighborhood`]
type which controls how the outgoing adjacency of every node is stored.

## Provided Representations

- [`AdjList`]: adjacency lists (`Vec<Neighbor>`).
- [`SparseAdjList`]: adjacency lists using inline small vectors.
- [`AdjMatrix`]: adjacency matrix with one optional cell per ordered pair.
*/

use crate::{repr::macros::impl_common_graph_ops, testing::test_graph_ops};

use super::*;

/// A directed graph storing only **outgoing neighborhoods**.
///
/// # Type parameters
/// - `OutNbs`: [`Neighborhood`] implementation used for outgoing adjacency.
#[derive(Debug, Clone)]
pub struct DirectedGraph<OutNbs>
where
    OutNbs: Neighborhood,
{
    out_nbs: Vec<OutNbs>,
    num_edges: NumEdges,
    next_edge_id: EdgeId,
}

/// Directed graph using adjacency lists.
pub type AdjList = DirectedGraph<ListNeighborhood>;

/// Directed graph using sparse adjacency lists (`SmallVec<[Neighbor; N]>`).
pub type SparseAdjList = DirectedGraph<SparseListNeighborhood>;

/// Directed graph using an adjacency matrix.
pub type AdjMatrix = DirectedGraph<MatrixNeighborhood>;

impl_common_graph_ops!(DirectedGraph<OutNbs> => out_nbs, Directed);

impl<OutNbs> GraphEdgeEditing for DirectedGraph<OutNbs>
where
    OutNbs: Neighborhood,
{
    fn try_add_weighted_edge(
        &mut self,
        u: Node,
        v: Node,
        weight: Weight,
    ) -> Result<EdgeId, GraphError> {
        check_new_edge(self, u, v, weight)?;

        let id = self.next_edge_id;
        if let Some(existing) = self.out_nbs[u as usize].insert_arc(Neighbor::new(v, weight, id)) {
            return Ok(existing);
        }

        self.next_edge_id += 1;
        self.num_edges += 1;
        Ok(id)
    }

    fn try_remove_edge(&mut self, u: Node, v: Node) -> bool {
        if self.out_nbs[u as usize].remove_arc(v, None).is_some() {
            self.num_edges -= 1;
            true
        } else {
            false
        }
    }
}

// ---------- Testing ----------

test_graph_ops!(test_adj_list, AdjList, false, true);
test_graph_ops!(test_sparse_adj_list, SparseAdjList, false, true);
test_graph_ops!(test_adj_matrix, AdjMatrix, false, false);
