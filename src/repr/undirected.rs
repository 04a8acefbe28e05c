use crate::{repr::macros::impl_common_graph_ops, testing::test_graph_ops};

use super::*;

/// An undirected graph representation.
///
/// Every edge `{u, v}` with `u != v` is stored in both neighborhoods with the same id,
/// a loop `{u, u}` is stored once.
#[derive(Debug, Clone)]
pub struct UndirectedGraph<Nbs: Neighborhood> {
    nbs: Vec<Nbs>,
    num_edges: NumEdges,
    next_edge_id: EdgeId,
}

/// Representation using adjacency lists
pub type AdjListUndir = UndirectedGraph<ListNeighborhood>;

/// Representation using sparse adjacency lists
pub type SparseAdjListUndir = UndirectedGraph<SparseListNeighborhood>;

/// Representation using an adjacency matrix
pub type AdjMatrixUndir = UndirectedGraph<MatrixNeighborhood>;

impl_common_graph_ops!(UndirectedGraph<Nbs> => nbs, Undirected);

impl<Nbs: Neighborhood> GraphEdgeEditing for UndirectedGraph<Nbs> {
    fn try_add_weighted_edge(
        &mut self,
        u: Node,
        v: Node,
        weight: Weight,
    ) -> Result<EdgeId, GraphError> {
        check_new_edge(self, u, v, weight)?;

        let id = match self.nbs[u as usize].insert_arc(Neighbor::new(v, weight, self.next_edge_id))
        {
            Some(existing) => existing,
            None => {
                self.next_edge_id += 1;
                self.num_edges += 1;
                self.next_edge_id - 1
            }
        };

        if u != v {
            self.nbs[v as usize].insert_arc(Neighbor::new(u, weight, id));
        }

        Ok(id)
    }

    fn try_remove_edge(&mut self, u: Node, v: Node) -> bool {
        if let Some(id) = self.nbs[u as usize].remove_arc(v, None) {
            if u != v {
                assert!(self.nbs[v as usize].remove_arc(u, Some(id)).is_some());
            }
            self.num_edges -= 1;
            true
        } else {
            false
        }
    }
}

// ---------- Testing ----------

test_graph_ops!(test_adj_list_undir, AdjListUndir, true, true);
test_graph_ops!(test_sparse_adj_list_undir, SparseAdjListUndir, true, true);
test_graph_ops!(test_adj_matrix_undir, AdjMatrixUndir, true, false);
