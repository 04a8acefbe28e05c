/*!
Cycle detection with witnesses.

Directed graphs use the three-color DFS: reaching a node that is still on the stack closes a
cycle. Undirected graphs use the same search but never walk back along the edge (by id) they
entered a node with, so a pair of parallel edges or a loop is reported as a cycle while a single
edge is not.
*/

use tracing::{debug, debug_span};

use super::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Color {
    Unvisited,
    Active,
    Finished,
}

/// Finds cycles in directed and undirected graphs
pub trait CycleDetection: AdjacencyList + GraphType + Sized {
    /// Returns a closed walk `[v_0, v_1, ..., v_k, v_0]` along edges of the graph that visits
    /// no node twice except `v_0`, or `None` if the graph is acyclic (a forest if undirected).
    ///
    /// # Examples
    /// ```
    /// use adjgraph::{prelude::*, algo::*};
    ///
    /// let g = AdjList::from_edges(4, [(0, 1), (1, 2), (2, 0), (2, 3)]);
    /// assert_eq!(g.find_cycle(), Some(vec![0, 1, 2, 0]));
    ///
    /// let g = AdjListUndir::from_edges(3, [(0, 1), (1, 2)]);
    /// assert_eq!(g.find_cycle(), None);
    /// ```
    fn find_cycle(&self) -> Option<Vec<Node>> {
        let _span = debug_span!("find_cycle", n = self.number_of_nodes()).entered();

        let mut color = vec![Color::Unvisited; self.len()];
        let mut parent: Vec<Option<Node>> = vec![None; self.len()];
        // (node, id of the edge used to enter it, remaining arcs)
        let mut stack = Vec::new();

        for root in self.vertices_range() {
            if color[root as usize] != Color::Unvisited {
                continue;
            }

            color[root as usize] = Color::Active;
            stack.push((root, None, self.arcs_of(root)));

            while let Some((u, entered_by, arcs)) = stack.last_mut() {
                let (u, entered_by) = (*u, *entered_by);

                let next = arcs.find(|nb| Self::is_directed() || Some(nb.edge) != entered_by);

                match next {
                    Some(nb) => match color[nb.node as usize] {
                        Color::Unvisited => {
                            color[nb.node as usize] = Color::Active;
                            parent[nb.node as usize] = Some(u);
                            stack.push((nb.node, Some(nb.edge), self.arcs_of(nb.node)));
                        }
                        Color::Active => {
                            let mut cycle =
                                walk_back_until(u, nb.node, |v| parent[v as usize])?;
                            cycle.push(nb.node);
                            debug!(len = cycle.len() - 1, "cycle found");
                            return Some(cycle);
                        }
                        Color::Finished => {}
                    },
                    None => {
                        color[u as usize] = Color::Finished;
                        stack.pop();
                    }
                }
            }
        }

        debug!("graph is acyclic");
        None
    }

    /// Returns *true* if the graph contains a cycle
    fn has_cycle(&self) -> bool {
        self.find_cycle().is_some()
    }

    /// Returns *true* if the graph contains no cycle
    fn is_acyclic(&self) -> bool {
        !self.has_cycle()
    }
}

impl<G> CycleDetection for G where G: AdjacencyList + GraphType + Sized {}

#[cfg(test)]
mod test {
    use itertools::Itertools;
    use quickcheck_macros::quickcheck;

    use super::*;
    use crate::gens::*;

    /// Checks that `cycle` is closed, uses edges of `graph` and repeats only its first node
    fn is_valid_witness<G: AdjacencyTest>(graph: &G, cycle: &[Node]) -> bool {
        cycle.len() >= 2
            && cycle.first() == cycle.last()
            && cycle.iter().tuple_windows().all(|(&u, &v)| graph.has_edge(u, v))
            && cycle[..cycle.len() - 1].iter().all_unique()
    }

    #[test]
    fn directed_triangle() {
        let graph = AdjList::from_edges(3, [(0, 1), (1, 2), (2, 0)]);
        assert_eq!(graph.find_cycle(), Some(vec![0, 1, 2, 0]));
        assert!(graph.has_cycle());
    }

    #[test]
    fn directed_dag_with_shared_successor() {
        // 0 -> 1 -> 3 and 0 -> 2 -> 3: node 3 is reached twice but there is no cycle
        let graph = AdjMatrix::from_edges(4, [(0, 1), (1, 3), (0, 2), (2, 3)]);
        assert_eq!(graph.find_cycle(), None);
        assert!(graph.is_acyclic());
    }

    #[test]
    fn undirected_triangle() {
        let graph = AdjListUndir::from_edges(3, [(0, 1), (1, 2), (2, 0)]);
        let cycle = graph.find_cycle().unwrap();
        assert_eq!(cycle, vec![0, 1, 2, 0]);
    }

    #[test]
    fn undirected_tree_and_edge_cases() {
        let mut graph = AdjListUndir::new(5);
        graph.connect_path([0, 1, 2, 3]);
        graph.add_edge(1, 4);
        assert!(graph.is_acyclic());

        // a parallel edge closes a cycle of length two
        let mut parallel = graph.clone();
        parallel.add_edge(2, 1);
        let cycle = parallel.find_cycle().unwrap();
        assert!(is_valid_witness(&parallel, &cycle));
        assert_eq!(cycle.len(), 3);

        // matrices overwrite parallel edges
        let mut matrix = AdjMatrixUndir::from_edges(2, [(0, 1)]);
        matrix.add_edge(1, 0);
        assert!(matrix.is_acyclic());

        // loops are cycles
        graph.add_edge(4, 4);
        assert_eq!(graph.find_cycle(), Some(vec![4, 4]));
    }

    #[test]
    fn directed_loop() {
        let graph = AdjList::from_edges(3, [(0, 1), (1, 1)]);
        assert_eq!(graph.find_cycle(), Some(vec![1, 1]));
    }

    #[quickcheck]
    fn directed_witness_iff_not_topologically_sortable(edges: Vec<(u8, u8)>) -> bool {
        let n = 12;
        let graph = AdjList::from_edges(
            n,
            edges.iter().map(|&(u, v)| (u as Node % n, v as Node % n)),
        );

        match graph.find_cycle() {
            Some(cycle) => is_valid_witness(&graph, &cycle),
            // acyclic iff every node lies on no cycle
            None => graph.vertices().all(|u| !graph.is_node_on_cycle(u)),
        }
    }

    #[quickcheck]
    fn undirected_witness_iff_more_edges_than_forest(edges: Vec<(u8, u8)>) -> bool {
        let n = 12;
        let graph =
            AdjListUndir::from_edges(n, edges.iter().map(|&(u, v)| (u as Node % n, v as Node % n)));

        let components = graph.connected_components().count() as NumEdges;
        let is_forest = graph.number_of_edges() + components == n;

        match graph.find_cycle() {
            Some(cycle) => !is_forest && is_valid_witness(&graph, &cycle),
            None => is_forest,
        }
    }
}
