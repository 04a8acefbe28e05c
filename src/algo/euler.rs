/*!
Eulerian trails via Hierholzer's algorithm.

Instead of deleting edges while walking, every node keeps a cursor into its adjacency and every
edge id is marked once used. The trail is built in post-order and reversed at the end.
*/

use itertools::Itertools;
use tracing::{debug, debug_span};

use super::*;

pub trait EulerianTrail: AdjacencyList + GraphEdgeOrder + GraphType + Sized {
    /// Returns a walk that uses every edge exactly once, or `None` if there is none.
    ///
    /// The trail is closed (first == last) if every node is balanced, i.e. has equal in- and
    /// out-degree (directed) or even degree (undirected, a loop counts twice). Otherwise it
    /// starts at the unique node with one more outgoing than incoming edge, or at the smaller
    /// of the two nodes of odd degree. A graph without edges has no trail.
    ///
    /// # Examples
    /// ```
    /// use adjgraph::{prelude::*, algo::*};
    ///
    /// let g = AdjList::from_edges(3, [(0, 1), (1, 2), (2, 0)]);
    /// assert_eq!(g.eulerian_trail(), Some(vec![0, 1, 2, 0]));
    ///
    /// let g = AdjListUndir::from_edges(4, [(0, 1), (1, 2), (1, 3)]);
    /// assert_eq!(g.eulerian_trail(), None);
    /// ```
    fn eulerian_trail(&self) -> Option<Vec<Node>> {
        let _span = debug_span!("eulerian_trail", n = self.number_of_nodes()).entered();

        if self.is_edgeless() {
            debug!("graph has no edges");
            return None;
        }

        let Some(start) = trail_start(self) else {
            debug!("degree condition violated");
            return None;
        };

        let mut cursors = self.vertices_range().map(|u| self.arcs_of(u)).collect_vec();
        let mut used = self.edge_bitset_unset();
        let mut stack = vec![start];
        let mut trail = Vec::with_capacity(self.number_of_edges() as usize + 1);

        while let Some(&u) = stack.last() {
            match cursors[u as usize].find(|nb| !used.get_bit(nb.edge)) {
                Some(nb) => {
                    used.set_bit(nb.edge);
                    stack.push(nb.node);
                }
                None => {
                    trail.push(u);
                    stack.pop();
                }
            }
        }

        // edges outside of the start's component were never reached
        if trail.len() != self.number_of_edges() as usize + 1 {
            debug!(used = trail.len() - 1, "edges are not connected");
            return None;
        }

        trail.reverse();
        debug!(len = trail.len(), "eulerian trail found");
        Some(trail)
    }
}

impl<G> EulerianTrail for G where G: AdjacencyList + GraphEdgeOrder + GraphType + Sized {}

/// Checks the degree condition and returns the node a trail has to start at
fn trail_start<G>(graph: &G) -> Option<Node>
where
    G: AdjacencyList + GraphType,
{
    let first_with_edges = graph.vertices_with_neighbors().next()?;

    if G::is_directed() {
        let mut in_degree = vec![0i64; graph.len()];
        for Edge(_, v) in graph.edges(false) {
            in_degree[v as usize] += 1;
        }

        let mut start = None;
        let mut num_sinks = 0;
        for u in graph.vertices() {
            match graph.degree_of(u) as i64 - in_degree[u as usize] {
                0 => {}
                1 if start.is_none() => start = Some(u),
                -1 if num_sinks == 0 => num_sinks += 1,
                _ => return None,
            }
        }

        if start.is_some() != (num_sinks == 1) {
            return None;
        }
        Some(start.unwrap_or(first_with_edges))
    } else {
        let odd = graph
            .vertices()
            .filter(|&u| {
                let degree: NumNodes = graph
                    .neighbors_of(u)
                    .map(|v| if v == u { 2 } else { 1 })
                    .sum();
                degree % 2 == 1
            })
            .collect_vec();

        match odd.as_slice() {
            [] => Some(first_with_edges),
            [u, _] => Some(*u),
            _ => None,
        }
    }
}
