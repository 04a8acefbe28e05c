/*!
# Edges, Weights & Arcs

An [`Edge`] is a plain pair of endpoints. Stored edges additionally carry a [`Weight`] and an
[`EdgeId`]; both are reported per adjacency entry by [`Neighbor`].
*/

use std::fmt::{Debug, Display};

use crate::{Node, utils::BitSet};

/// An edge is defined by two nodes/endpoints.
/// Is is up to the user whether an Edge is directed or not.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

/// Identifier of a stored edge. Ids are handed out sequentially from `0` in insertion order.
/// Both adjacency entries of an undirected edge share the same id.
pub type EdgeId = NumEdges;

/// Edge weights are unsigned. `Weight::MAX` is reserved and rejected on insertion.
pub type Weight = u64;

/// Weight used by `add_edge` and unweighted inputs
pub const DEFAULT_WEIGHT: Weight = 1;

/// A BitSet over EdgeIds
pub type EdgeBitSet = BitSet;

/// A single adjacency entry: the endpoint reached, the weight of the edge and its id
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Neighbor {
    pub node: Node,
    pub weight: Weight,
    pub edge: EdgeId,
}

impl Neighbor {
    /// Creates a new adjacency entry
    pub const fn new(node: Node, weight: Weight, edge: EdgeId) -> Self {
        Self { node, weight, edge }
    }
}

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1))
    }

    /// Returns true if the endpoint with smaller index comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1, self.0)
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&(Node, Node)> for Edge {
    fn from(value: &(Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}

/// An edge together with its weight, as read from or written to an edge list
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct WeightedEdge(pub Node, pub Node, pub Weight);

impl WeightedEdge {
    /// Returns the endpoints without weight
    pub fn edge(&self) -> Edge {
        Edge(self.0, self.1)
    }
}

impl From<Edge> for WeightedEdge {
    fn from(value: Edge) -> Self {
        WeightedEdge(value.0, value.1, DEFAULT_WEIGHT)
    }
}

impl From<(Node, Node, Weight)> for WeightedEdge {
    fn from(value: (Node, Node, Weight)) -> Self {
        WeightedEdge(value.0, value.1, value.2)
    }
}

impl From<&WeightedEdge> for WeightedEdge {
    fn from(value: &WeightedEdge) -> Self {
        *value
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn edge_helpers() {
        let e = Edge(5, 2);
        assert!(!e.is_normalized());
        assert_eq!(e.normalized(), Edge(2, 5));
        assert_eq!(e.reverse(), Edge(2, 5));
        assert!(Edge(3, 3).is_loop());
        assert_eq!(format!("{e:?}"), "(5,2)");

        let w: WeightedEdge = e.into();
        assert_eq!(w, WeightedEdge(5, 2, DEFAULT_WEIGHT));
        assert_eq!(w.edge(), e);
    }
}
