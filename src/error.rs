/*!
# Errors

Storage and algorithm failures that callers are expected to handle. Outcomes such as an
unreachable target or a missing Eulerian trail are *not* errors and are reported as `None`.
*/

use thiserror::Error;

use crate::{edge::Weight, node::*};

/// Errors raised when inserting into or querying a graph
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// An endpoint is not in `0..number_of_nodes`
    #[error("vertex {vertex} is out of range for a graph with {number_of_nodes} nodes")]
    InvalidVertex {
        vertex: Node,
        number_of_nodes: NumNodes,
    },

    /// The weight is reserved and cannot be stored
    #[error("weight {weight} is reserved and cannot be stored")]
    InvalidWeight { weight: Weight },

    /// An algorithm restricted to a class of weights encountered another weight
    #[error("edge ({from},{to}) has weight {weight} which is not supported here")]
    UnsupportedWeight { from: Node, to: Node, weight: Weight },
}

impl From<GraphError> for std::io::Error {
    fn from(value: GraphError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidData, value)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display_and_conversion() {
        let err = GraphError::InvalidVertex {
            vertex: 7,
            number_of_nodes: 3,
        };
        assert_eq!(
            err.to_string(),
            "vertex 7 is out of range for a graph with 3 nodes"
        );

        let io: std::io::Error = err.into();
        assert_eq!(io.kind(), std::io::ErrorKind::InvalidData);
    }
}
