/*!
`adjgraph` is a graph data structure & algorithms library for vertex-indexed graphs that are
- **directed** or **undirected** (fixed by the representation type),
- **weighted** or not (every edge carries a weight, `1` by default),
- stored either as **adjacency lists** or as an **adjacency matrix** behind one set of traits.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
The number of nodes is fixed when the graph is created; nodes are never added or removed.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)`. Every stored edge additionally
has a [`Weight`] and an [`EdgeId`]; ids are handed out in insertion order and let algorithms tell
parallel edges apart.

### Directed vs Undirected

- In an **undirected** graph, inserting `(u, v)` also makes `u` a neighbor of `v`, with the same weight and id.
- In a **directed** graph, the edge has orientation, so `Edge(u, v)` and `Edge(v, u)` are considered distinct.

### Available Representations

See the [`repr`] module for the full list of graph storage backends:

- [`AdjList`](crate::repr::AdjList) / [`AdjListUndir`](crate::repr::AdjListUndir)
- [`SparseAdjList`](crate::repr::SparseAdjList) / [`SparseAdjListUndir`](crate::repr::SparseAdjListUndir)
- [`AdjMatrix`](crate::repr::AdjMatrix) / [`AdjMatrixUndir`](crate::repr::AdjMatrixUndir)

# Design

Algorithms are implemented as traits on the graph itself (`graph.bfs_distances([s])`,
`graph.compute_bridges()`, ...). Where an algorithm has options, it is also available as a
configurable struct using the *Builder* / *Setter* pattern, e.g. [`algo::Condensation`].

Outcomes such as an unreachable target, an acyclic graph or a missing Eulerian trail are
reported as `None`; only invalid input (out-of-range vertices, reserved weights) produces a
[`GraphError`].

# Usage

- [`prelude`] includes definitions for nodes, edges, basic graph operations, and all standard graph representations,
- [`algo`] includes traversals, shortest paths, cycles, bipartiteness, components, articulation points, bridges, Eulerian trails and derived graphs,
- [`gens`] includes deterministic substructures (paths, cycles, cliques) and a `G(n,p)` generator,
- [`io`] reads and writes edge lists.

In most use-cases, `use adjgraph::{prelude::*, algo::*};` suffices for your needs.

```
use adjgraph::{prelude::*, algo::*};

let graph = AdjListUndir::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]);
let tree = graph.bfs_distances([0]);

assert_eq!(tree.distance_to(2), Some(2));
assert_eq!(tree.path_to(2).map(|p| p.len()), Some(3));
assert!(graph.is_bipartite());
```
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;
pub mod utils;

pub use edge::*;
pub use error::GraphError;
pub use node::*;

/// `adjgraph::prelude` includes definitions for nodes and edges, all basic graph operation traits as well as all implemented representations.
pub mod prelude {
    pub use super::{edge::*, error::GraphError, node::*, ops::*, repr::*};
}
