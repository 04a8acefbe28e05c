/*!
# Graph Algorithms

This module provides a suite of **graph algorithms** built on top of the graph representations in this crate.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use adjgraph::algo::*;
```
and gain access to traversal, shortest paths, cycles, connectivity, cuts, Eulerian trails and derived graphs.
If possible, algorithms are provided as **iterators**, making it easy to consume results lazily.

Every algorithm allocates its state per call and drops it on return. Depth-first searches use
explicit stacks, so arbitrarily deep graphs do not overflow the call stack.
*/

mod bipartite;
mod bridges;
mod connectivity;
mod cycle;
mod derived;
mod dfs;
mod distances;
mod euler;
mod path;
mod traversal;
mod vertex_cuts;

use crate::{prelude::*, utils::*};

pub use bipartite::*;
pub use bridges::*;
pub use connectivity::*;
pub use cycle::*;
pub use derived::*;
pub use dfs::*;
pub use distances::*;
pub use euler::*;
pub use path::*;
pub use traversal::*;
pub use vertex_cuts::*;
