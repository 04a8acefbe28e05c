use std::{iter::Copied, slice::Iter};

use smallvec::{Array, SmallVec};

use super::*;

/// Trait for methods on the Neighborhood of a specified Node
pub trait Neighborhood: Clone {
    fn new(n: NumNodes) -> Self;

    /// Returns the number of adjacency entries in the Neighborhood
    fn num_of_neighbors(&self) -> NumNodes;

    type ArcIter<'a>: Iterator<Item = Neighbor> + 'a
    where
        Self: 'a;

    /// Returns an iterator over all adjacency entries in the Neighborhood
    fn arcs(&self) -> Self::ArcIter<'_>;

    /// Returns the weight of the first entry pointing to `v`
    /// ** Might panic if `v >= n` **
    fn weight_of(&self, v: Node) -> Option<Weight> {
        self.arcs().find(|nb| nb.node == v).map(|nb| nb.weight)
    }

    /// Returns *true* if `v` is in the Neighborhood
    /// ** Might panic if `v >= n` **
    fn has_neighbor(&self, v: Node) -> bool {
        self.weight_of(v).is_some()
    }

    /// Inserts an adjacency entry.
    ///
    /// Neighborhoods holding at most one entry per endpoint overwrite the weight of an
    /// existing entry and return `Some(id)` of that entry; `arc.edge` is then ignored.
    /// Otherwise the entry is appended and `None` is returned.
    /// ** Might panic if `arc.node >= n` **
    fn insert_arc(&mut self, arc: Neighbor) -> Option<EdgeId>;

    /// Removes the first entry pointing to `v` (with id `id` if given) and returns its id.
    /// ** Might panic if `v >= n` **
    fn remove_arc(&mut self, v: Node, id: Option<EdgeId>) -> Option<EdgeId>;

    /// Removes all entries in the Neighborhood
    fn clear(&mut self);
}

/// Basic Neighborhood-Impl. using `Vec<Neighbor>`. Keeps parallel edges.
#[derive(Debug, Default, Clone)]
pub struct ListNeighborhood(pub Vec<Neighbor>);

impl Neighborhood for ListNeighborhood {
    fn new(_n: NumNodes) -> Self {
        Self(Default::default())
    }

    fn num_of_neighbors(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    type ArcIter<'a>
        = Copied<Iter<'a, Neighbor>>
    where
        Self: 'a;

    fn arcs(&self) -> Self::ArcIter<'_> {
        self.0.iter().copied()
    }

    fn insert_arc(&mut self, arc: Neighbor) -> Option<EdgeId> {
        self.0.push(arc);
        None
    }

    fn remove_arc(&mut self, v: Node, id: Option<EdgeId>) -> Option<EdgeId> {
        let pos = self
            .0
            .iter()
            .position(|nb| nb.node == v && id.is_none_or(|id| nb.edge == id))?;
        // `remove` instead of `swap_remove` to keep insertion order
        Some(self.0.remove(pos).edge)
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}

/// Like `ListNeighborhood` but uses `SmallVec<[Neighbor; N]>` instead.
/// Prefer this if the graph is known to be sparse.
#[derive(Debug, Default, Clone)]
pub struct SparseListNeighborhood<const N: usize = 4>(pub SmallVec<[Neighbor; N]>)
where
    [Neighbor; N]: Array<Item = Neighbor>;

impl<const N: usize> Neighborhood for SparseListNeighborhood<N>
where
    [Neighbor; N]: Array<Item = Neighbor>,
{
    fn new(_n: NumNodes) -> Self {
        Self(Default::default())
    }

    fn num_of_neighbors(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    type ArcIter<'a>
        = Copied<Iter<'a, Neighbor>>
    where
        Self: 'a;

    fn arcs(&self) -> Self::ArcIter<'_> {
        self.0.iter().copied()
    }

    fn insert_arc(&mut self, arc: Neighbor) -> Option<EdgeId> {
        self.0.push(arc);
        None
    }

    fn remove_arc(&mut self, v: Node, id: Option<EdgeId>) -> Option<EdgeId> {
        let pos = self
            .0
            .iter()
            .position(|nb| nb.node == v && id.is_none_or(|id| nb.edge == id))?;
        Some(self.0.remove(pos).edge)
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}

/// A single occupied cell of an adjacency matrix row
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Cell {
    pub weight: Weight,
    pub edge: EdgeId,
}

/// A row of an adjacency matrix. Absent edges are `None`; at most one edge per endpoint.
#[derive(Debug, Default, Clone)]
pub struct MatrixNeighborhood {
    cells: Vec<Option<Cell>>,
    degree: NumNodes,
}

impl Neighborhood for MatrixNeighborhood {
    fn new(n: NumNodes) -> Self {
        Self {
            cells: vec![None; n as usize],
            degree: 0,
        }
    }

    fn num_of_neighbors(&self) -> NumNodes {
        self.degree
    }

    type ArcIter<'a>
        = MatrixArcIter<'a>
    where
        Self: 'a;

    fn arcs(&self) -> Self::ArcIter<'_> {
        MatrixArcIter {
            cells: &self.cells,
            next: 0,
        }
    }

    fn weight_of(&self, v: Node) -> Option<Weight> {
        self.cells[v as usize].map(|cell| cell.weight)
    }

    fn insert_arc(&mut self, arc: Neighbor) -> Option<EdgeId> {
        let slot = &mut self.cells[arc.node as usize];
        match slot {
            Some(cell) => {
                cell.weight = arc.weight;
                Some(cell.edge)
            }
            None => {
                *slot = Some(Cell {
                    weight: arc.weight,
                    edge: arc.edge,
                });
                self.degree += 1;
                None
            }
        }
    }

    fn remove_arc(&mut self, v: Node, id: Option<EdgeId>) -> Option<EdgeId> {
        let slot = &mut self.cells[v as usize];
        let cell = (*slot).filter(|cell| id.is_none_or(|id| cell.edge == id))?;
        *slot = None;
        self.degree -= 1;
        Some(cell.edge)
    }

    fn clear(&mut self) {
        self.cells.fill(None);
        self.degree = 0;
    }
}

/// Iterator over the occupied cells of a matrix row in ascending endpoint order
#[derive(Debug, Clone)]
pub struct MatrixArcIter<'a> {
    cells: &'a [Option<Cell>],
    next: usize,
}

impl Iterator for MatrixArcIter<'_> {
    type Item = Neighbor;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(cell) = self.cells.get(self.next) {
            self.next += 1;
            if let Some(Cell { weight, edge }) = *cell {
                return Some(Neighbor::new((self.next - 1) as Node, weight, edge));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.cells.len() - self.next))
    }
}

#[cfg(test)]
mod test {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn list_keeps_parallel_entries() {
        let mut nbs = ListNeighborhood::new(4);
        assert_eq!(nbs.insert_arc(Neighbor::new(2, 5, 0)), None);
        assert_eq!(nbs.insert_arc(Neighbor::new(1, 1, 1)), None);
        assert_eq!(nbs.insert_arc(Neighbor::new(2, 7, 2)), None);

        assert_eq!(nbs.num_of_neighbors(), 3);
        assert_eq!(nbs.arcs().map(|nb| nb.node).collect_vec(), vec![2, 1, 2]);
        assert_eq!(nbs.weight_of(2), Some(5));

        assert_eq!(nbs.remove_arc(2, Some(2)), Some(2));
        assert_eq!(nbs.remove_arc(2, Some(2)), None);
        assert_eq!(nbs.remove_arc(2, None), Some(0));
        assert!(!nbs.has_neighbor(2));
    }

    #[test]
    fn sparse_list_keeps_insertion_order() {
        let mut nbs = SparseListNeighborhood::<2>::new(8);
        for (i, v) in [7, 3, 5, 0].into_iter().enumerate() {
            nbs.insert_arc(Neighbor::new(v, 1, i as EdgeId));
        }
        nbs.remove_arc(3, None);
        assert_eq!(nbs.arcs().map(|nb| nb.node).collect_vec(), vec![7, 5, 0]);
    }

    #[test]
    fn matrix_overwrites_and_orders() {
        let mut nbs = MatrixNeighborhood::new(5);
        assert_eq!(nbs.insert_arc(Neighbor::new(4, 2, 0)), None);
        assert_eq!(nbs.insert_arc(Neighbor::new(1, 3, 1)), None);
        assert_eq!(nbs.insert_arc(Neighbor::new(4, 9, 2)), Some(0));

        assert_eq!(nbs.num_of_neighbors(), 2);
        assert_eq!(
            nbs.arcs().collect_vec(),
            vec![Neighbor::new(1, 3, 1), Neighbor::new(4, 9, 0)]
        );

        assert_eq!(nbs.remove_arc(4, Some(1)), None);
        assert_eq!(nbs.remove_arc(4, None), Some(0));
        assert_eq!(nbs.weight_of(4), None);
        nbs.clear();
        assert_eq!(nbs.num_of_neighbors(), 0);
    }
}
