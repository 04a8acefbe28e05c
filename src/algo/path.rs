/*!
Parent-pointer walk-back shared by shortest paths, cycle witnesses and traversal trees.
*/

use super::*;

/// Walks parent pointers from `end` until a node without parent (the root) is reached and
/// returns the path `root, ..., end`.
///
/// `parent_of` must describe a forest; cycles in the parent relation are not detected.
///
/// # Examples
/// ```
/// use adjgraph::{prelude::*, algo::*};
///
/// let parent = [None, Some(0), Some(1), Some(0)];
/// assert_eq!(walk_back(2, |u| parent[u as usize]), vec![0, 1, 2]);
/// assert_eq!(walk_back(0, |u| parent[u as usize]), vec![0]);
/// ```
pub fn walk_back<F>(end: Node, mut parent_of: F) -> Vec<Node>
where
    F: FnMut(Node) -> Option<Node>,
{
    let mut path = vec![end];
    let mut node = end;
    while let Some(p) = parent_of(node) {
        path.push(p);
        node = p;
    }
    path.reverse();
    path
}

/// Walks parent pointers from `end` until `stop` is reached and returns `stop, ..., end`.
/// Returns `None` if a root is reached before `stop`.
///
/// # Examples
/// ```
/// use adjgraph::{prelude::*, algo::*};
///
/// let parent = [None, Some(0), Some(1), Some(2)];
/// assert_eq!(walk_back_until(3, 1, |u| parent[u as usize]), Some(vec![1, 2, 3]));
/// assert_eq!(walk_back_until(1, 3, |u| parent[u as usize]), None);
/// ```
pub fn walk_back_until<F>(end: Node, stop: Node, mut parent_of: F) -> Option<Vec<Node>>
where
    F: FnMut(Node) -> Option<Node>,
{
    let mut path = vec![end];
    let mut node = end;
    while node != stop {
        node = parent_of(node)?;
        path.push(node);
    }
    path.reverse();
    Some(path)
}
