/*!
# Utilities

Provides small helper structures used across the crate:
- [`BitSet`]: the fixed-size bitset behind `NodeBitSet` and `EdgeBitSet`,
- an abstraction over [`Set`] so traversals can pick their visited-marker,
- [`FromCapacity`] to construct such sets generically,
- [`Probability`] validation for random generators.
*/

use std::{collections::HashSet, hash::RandomState};

use fxhash::{FxBuildHasher, FxHashSet};
use num::{One, Zero};

pub mod bitset;
pub mod set;

pub use bitset::BitSet;
pub use set::Set;

/// Helper trait for probalities
pub trait Probability {
    /// Returns *true* if the probality is valid (ie. between `0` and `1`)
    fn is_valid_probility(&self) -> bool;
}

impl<P> Probability for P
where
    P: Zero + One + PartialOrd,
{
    fn is_valid_probility(&self) -> bool {
        Self::zero().le(self) && Self::one().ge(self)
    }
}

/// Helper trait for datastructure that can be initialized with capacity.
/// Can be interpreted as reserved space or guaranteed used space.
pub trait FromCapacity: Sized {
    /// Create a new instance with a given capacity
    fn from_capacity(capacity: usize) -> Self {
        Self::from_total_used_capacity(capacity, capacity)
    }

    /// Creates a new instance from the total capacity (ie. max-value for example) and the actual
    /// capacity that will be used (space-wise).
    fn from_total_used_capacity(total: usize, used: usize) -> Self;
}

impl FromCapacity for BitSet {
    fn from_total_used_capacity(total: usize, _used: usize) -> Self {
        // Using `BitSet` as a Set requires intializing to the maximum element
        Self::new(total as u32)
    }
}

impl<T> FromCapacity for HashSet<T, RandomState> {
    fn from_total_used_capacity(_total: usize, used: usize) -> Self {
        Self::with_capacity(used)
    }
}

impl<T> FromCapacity for FxHashSet<T> {
    fn from_total_used_capacity(_total: usize, used: usize) -> Self {
        Self::with_capacity_and_hasher(used, FxBuildHasher::default())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn probabilities() {
        assert!(0.0.is_valid_probility());
        assert!(0.5.is_valid_probility());
        assert!(1.0.is_valid_probility());
        assert!(!1.5.is_valid_probility());
        assert!(!(-0.1).is_valid_probility());
    }
}
