/*!
# BitSet

A fixed-size set of `u32` indices backed by a [`BitVec`].
It is used for visited-markers over nodes ([`NodeBitSet`](crate::node::NodeBitSet))
and consumed-markers over edge ids ([`EdgeBitSet`](crate::edge::EdgeBitSet)).

The number of bits is fixed at construction; accessing an index `>= number_of_bits` panics.
*/

use std::fmt::Debug;

use bitvec::vec::BitVec;

/// Fixed-size bitset over `u32` indices
#[derive(Clone, Default, PartialEq, Eq)]
pub struct BitSet(BitVec);

impl BitSet {
    /// Creates a bitset with `n` cleared bits
    pub fn new(n: u32) -> Self {
        Self(BitVec::repeat(false, n as usize))
    }

    /// Creates a bitset with `n` set bits
    pub fn new_all_set(n: u32) -> Self {
        Self(BitVec::repeat(true, n as usize))
    }

    /// Creates a bitset with `n` bits where exactly the bits in `bits` are set
    pub fn new_with_bits_set<I>(n: u32, bits: I) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        let mut set = Self::new(n);
        set.set_bits(bits);
        set
    }

    /// Returns the number of bits (set or cleared)
    pub fn number_of_bits(&self) -> u32 {
        self.0.len() as u32
    }

    /// Sets bit `i` and returns its previous value
    /// ** Panics if `i >= number_of_bits` **
    pub fn set_bit(&mut self, i: u32) -> bool {
        self.0.replace(i as usize, true)
    }

    /// Sets all bits in the iterator
    pub fn set_bits<I>(&mut self, bits: I)
    where
        I: IntoIterator<Item = u32>,
    {
        for i in bits {
            self.0.set(i as usize, true);
        }
    }

    /// Clears bit `i` and returns its previous value
    /// ** Panics if `i >= number_of_bits` **
    pub fn clear_bit(&mut self, i: u32) -> bool {
        self.0.replace(i as usize, false)
    }

    /// Returns the value of bit `i`
    /// ** Panics if `i >= number_of_bits` **
    pub fn get_bit(&self, i: u32) -> bool {
        self.0[i as usize]
    }

    /// Clears every bit
    pub fn clear_all(&mut self) {
        self.0.fill(false);
    }

    /// Returns the number of set bits
    pub fn cardinality(&self) -> u32 {
        self.0.count_ones() as u32
    }

    /// Returns *true* if every bit is set
    pub fn are_all_set(&self) -> bool {
        self.0.all()
    }

    /// Iterates over the indices of all set bits in increasing order
    pub fn iter_set_bits(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter_ones().map(|i| i as u32)
    }

    /// Iterates over the indices of all cleared bits in increasing order
    pub fn iter_cleared_bits(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter_zeros().map(|i| i as u32)
    }
}

impl Debug for BitSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter_set_bits()).finish()
    }
}
