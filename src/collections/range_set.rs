use std::fmt;
use std::fmt::{Debug, Formatter};

const BLOCK_BITS: usize = 64;

/// A set of integers in `0..capacity`, stored as a bit vector
#[derive(Clone, PartialEq, Eq)]
pub struct RangeSet {
    len: usize,
    capacity: usize,
    blocks: Vec<u64>,
}

impl RangeSet {
    /// Creates an empty set that may hold values less than `capacity`
    pub fn new(capacity: usize) -> RangeSet {
        RangeSet {
            len: 0,
            capacity,
            blocks: vec![0; block_count(capacity)],
        }
    }

    /// Creates a set containing every value less than `capacity`
    pub fn with_all(capacity: usize) -> RangeSet {
        let mut blocks = vec![!0; block_count(capacity)];
        let tail = capacity % BLOCK_BITS;
        if tail != 0 {
            if let Some(last) = blocks.last_mut() {
                *last = (1_u64 << tail) - 1;
            }
        }
        RangeSet {
            len: capacity,
            capacity,
            blocks,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn contains(&self, n: usize) -> bool {
        let (block, mask) = self.locate(n);
        self.blocks[block] & mask != 0
    }

    pub fn insert(&mut self, n: usize) -> bool {
        let (block, mask) = self.locate(n);
        if self.blocks[block] & mask != 0 {
            return false;
        }
        self.blocks[block] |= mask;
        self.len += 1;
        true
    }

    pub fn remove(&mut self, n: usize) -> bool {
        let (block, mask) = self.locate(n);
        if self.blocks[block] & mask == 0 {
            return false;
        }
        self.blocks[block] &= !mask;
        self.len -= 1;
        true
    }

    /// Removes every value for which `f` returns false. Returns the number of values removed.
    pub fn retain(&mut self, mut f: impl FnMut(usize) -> bool) -> usize {
        let removed: Vec<usize> = self.iter().filter(|&n| !f(n)).collect();
        for &n in &removed {
            self.remove(n);
        }
        removed.len()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            blocks: &self.blocks,
            block_index: 0,
            current: self.blocks.first().copied().unwrap_or(0),
        }
    }

    fn locate(&self, n: usize) -> (usize, u64) {
        assert!(
            n < self.capacity,
            "{} is out of range for a set of capacity {}",
            n,
            self.capacity
        );
        (n / BLOCK_BITS, 1 << (n % BLOCK_BITS))
    }
}

fn block_count(capacity: usize) -> usize {
    (capacity + BLOCK_BITS - 1) / BLOCK_BITS
}

impl Debug for RangeSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

pub struct Iter<'a> {
    blocks: &'a [u64],
    block_index: usize,
    current: u64,
}

impl Iterator for Iter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while self.current == 0 {
            if self.block_index + 1 >= self.blocks.len() {
                return None;
            }
            self.block_index += 1;
            self.current = self.blocks[self.block_index];
        }
        let bit = self.current.trailing_zeros() as usize;
        // clear the lowest set bit
        self.current &= self.current - 1;
        Some(self.block_index * BLOCK_BITS + bit)
    }
}

impl<'a> IntoIterator for &'a RangeSet {
    type Item = usize;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::collections::range_set::RangeSet;

    #[test]
    #[should_panic]
    fn insert_too_high() {
        let mut set = RangeSet::new(4);
        set.insert(4);
    }

    #[test]
    fn insert_remove_result() {
        let mut set = RangeSet::new(4);
        assert!(set.insert(1));
        assert!(!set.insert(1));
        assert_eq!(1, set.len());
        assert!(set.remove(1));
        assert!(!set.remove(1));
        assert!(set.is_empty());
    }

    #[test]
    fn with_all_spans_blocks() {
        let set = RangeSet::with_all(130);
        assert_eq!(130, set.len());
        assert!(set.contains(0));
        assert!(set.contains(64));
        assert!(set.contains(129));
        assert_eq!((0..130).collect::<Vec<_>>(), set.iter().collect::<Vec<_>>());
    }

    #[test]
    fn with_all_empty() {
        let set = RangeSet::with_all(0);
        assert!(set.is_empty());
        assert_eq!(None, set.iter().next());
    }

    #[test]
    fn iter_skips_empty_blocks() {
        let mut set = RangeSet::new(200);
        set.insert(199);
        set.insert(3);
        set.insert(70);
        let vec: Vec<_> = set.iter().collect();
        assert_eq!(vec![3_usize, 70, 199], vec);
    }

    #[test]
    fn retain() {
        let mut set = RangeSet::with_all(10);
        let removed = set.retain(|n| n % 3 == 0);
        assert_eq!(6, removed);
        assert_eq!(vec![0, 3, 6, 9], set.iter().collect::<Vec<_>>());
        assert_eq!(0, set.retain(|n| n % 3 == 0));
    }
}
