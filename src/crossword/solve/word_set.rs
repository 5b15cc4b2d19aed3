use std::fmt;
use std::fmt::{Debug, Formatter};

use crate::collections::range_set;
use crate::collections::RangeSet;
use crate::crossword::WordId;

/// A small abstraction over `RangeSet` for dictionary words
#[derive(Clone, PartialEq)]
pub(crate) struct WordSet(RangeSet);

impl Debug for WordSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl WordSet {
    /// A set of every word in a dictionary of `len` words
    pub fn with_all(len: usize) -> Self {
        WordSet(RangeSet::with_all(len))
    }

    pub fn contains(&self, word: WordId) -> bool {
        self.0.contains(word)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> range_set::Iter<'_> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn retain(&mut self, f: impl FnMut(WordId) -> bool) -> usize {
        self.0.retain(f)
    }

    /// Removes every word except `word`
    pub fn retain_only(&mut self, word: WordId) -> usize {
        self.0.retain(|w| w == word)
    }
}
