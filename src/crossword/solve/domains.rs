use std::ops::{Index, IndexMut};

use crate::crossword::solve::word_set::WordSet;
use crate::crossword::{Crossword, VariableId};

/// The candidate words of every variable
#[derive(Clone, Debug)]
pub(crate) struct Domains {
    domains: Vec<WordSet>,
}

impl Domains {
    /// Every variable starts with the whole dictionary
    pub fn new(crossword: &Crossword) -> Self {
        let all = WordSet::with_all(crossword.dictionary().len());
        Self {
            domains: vec![all; crossword.variables().len()],
        }
    }

    /// The first variable with no candidate words left
    pub fn find_empty(&self) -> Option<VariableId> {
        self.domains.iter().position(WordSet::is_empty)
    }
}

impl Index<VariableId> for Domains {
    type Output = WordSet;

    fn index(&self, id: VariableId) -> &Self::Output {
        &self.domains[id]
    }
}

impl IndexMut<VariableId> for Domains {
    fn index_mut(&mut self, id: VariableId) -> &mut Self::Output {
        &mut self.domains[id]
    }
}
