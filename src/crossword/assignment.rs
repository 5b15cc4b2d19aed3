use vec_map::VecMap;

use crate::crossword::solve::consistency::is_consistent;
use crate::crossword::solve::WordReuse;
use crate::crossword::{Crossword, VariableId, WordId};

/// A mapping from some or all variables to the words chosen for them
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Assignment {
    words: VecMap<WordId>,
}

impl Assignment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, variable: VariableId) -> Option<WordId> {
        self.words.get(variable).copied()
    }

    pub fn contains(&self, variable: VariableId) -> bool {
        self.words.contains_key(variable)
    }

    /// Binds a word to a variable, returning the word it was previously bound to
    pub fn insert(&mut self, variable: VariableId, word: WordId) -> Option<WordId> {
        self.words.insert(variable, word)
    }

    pub fn remove(&mut self, variable: VariableId) -> Option<WordId> {
        self.words.remove(variable)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates bound variables in ascending order
    pub fn iter(&self) -> impl Iterator<Item = (VariableId, WordId)> + '_ {
        self.words.iter().map(|(variable, &word)| (variable, word))
    }

    /// Returns true if every variable of the crossword is bound to a dictionary word
    pub fn is_complete(&self, crossword: &Crossword) -> bool {
        crossword
            .variable_ids()
            .all(|id| self.get(id).map_or(false, |word| word < crossword.dictionary().len()))
    }

    /// Returns true if the bound words fit their variables and agree wherever they cross
    pub fn is_consistent(&self, crossword: &Crossword, word_reuse: WordReuse) -> bool {
        is_consistent(crossword, self, word_reuse)
    }
}
