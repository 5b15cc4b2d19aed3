use std::collections::BTreeSet;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::iter::FromIterator;

use crate::crossword::WordId;

/// A candidate word, stored as upper-case letters
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word {
    letters: Vec<char>,
}

impl Word {
    pub fn new(s: &str) -> Self {
        Self {
            letters: s.chars().map(uppercase_letter).collect(),
        }
    }

    /// The number of letters (not bytes) in the word
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn letter(&self, offset: usize) -> Option<char> {
        self.letters.get(offset).copied()
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }
}

/// Upper-cases a letter unless that would expand it to several letters (`ß` becomes `SS`)
fn uppercase_letter(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

impl Display for Word {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for &letter in &self.letters {
            write!(f, "{}", letter)?;
        }
        Ok(())
    }
}

/// The set of words available to every variable. Words are sorted and unique, so a `WordId` is stable
/// for a given set of words.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dictionary {
    words: Vec<Word>,
}

impl Dictionary {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: BTreeSet<Word> = words
            .into_iter()
            .map(|s| s.as_ref().trim().to_owned())
            .filter(|s| !s.is_empty())
            .map(|s| Word::new(&s))
            .collect();
        Self {
            words: words.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn word(&self, id: WordId) -> &Word {
        &self.words[id]
    }

    /// Finds the id of a word, ignoring case
    pub fn find(&self, s: &str) -> Option<WordId> {
        self.words.binary_search(&Word::new(s)).ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = (WordId, &Word)> {
        self.words.iter().enumerate()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::new(iter)
    }
}
