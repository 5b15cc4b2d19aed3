//! Variable and value ordering for backtracking search

use std::cmp::Reverse;

use ahash::AHashMap;
use itertools::Itertools;

use crate::crossword::solve::domains::Domains;
use crate::crossword::solve::WordReuse;
use crate::crossword::{Assignment, Crossword, Overlap, VariableId, WordId};

/// Chooses the unassigned variable with the fewest remaining words. Ties go to the variable with the
/// most neighbors, then to the lowest id. Returns `None` if every variable is assigned.
pub(crate) fn select_unassigned_variable(
    crossword: &Crossword,
    domains: &Domains,
    assignment: &Assignment,
) -> Option<VariableId> {
    crossword
        .variable_ids()
        .filter(|&id| !assignment.contains(id))
        .min_by_key(|&id| (domains[id].len(), Reverse(crossword.neighbors(id).len())))
}

/// The letters available to an unassigned neighbor in the cell it shares with the variable being
/// ordered
struct NeighborLetters {
    neighbor: VariableId,
    overlap: Overlap,
    counts: AHashMap<char, usize>,
    total: usize,
}

impl NeighborLetters {
    fn new(crossword: &Crossword, domains: &Domains, neighbor: VariableId, overlap: Overlap) -> Self {
        let mut counts = AHashMap::default();
        for word in domains[neighbor].iter() {
            if let Some(letter) = crossword.word(word).letter(overlap.second) {
                *counts.entry(letter).or_insert(0) += 1;
            }
        }
        Self {
            neighbor,
            overlap,
            counts,
            total: domains[neighbor].len(),
        }
    }

    /// Returns true if choosing `word` would eliminate any word from the neighbor's domain
    fn rules_out(
        &self,
        crossword: &Crossword,
        domains: &Domains,
        word: WordId,
        word_reuse: WordReuse,
    ) -> bool {
        let candidate = crossword.word(word);
        let letter = match candidate.letter(self.overlap.first) {
            Some(letter) => letter,
            None => return self.total > 0,
        };
        let mut compatible = self.counts.get(&letter).copied().unwrap_or(0);
        // the same word is never compatible with itself when reuse is forbidden
        if word_reuse == WordReuse::Forbid
            && domains[self.neighbor].contains(word)
            && candidate.letter(self.overlap.second) == Some(letter)
        {
            compatible -= 1;
        }
        compatible < self.total
    }
}

/// Orders the remaining words of `variable` by how many unassigned neighbors each would constrain,
/// least constraining first. Ties keep dictionary order.
pub(crate) fn order_domain_values(
    crossword: &Crossword,
    domains: &Domains,
    assignment: &Assignment,
    variable: VariableId,
    word_reuse: WordReuse,
) -> Vec<WordId> {
    let neighbors: Vec<NeighborLetters> = crossword
        .neighbors(variable)
        .iter()
        .filter(|&&neighbor| !assignment.contains(neighbor))
        .filter_map(|&neighbor| {
            let overlap = crossword.overlap(variable, neighbor)?;
            Some(NeighborLetters::new(crossword, domains, neighbor, overlap))
        })
        .collect();
    domains[variable]
        .iter()
        .map(|word| {
            let ruled_out = neighbors
                .iter()
                .filter(|n| n.rules_out(crossword, domains, word, word_reuse))
                .count();
            (word, ruled_out)
        })
        .sorted_by_key(|&(_, ruled_out)| ruled_out)
        .map(|(word, _)| word)
        .collect()
}
