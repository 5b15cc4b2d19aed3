use crate::crossword::solve::domains::Domains;
use crate::crossword::Crossword;

/// Removes every word whose length differs from its variable's length. Returns the number of words
/// removed across all variables.
pub(crate) fn apply_node_consistency(crossword: &Crossword, domains: &mut Domains) -> usize {
    debug!("removing words that do not fit variable lengths");

    let dictionary = crossword.dictionary();
    let mut count = 0;
    for id in crossword.variable_ids() {
        let variable = crossword.variable(id);
        let removed = domains[id].retain(|word| dictionary.word(word).len() == variable.length());
        trace!("removed {} words that do not fit {}", removed, variable);
        count += removed;
    }
    debug!("removed {} words by length", count);
    count
}
