//! The AC-3 algorithm. A variable is arc consistent with a neighbor when every word in its domain has
//! at least one word in the neighbor's domain with the same letter in their shared cell.

use ahash::AHashMap;

use crate::collections::LinkedAHashSet;
use crate::crossword::solve::domains::Domains;
use crate::crossword::solve::WordReuse;
use crate::crossword::{Crossword, VariableId, WordId};

/// A directed constraint: make the first variable consistent with the second
pub(crate) type Arc = (VariableId, VariableId);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PropagateResult {
    Consistent,
    /// A variable has no candidate words left
    Invalid(VariableId),
}

/// Words in a domain sharing a letter at some offset
#[derive(Clone, Copy)]
struct Support {
    count: usize,
    word: WordId,
}

/// Removes words from the domain of `x` that have no supporting word in the domain of `y`. Returns
/// true if any word was removed. Does nothing if `x` and `y` do not cross.
pub(crate) fn revise(
    crossword: &Crossword,
    domains: &mut Domains,
    x: VariableId,
    y: VariableId,
    word_reuse: WordReuse,
) -> bool {
    let overlap = match crossword.overlap(x, y) {
        Some(overlap) => overlap,
        None => return false,
    };
    let dictionary = crossword.dictionary();

    // index the words of y by their letter in the shared cell
    let mut supports: AHashMap<char, Support> = AHashMap::default();
    for word in domains[y].iter() {
        if let Some(letter) = dictionary.word(word).letter(overlap.second) {
            supports
                .entry(letter)
                .and_modify(|support| support.count += 1)
                .or_insert(Support { count: 1, word });
        }
    }

    let removed = domains[x].retain(|word| {
        let letter = match dictionary.word(word).letter(overlap.first) {
            Some(letter) => letter,
            None => return false,
        };
        supports.get(&letter).map_or(false, |support| {
            // when reuse is forbidden, a word cannot support itself
            word_reuse == WordReuse::Allow || support.count > 1 || support.word != word
        })
    });
    if removed > 0 {
        trace!(
            "removed {} words from {} without support in {}",
            removed,
            crossword.variable(x),
            crossword.variable(y)
        );
    }
    removed > 0
}

/// Every ordered pair of crossing variables
pub(crate) fn all_arcs(crossword: &Crossword) -> impl Iterator<Item = Arc> + '_ {
    crossword
        .variable_ids()
        .flat_map(move |x| crossword.neighbors(x).iter().map(move |&y| (x, y)))
}

/// Enforces arc consistency starting from the given arcs, or from every arc if `arcs` is `None`.
/// Stops as soon as a domain becomes empty.
pub(crate) fn ac3(
    crossword: &Crossword,
    domains: &mut Domains,
    word_reuse: WordReuse,
    arcs: Option<Vec<Arc>>,
) -> PropagateResult {
    if let Some(id) = domains.find_empty() {
        debug!("{} has no candidate words", crossword.variable(id));
        return PropagateResult::Invalid(id);
    }
    let mut queue: LinkedAHashSet<Arc> = match arcs {
        Some(arcs) => arcs.into_iter().collect(),
        None => all_arcs(crossword).collect(),
    };
    let mut revisions = 0;
    while let Some((x, y)) = queue.pop_front() {
        if !revise(crossword, domains, x, y, word_reuse) {
            continue;
        }
        revisions += 1;
        if domains[x].is_empty() {
            debug!(
                "no words left for {} after {} revisions",
                crossword.variable(x),
                revisions
            );
            return PropagateResult::Invalid(x);
        }
        for &k in crossword.neighbors(x) {
            if k != y {
                queue.insert((k, x));
            }
        }
    }
    debug!("arc consistency reached after {} revisions", revisions);
    PropagateResult::Consistent
}
